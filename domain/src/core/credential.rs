//! API credential value object

use super::error::ConfigError;

/// Environment variable consulted when no credential is passed explicitly.
pub const API_KEY_ENV_VAR: &str = "ANTHROPIC_API_KEY";

/// A non-empty API key (Value Object)
///
/// The `Debug` impl never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Validate a raw credential.
    ///
    /// Empty or whitespace-only strings are rejected; there is no fallback.
    /// An accepted key is stored exactly as given.
    pub fn new(raw: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ConfigError::MissingCredential);
        }
        Ok(Self(raw))
    }

    /// Validate an optional credential, treating `None` as missing.
    pub fn from_optional(raw: Option<String>) -> Result<Self, ConfigError> {
        raw.map_or(Err(ConfigError::MissingCredential), Self::new)
    }

    /// Expose the secret for use in a request header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}
