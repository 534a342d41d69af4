//! Domain error types

use thiserror::Error;

/// Errors raised while assembling a session from configuration.
///
/// These are the only errors allowed to abort the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API key required. Set ANTHROPIC_API_KEY environment variable or pass --api-key")]
    MissingCredential,

    #[error("Invalid max_tokens: {0} (must be a positive integer)")]
    InvalidMaxTokens(u32),
}
