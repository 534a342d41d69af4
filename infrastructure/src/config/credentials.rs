//! Credential resolution: flag, then environment, then config file.

use claude_cli_domain::API_KEY_ENV_VAR;
use tracing::debug;

/// Where the credential came from (for diagnostics; never log the value).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    Flag,
    Environment,
    ConfigFile,
}

/// Pick the first non-blank credential in priority order.
///
/// Returns `None` when every source is absent or blank; the session turns
/// that into a configuration error.
pub fn resolve_credential(
    flag: Option<&str>,
    env_value: Option<String>,
    config_value: Option<&str>,
) -> Option<(String, CredentialSource)> {
    let non_blank = |s: &str| !s.trim().is_empty();

    if let Some(key) = flag.filter(|s| non_blank(s)) {
        return Some((key.to_string(), CredentialSource::Flag));
    }
    if let Some(key) = env_value.filter(|s| non_blank(s)) {
        return Some((key, CredentialSource::Environment));
    }
    config_value
        .filter(|s| non_blank(s))
        .map(|key| (key.to_string(), CredentialSource::ConfigFile))
}

/// [`resolve_credential`] reading `ANTHROPIC_API_KEY` from the process
/// environment.
pub fn resolve_credential_from_env(flag: Option<&str>, config_value: Option<&str>) -> Option<String> {
    let resolved = resolve_credential(flag, std::env::var(API_KEY_ENV_VAR).ok(), config_value);
    match &resolved {
        Some((_, source)) => debug!(?source, "Resolved API key"),
        None => debug!("No API key in flags, {} or config", API_KEY_ENV_VAR),
    }
    resolved.map(|(key, _)| key)
}
