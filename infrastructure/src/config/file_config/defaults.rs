//! Session defaults from TOML (`[defaults]` section)

use super::ConfigValidationError;
use claude_cli_application::SessionDefaults;
use claude_cli_domain::Model;
use serde::{Deserialize, Serialize};

/// Raw session defaults from TOML
///
/// # Example
///
/// ```toml
/// [defaults]
/// model = "claude-3-5-haiku-20241022"
/// max_tokens = 2048
/// system_prompt = "You are a concise assistant."
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDefaultsConfig {
    /// Model identifier sent with each request
    pub model: Option<String>,
    /// Max output tokens per reply
    pub max_tokens: Option<u32>,
    /// System prompt applied to every exchange
    pub system_prompt: Option<String>,
}

impl FileDefaultsConfig {
    /// Build [`SessionDefaults`], keeping built-in values for unset or invalid
    /// fields.
    pub fn to_session_defaults(&self) -> SessionDefaults {
        let mut defaults = SessionDefaults::default();
        if let Some(model) = self.model.as_deref().filter(|m| !m.trim().is_empty()) {
            defaults = defaults.with_model(Model::from(model.trim()));
        }
        if let Some(max_tokens) = self.max_tokens.filter(|n| *n > 0) {
            defaults = defaults.with_max_tokens(max_tokens);
        }
        if let Some(prompt) = self.system_prompt.as_deref().filter(|p| !p.trim().is_empty()) {
            defaults = defaults.with_system_prompt(prompt);
        }
        defaults
    }

    pub(super) fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();
        if matches!(self.model.as_deref(), Some(m) if m.trim().is_empty()) {
            issues.push(ConfigValidationError::EmptyModelName);
        }
        if self.max_tokens == Some(0) {
            issues.push(ConfigValidationError::ZeroMaxTokens);
        }
        issues
    }
}
