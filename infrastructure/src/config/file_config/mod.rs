//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types where
//! needed.

mod defaults;
mod output;
mod providers;
mod repl;

pub use defaults::FileDefaultsConfig;
pub use output::FileOutputConfig;
pub use providers::{FileAnthropicConfig, FileProvidersConfig};
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation issues (reported as warnings; the offending
/// value falls back to its built-in default)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("defaults.model: model name cannot be empty")]
    EmptyModelName,

    #[error("defaults.max_tokens: must be a positive integer")]
    ZeroMaxTokens,

    #[error("providers.anthropic.base_url: cannot be empty")]
    EmptyBaseUrl,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Session defaults (model, max tokens, system prompt)
    pub defaults: FileDefaultsConfig,
    /// Provider settings
    pub providers: FileProvidersConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = self.defaults.validate();
        if self.providers.anthropic.base_url.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyBaseUrl);
        }
        issues
    }
}
