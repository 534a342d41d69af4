//! Configuration file loading for claude-cli
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./claude-cli.toml` or `./.claude-cli.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/claude-cli/config.toml`
//! 4. Default values
//!
//! Command-line flags override all of these; that merge happens in the
//! binary.

mod credentials;
mod file_config;
mod loader;

pub use credentials::{CredentialSource, resolve_credential, resolve_credential_from_env};
pub use file_config::{
    ConfigValidationError, FileAnthropicConfig, FileConfig, FileDefaultsConfig, FileOutputConfig,
    FileProvidersConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
