//! Infrastructure layer for claude-cli
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod anthropic;
pub mod config;
pub mod persistence;

// Re-export commonly used types
pub use anthropic::{AnthropicTransport, parse_response};
pub use config::{
    ConfigLoader, ConfigValidationError, CredentialSource, FileAnthropicConfig, FileConfig,
    FileDefaultsConfig, FileOutputConfig, FileReplConfig, resolve_credential,
    resolve_credential_from_env,
};
pub use persistence::JsonTranscriptStore;
