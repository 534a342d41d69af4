//! Core domain concepts shared across subdomains.
//!
//! - [`model::Model`]: Anthropic model identifiers
//! - [`credential::ApiKey`]: the static credential authenticating requests
//! - [`error::ConfigError`]: session configuration errors

pub mod credential;
pub mod error;
pub mod model;
