//! Domain layer for claude-cli
//!
//! Conversation entities and value objects with no I/O concerns.
//!
//! # Core Concepts
//!
//! - **Turn**: one role-tagged message (`user` or `assistant`)
//! - **Transcript**: the ordered history a session owns
//! - **Exchange**: one request/response cycle; the request carries the full
//!   transcript plus a pending user turn, the outcome is either a reply or a
//!   typed failure

pub mod core;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use core::{
    credential::{API_KEY_ENV_VAR, ApiKey},
    error::ConfigError,
    model::Model,
};
pub use session::{
    entities::{Role, Transcript, Turn},
    outcome::{ExchangeOutcome, FailureKind, Usage},
    request::ExchangeRequest,
};
