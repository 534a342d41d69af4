//! Application layer for claude-cli
//!
//! This crate contains the chat session use case, port definitions, and
//! session defaults. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_MAX_TOKENS, SessionDefaults};
pub use ports::{
    messages_transport::MessagesTransport,
    transcript_store::{PersistenceError, TranscriptStore},
};
pub use use_cases::chat_session::{ChatSession, ExchangeOptions};
