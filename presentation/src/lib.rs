//! Presentation layer for claude-cli
//!
//! This crate contains CLI definitions, output formatting,
//! the progress spinner, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ChatRepl, LoopControl, ReplCommand};
pub use cli::commands::{Cli, InputMode};
pub use cli::message_file::{MessageFileError, read_message_file};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use progress::spinner::ExchangeSpinner;
