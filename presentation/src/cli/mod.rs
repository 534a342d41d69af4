//! Command-line surface: argument definitions and message-file input.

pub mod commands;
pub mod message_file;
