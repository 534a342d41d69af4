//! Anthropic Messages API adapter.
//!
//! [`AnthropicTransport`] implements the
//! [`MessagesTransport`](claude_cli_application::MessagesTransport) port over
//! HTTP; [`parse_response`] is the pure response-shape check it relies on.

mod transport;
mod types;

pub use transport::AnthropicTransport;
pub use types::parse_response;
