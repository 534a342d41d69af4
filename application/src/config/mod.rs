//! Application-level configuration.
//!
//! - [`SessionDefaults`]: model, token budget and system prompt applied to
//!   every exchange

pub mod session_defaults;

pub use session_defaults::{DEFAULT_MAX_TOKENS, SessionDefaults};
