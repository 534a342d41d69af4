//! Session defaults: values applied to every exchange unless overridden.
//!
//! [`SessionDefaults`] is fixed when a [`ChatSession`](crate::ChatSession) is
//! built. Per-exchange overrides go through
//! [`ExchangeOptions`](crate::ExchangeOptions) instead.

use claude_cli_domain::Model;
use serde::{Deserialize, Serialize};

/// Default max output tokens per reply.
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Defaults a session applies to each exchange.
///
/// The system prompt is sent alongside every request and never stored in
/// the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDefaults {
    /// Target model identifier.
    pub model: Model,
    /// Max output token budget (must be positive).
    pub max_tokens: u32,
    /// Optional system instruction.
    pub system_prompt: Option<String>,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            model: Model::default(),
            max_tokens: DEFAULT_MAX_TOKENS,
            system_prompt: None,
        }
    }
}

impl SessionDefaults {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }
}
