//! Outgoing exchange payload

use super::entities::Turn;
use crate::core::model::Model;
use serde::Serialize;

/// The payload for one exchange: history plus the pending user turn.
///
/// Serializes to the Messages API request body; `system` is omitted when
/// absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExchangeRequest {
    pub model: Model,
    pub max_tokens: u32,
    pub messages: Vec<Turn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
}

impl ExchangeRequest {
    pub fn new(model: Model, max_tokens: u32, messages: Vec<Turn>) -> Self {
        Self {
            model,
            max_tokens,
            messages,
            system: None,
        }
    }

    /// Attach a system instruction. Blank instructions are dropped.
    pub fn with_system(mut self, system: Option<String>) -> Self {
        self.system = system.filter(|s| !s.trim().is_empty());
        self
    }
}
