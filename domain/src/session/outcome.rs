//! Exchange outcome types.
//!
//! An exchange ends in exactly one of two shapes:
//!
//! ```text
//! Success { assistant_text, usage, model_echo }
//! Failure { kind: RequestFailed | ResponseFormatError, detail }
//! ```
//!
//! Failures are data, not panics or propagated errors: the caller decides
//! whether to continue (interactive mode) or exit (single-message mode).

use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// Token accounting echoed by the remote service.
///
/// Either field may be missing; a response with no usage block yields
/// [`Usage::default`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub input_tokens: Option<u32>,
    #[serde(default)]
    pub output_tokens: Option<u32>,
}

impl Usage {
    pub fn new(input_tokens: u32, output_tokens: u32) -> Self {
        Self {
            input_tokens: Some(input_tokens),
            output_tokens: Some(output_tokens),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.input_tokens.is_none() && self.output_tokens.is_none()
    }
}

/// Why an exchange failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Connectivity failure, non-success status, or an unparseable body.
    RequestFailed,
    /// The body parsed as JSON but lacked the expected reply content.
    ResponseFormatError,
}

impl FailureKind {
    /// Human-readable prefix for one-line error messages.
    pub fn prefix(&self) -> &'static str {
        match self {
            FailureKind::RequestFailed => "API request failed",
            FailureKind::ResponseFormatError => "Unexpected API response format",
        }
    }
}

/// Result of one exchange with the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeOutcome {
    Success {
        assistant_text: String,
        usage: Usage,
        model_echo: Model,
    },
    Failure {
        kind: FailureKind,
        detail: String,
    },
}

impl ExchangeOutcome {
    pub fn success(assistant_text: impl Into<String>, usage: Usage, model_echo: Model) -> Self {
        ExchangeOutcome::Success {
            assistant_text: assistant_text.into(),
            usage,
            model_echo,
        }
    }

    pub fn request_failed(detail: impl Into<String>) -> Self {
        ExchangeOutcome::Failure {
            kind: FailureKind::RequestFailed,
            detail: detail.into(),
        }
    }

    pub fn response_format_error(detail: impl Into<String>) -> Self {
        ExchangeOutcome::Failure {
            kind: FailureKind::ResponseFormatError,
            detail: detail.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ExchangeOutcome::Success { .. })
    }

    /// The assistant reply, if the exchange succeeded.
    pub fn assistant_text(&self) -> Option<&str> {
        match self {
            ExchangeOutcome::Success { assistant_text, .. } => Some(assistant_text),
            ExchangeOutcome::Failure { .. } => None,
        }
    }

    pub fn usage(&self) -> Option<&Usage> {
        match self {
            ExchangeOutcome::Success { usage, .. } => Some(usage),
            ExchangeOutcome::Failure { .. } => None,
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            ExchangeOutcome::Failure { kind, .. } => Some(*kind),
            ExchangeOutcome::Success { .. } => None,
        }
    }

    /// One-line error message, e.g. `API request failed: connection refused`.
    pub fn error_message(&self) -> Option<String> {
        match self {
            ExchangeOutcome::Failure { kind, detail } => {
                Some(format!("{}: {}", kind.prefix(), detail))
            }
            ExchangeOutcome::Success { .. } => None,
        }
    }
}
