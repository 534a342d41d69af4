//! Messages API wire types and the response parse step.
//!
//! The raw body goes through two stages, each with its own failure kind:
//!
//! ```text
//! body ──serde_json──▶ Value          (fails → RequestFailed)
//!      ──from_value──▶ MessagesResponse ──content[0].text──▶ reply
//!                                     (fails → ResponseFormatError)
//! ```

use claude_cli_domain::{ExchangeOutcome, Model, Usage};
use serde::Deserialize;
use serde_json::Value;

/// Successful Messages API response body (only the fields we read).
#[derive(Debug, Deserialize)]
pub(crate) struct MessagesResponse {
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub usage: Option<Value>,
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContentBlock {
    #[serde(rename = "type", default)]
    pub block_type: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Turn a 2xx response body into an [`ExchangeOutcome`].
///
/// `requested_model` is echoed back when the body does not name a model.
pub fn parse_response(body: &str, requested_model: &Model) -> ExchangeOutcome {
    let value: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(e) => {
            return ExchangeOutcome::request_failed(format!("malformed response body: {}", e));
        }
    };

    let response: MessagesResponse = match serde_json::from_value(value) {
        Ok(r) => r,
        Err(e) => return ExchangeOutcome::response_format_error(e.to_string()),
    };

    let Some(first) = response.content.into_iter().next() else {
        return ExchangeOutcome::response_format_error("response `content` is empty");
    };

    let Some(text) = first.text else {
        return ExchangeOutcome::response_format_error(format!(
            "first content block (type {}) has no `text`",
            first.block_type.as_deref().unwrap_or("unknown")
        ));
    };

    let usage = response.usage.as_ref().map(usage_from_value).unwrap_or_default();
    let model_echo = response
        .model
        .as_deref()
        .map(Model::from)
        .unwrap_or_else(|| requested_model.clone());

    ExchangeOutcome::success(text, usage, model_echo)
}

/// Read token counts leniently: a missing or non-numeric field is simply
/// absent.
fn usage_from_value(value: &Value) -> Usage {
    let count = |field: &str| {
        value
            .get(field)
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
    };
    Usage {
        input_tokens: count("input_tokens"),
        output_tokens: count("output_tokens"),
    }
}
