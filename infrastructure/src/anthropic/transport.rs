//! Anthropic Messages API transport
//!
//! One POST per exchange, no retries, no backoff. Every failure is mapped
//! into [`ExchangeOutcome::Failure`].

use super::types::parse_response;
use crate::config::FileAnthropicConfig;
use async_trait::async_trait;
use claude_cli_application::MessagesTransport;
use claude_cli_domain::util::one_line_preview;
use claude_cli_domain::{ApiKey, ExchangeOutcome, ExchangeRequest};
use reqwest::Client;
use tracing::debug;

/// Max characters of an error body echoed into a failure detail.
const ERROR_BODY_PREVIEW: usize = 200;

/// Stateless HTTP transport for the Messages API.
pub struct AnthropicTransport {
    client: Client,
    base_url: String,
    api_version: String,
}

impl AnthropicTransport {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.anthropic.com";
    pub const DEFAULT_API_VERSION: &'static str = "2023-06-01";

    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            api_version: Self::DEFAULT_API_VERSION.to_string(),
        }
    }

    /// Build from the `[providers.anthropic]` config section.
    pub fn from_config(config: &FileAnthropicConfig) -> Self {
        Self::new()
            .with_base_url(&config.base_url)
            .with_api_version(&config.api_version)
    }

    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Full URL of the messages endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/v1/messages", self.base_url.trim_end_matches('/'))
    }
}

impl Default for AnthropicTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessagesTransport for AnthropicTransport {
    async fn perform_exchange(
        &self,
        request: &ExchangeRequest,
        credential: &ApiKey,
    ) -> ExchangeOutcome {
        let url = self.endpoint();

        debug!(
            url = %url,
            model = %request.model,
            messages = request.messages.len(),
            "Messages API request"
        );

        let response = match self
            .client
            .post(&url)
            .header("x-api-key", credential.expose())
            .header("anthropic-version", &self.api_version)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => return ExchangeOutcome::request_failed(e.to_string()),
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(b) => b,
            Err(e) => {
                return ExchangeOutcome::request_failed(format!(
                    "Failed to read response body: {}",
                    e
                ));
            }
        };

        debug!(status = status.as_u16(), bytes = body.len(), "Messages API response");

        if !status.is_success() {
            return ExchangeOutcome::request_failed(format!(
                "HTTP {}: {}",
                status,
                one_line_preview(&body, ERROR_BODY_PREVIEW)
            ));
        }

        parse_response(&body, &request.model)
    }
}
