//! Messages transport port
//!
//! Defines the interface for one request/response exchange with the remote
//! messaging API.

use async_trait::async_trait;
use claude_cli_domain::{ApiKey, ExchangeOutcome, ExchangeRequest};

/// Transport for a single exchange with the remote service.
///
/// Implementations are stateless pass-throughs: one request per call, no
/// retries, no history mutation. Every failure is mapped into
/// [`ExchangeOutcome::Failure`] rather than returned as an error, so callers
/// always receive a typed outcome.
#[async_trait]
pub trait MessagesTransport: Send + Sync {
    /// Perform exactly one exchange with the given payload and credential.
    async fn perform_exchange(&self, request: &ExchangeRequest, credential: &ApiKey)
    -> ExchangeOutcome;
}
