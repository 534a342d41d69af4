//! Chat session use case.
//!
//! A [`ChatSession`] owns one [`Transcript`] and drives exchanges through the
//! [`MessagesTransport`] port:
//!
//! 1. Build an [`ExchangeRequest`] from the full transcript plus a pending
//!    user turn (the pending turn is not committed yet)
//! 2. Hand it to the transport for exactly one exchange
//! 3. On success, commit the user turn and the assistant reply, in that order
//! 4. On failure, leave the transcript untouched
//!
//! Step 4 means a failed exchange never leaves an orphan user turn behind, so
//! retrying the same input does not duplicate it in history.

use crate::config::SessionDefaults;
use crate::ports::messages_transport::MessagesTransport;
use crate::ports::transcript_store::{PersistenceError, TranscriptStore};
use claude_cli_domain::util::one_line_preview;
use claude_cli_domain::{
    ApiKey, ConfigError, ExchangeOutcome, ExchangeRequest, Model, Transcript, Turn,
};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Per-exchange overrides. Unset fields fall back to the session defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExchangeOptions {
    pub model: Option<Model>,
    pub max_tokens: Option<u32>,
    pub system_prompt: Option<String>,
}

impl ExchangeOptions {
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = Some(model);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }
}

/// A conversation with the remote service.
///
/// Mutating operations take `&mut self`, so at most one exchange can be in
/// flight per session.
pub struct ChatSession {
    credential: ApiKey,
    defaults: SessionDefaults,
    transcript: Transcript,
    transport: Arc<dyn MessagesTransport>,
    store: Arc<dyn TranscriptStore>,
}

impl ChatSession {
    /// Create a session with an empty transcript.
    ///
    /// Fails with [`ConfigError::MissingCredential`] when the credential is
    /// absent or blank, and [`ConfigError::InvalidMaxTokens`] when the default
    /// token budget is zero.
    pub fn new(
        credential: Option<String>,
        defaults: SessionDefaults,
        transport: Arc<dyn MessagesTransport>,
        store: Arc<dyn TranscriptStore>,
    ) -> Result<Self, ConfigError> {
        let credential = ApiKey::from_optional(credential)?;
        if defaults.max_tokens == 0 {
            return Err(ConfigError::InvalidMaxTokens(defaults.max_tokens));
        }

        debug!(
            model = %defaults.model,
            max_tokens = defaults.max_tokens,
            has_system_prompt = defaults.system_prompt.is_some(),
            "Chat session created"
        );

        Ok(Self {
            credential,
            defaults,
            transcript: Transcript::new(),
            transport,
            store,
        })
    }

    pub fn defaults(&self) -> &SessionDefaults {
        &self.defaults
    }

    pub fn model(&self) -> &Model {
        &self.defaults.model
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Exchange using the session defaults.
    pub async fn exchange(&mut self, user_text: &str) -> ExchangeOutcome {
        self.exchange_with(user_text, ExchangeOptions::default())
            .await
    }

    /// Exchange with per-call overrides.
    ///
    /// `user_text` may be empty; deciding whether to send it is the caller's
    /// business.
    pub async fn exchange_with(
        &mut self,
        user_text: &str,
        options: ExchangeOptions,
    ) -> ExchangeOutcome {
        let request = self.build_request(user_text, options);

        info!(
            model = %request.model,
            history = self.transcript.len(),
            "Sending message: {}",
            one_line_preview(user_text, 80)
        );

        let outcome = self
            .transport
            .perform_exchange(&request, &self.credential)
            .await;

        match &outcome {
            ExchangeOutcome::Success {
                assistant_text,
                usage,
                model_echo,
            } => {
                self.transcript
                    .commit_exchange(Turn::user(user_text), Turn::assistant(assistant_text));
                debug!(
                    model = %model_echo,
                    input_tokens = ?usage.input_tokens,
                    output_tokens = ?usage.output_tokens,
                    history = self.transcript.len(),
                    "Exchange committed"
                );
            }
            ExchangeOutcome::Failure { kind, detail } => {
                debug!(?kind, "Exchange failed, transcript unchanged: {}", detail);
            }
        }

        outcome
    }

    /// Build the outgoing payload without touching the transcript.
    pub fn build_request(&self, user_text: &str, options: ExchangeOptions) -> ExchangeRequest {
        let model = options.model.unwrap_or_else(|| self.defaults.model.clone());
        let max_tokens = options
            .max_tokens
            .filter(|n| *n > 0)
            .unwrap_or(self.defaults.max_tokens);
        let system = options
            .system_prompt
            .or_else(|| self.defaults.system_prompt.clone());

        let messages = self.transcript.with_pending(&Turn::user(user_text));

        ExchangeRequest::new(model, max_tokens, messages).with_system(system)
    }

    /// Empty the transcript. Idempotent.
    pub fn clear(&mut self) {
        debug!(discarded = self.transcript.len(), "Clearing transcript");
        self.transcript.clear();
    }

    /// Write the transcript (not the session config) to `path`.
    ///
    /// Failures are returned as data for the caller to report; they never
    /// abort the session.
    pub fn save_to_path(&self, path: &Path) -> Result<(), PersistenceError> {
        match self.store.save(self.transcript.turns(), path) {
            Ok(()) => {
                info!(
                    turns = self.transcript.len(),
                    "Saved conversation to {}",
                    path.display()
                );
                Ok(())
            }
            Err(e) => {
                debug!("Could not save conversation: {}", e);
                Err(e)
            }
        }
    }

    /// Replace the transcript with the content of `path`.
    ///
    /// The file is parsed in full before anything is assigned, so on failure
    /// the current transcript is exactly as it was.
    pub fn load_from_path(&mut self, path: &Path) -> Result<(), PersistenceError> {
        match self.store.load(path) {
            Ok(turns) => {
                info!(turns = turns.len(), "Loaded conversation from {}", path.display());
                self.transcript.replace(turns);
                Ok(())
            }
            Err(e) => {
                debug!("Could not load conversation, keeping current history: {}", e);
                Err(e)
            }
        }
    }
}
