//! Spinner shown while waiting for a reply

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// A spinner on stderr for the lifetime of one exchange.
///
/// A disabled spinner draws nothing, so callers need not branch.
pub struct ExchangeSpinner {
    bar: Option<ProgressBar>,
}

impl ExchangeSpinner {
    pub fn start(enabled: bool, message: &str) -> Self {
        if !enabled {
            return Self::disabled();
        }

        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::style());
        bar.set_message(message.to_string());
        bar.enable_steady_tick(TICK_INTERVAL);
        Self { bar: Some(bar) }
    }

    pub fn disabled() -> Self {
        Self { bar: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.bar.is_some()
    }

    /// Remove the spinner line before the reply is printed.
    pub fn finish(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}
