//! REPL configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Path to the line history file; `~/` is expanded
    pub history_file: Option<String>,
}

impl FileReplConfig {
    /// Resolve the history file, defaulting to the user data directory.
    pub fn history_path(&self) -> Option<PathBuf> {
        match self.history_file.as_deref() {
            Some(raw) if !raw.trim().is_empty() => Some(expand_home(raw.trim())),
            _ => dirs::data_dir().map(|d| d.join("claude-cli").join("history.txt")),
        }
    }
}

fn expand_home(raw: &str) -> PathBuf {
    if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}
