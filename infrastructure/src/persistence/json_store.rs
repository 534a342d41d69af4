//! JSON file store for transcripts.
//!
//! The file is a UTF-8 JSON array of `{"role", "content"}` objects in
//! chronological order, pretty-printed with two-space indentation.

use claude_cli_application::{PersistenceError, TranscriptStore};
use claude_cli_domain::Turn;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads and writes transcripts as JSON arrays.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTranscriptStore;

impl JsonTranscriptStore {
    pub fn new() -> Self {
        Self
    }
}

impl TranscriptStore for JsonTranscriptStore {
    fn save(&self, turns: &[Turn], path: &Path) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(turns)
            .map_err(|e| PersistenceError::serialize(path, e.to_string()))?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| PersistenceError::io(parent, e))?;
            }
        }

        fs::write(path, json).map_err(|e| PersistenceError::io(path, e))?;
        debug!(turns = turns.len(), "Wrote {}", path.display());
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<Vec<Turn>, PersistenceError> {
        let raw = fs::read_to_string(path).map_err(|e| PersistenceError::io(path, e))?;
        let turns: Vec<Turn> =
            serde_json::from_str(&raw).map_err(|e| PersistenceError::parse(path, e.to_string()))?;
        debug!(turns = turns.len(), "Read {}", path.display());
        Ok(turns)
    }
}
