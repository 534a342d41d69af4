//! Transcript persistence port
//!
//! Saving and loading a transcript to a path. Failures are recoverable: the
//! session reports them and keeps its in-memory history untouched.

use claude_cli_domain::Turn;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors touching a transcript file.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: invalid conversation file: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("{}: could not encode conversation: {message}", path.display())]
    Serialize { path: PathBuf, message: String },
}

impl PersistenceError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PersistenceError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        PersistenceError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn serialize(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        PersistenceError::Serialize {
            path: path.into(),
            message: message.into(),
        }
    }

    /// The file the failed operation touched.
    pub fn path(&self) -> &Path {
        match self {
            PersistenceError::Io { path, .. }
            | PersistenceError::Parse { path, .. }
            | PersistenceError::Serialize { path, .. } => path,
        }
    }

    /// True when the file simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PersistenceError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

/// Store for serialized transcripts.
///
/// `load` must return a fully parsed turn list or an error; it never yields
/// partial content.
pub trait TranscriptStore: Send + Sync {
    fn save(&self, turns: &[Turn], path: &Path) -> Result<(), PersistenceError>;

    fn load(&self, path: &Path) -> Result<Vec<Turn>, PersistenceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_includes_path() {
        let error = PersistenceError::io(
            "/tmp/missing.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert_eq!(
            error.to_string(),
            "/tmp/missing.json: No such file or directory"
        );
        assert!(error.is_not_found());
        assert_eq!(error.path(), Path::new("/tmp/missing.json"));
    }

    #[test]
    fn test_parse_error_display() {
        let error = PersistenceError::parse("chat.json", "expected value at line 1 column 1");
        assert_eq!(
            error.to_string(),
            "chat.json: invalid conversation file: expected value at line 1 column 1"
        );
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_serialize_error_is_not_reported_as_bad_file() {
        let error = PersistenceError::serialize("out.json", "key must be a string");
        assert_eq!(
            error.to_string(),
            "out.json: could not encode conversation: key must be a string"
        );
        assert!(!error.to_string().contains("invalid conversation file"));
        assert_eq!(error.path(), Path::new("out.json"));
    }
}
