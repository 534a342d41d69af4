//! Reading a single message from a file (`--file` mode)

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a message file could not be used
#[derive(Debug, Error)]
pub enum MessageFileError {
    #[error("File '{}' not found", .0.display())]
    NotFound(PathBuf),

    #[error("Cannot read file '{}' - invalid encoding", .0.display())]
    InvalidEncoding(PathBuf),

    #[error("File is empty")]
    Empty,

    #[error("Cannot read file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read `path` as UTF-8 and trim it. Whitespace-only content is an error.
pub fn read_message_file(path: &Path) -> Result<String, MessageFileError> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => MessageFileError::NotFound(path.to_path_buf()),
        _ => MessageFileError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let text =
        String::from_utf8(bytes).map_err(|_| MessageFileError::InvalidEncoding(path.to_path_buf()))?;

    let message = text.trim();
    if message.is_empty() {
        return Err(MessageFileError::Empty);
    }
    Ok(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_reads_and_trims() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prompt.txt");
        std::fs::write(&path, "\n  Explain lifetimes.  \n\n").unwrap();

        assert_eq!(read_message_file(&path).unwrap(), "Explain lifetimes.");
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.txt");

        let err = read_message_file(&path).unwrap_err();
        assert!(matches!(err, MessageFileError::NotFound(_)));
        assert_eq!(err.to_string(), format!("File '{}' not found", path.display()));
    }

    #[test]
    fn test_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.txt");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0xc3]).unwrap();

        let err = read_message_file(&path).unwrap_err();
        assert!(matches!(err, MessageFileError::InvalidEncoding(_)));
        assert!(err.to_string().ends_with("- invalid encoding"));
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blank.txt");
        std::fs::write(&path, " \n\t \n").unwrap();

        let err = read_message_file(&path).unwrap_err();
        assert!(matches!(err, MessageFileError::Empty));
        assert_eq!(err.to_string(), "File is empty");
    }

    #[test]
    fn test_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = read_message_file(dir.path()).unwrap_err();
        assert!(matches!(err, MessageFileError::Io { .. }));
    }
}
