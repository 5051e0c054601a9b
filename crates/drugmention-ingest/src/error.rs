//! Error types for landing-zone reads and snapshot storage.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing zone files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file not found or not a regular file.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create or write file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Format Errors ===
    /// Extension is neither `.csv` nor `.json`.
    #[error("unsupported file format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// Malformed CSV record.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Malformed JSON landing file.
    #[error("failed to parse JSON {path}: {message}")]
    JsonParse { path: PathBuf, message: String },

    /// Failed to serialize an artifact.
    #[error("failed to serialize JSON to {path}: {source}")]
    JsonWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // === Snapshot Errors ===
    /// Snapshot file is not an array of JSON objects.
    #[error("unexpected snapshot format in {path}: {reason}")]
    SnapshotShape { path: PathBuf, reason: String },
}

impl IngestError {
    /// Map an open/read failure, keeping "not found" distinct.
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::UnsupportedFormat {
            path: PathBuf::from("/landing/notes.txt"),
        };
        assert_eq!(err.to_string(), "unsupported file format: /landing/notes.txt");
    }

    #[test]
    fn test_read_error_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = IngestError::read("/landing/pubmed.csv", io);
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }
}
