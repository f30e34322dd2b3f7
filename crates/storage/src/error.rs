//! Storage error types.

use std::path::PathBuf;

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur while reading or writing the data files.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// File could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File the read was aimed at
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// File could not be written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// File the write was aimed at
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// File contents are not valid JSON of the expected shape
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// File that failed to parse
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
