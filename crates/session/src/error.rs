//! Session error types.

/// Error type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors that can end a session early.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Progress could not be persisted
    #[error(transparent)]
    Storage(#[from] qbank_storage::StorageError),
}
