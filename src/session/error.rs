//! Session error types

use thiserror::Error;

/// Errors raised by the session container and its stores
#[derive(Error, Debug)]
pub enum SessionError {
    /// I/O operation on the backing store failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted blob could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Store lock was poisoned
    #[error("Lock error: {0}")]
    Lock(String),

    /// Chat input was blank
    #[error("Message must not be empty")]
    EmptyMessage,
}

impl From<serde_json::Error> for SessionError {
    fn from(err: serde_json::Error) -> Self {
        SessionError::Serialization(err.to_string())
    }
}

/// Result type alias for session operations
pub type SessionResult<T> = Result<T, SessionError>;
