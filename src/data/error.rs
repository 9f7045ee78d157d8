//! Data layer error types

use thiserror::Error;

/// Errors raised while generating or filtering records
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    /// Bad input shape or range (negative count, record without a numeric value, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Unexpected failure while producing a dataset
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DataError {
    pub fn invalid(message: impl Into<String>) -> Self {
        DataError::InvalidArgument(message.into())
    }
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;
