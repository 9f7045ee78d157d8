//! API Error Types
//!
//! Defines error types for the API layer and implements conversion
//! to HTTP responses with appropriate status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::data::DataError;
use crate::session::SessionError;

/// Message returned for any failure of `GET /data`
pub const GENERATE_FAILED: &str = "Failed to generate data";

/// Message returned for any failure of `POST /data`
pub const PROCESS_FAILED: &str = "Failed to process data";

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Dataset generation failed
    #[error("Generation error: {0}")]
    Generate(DataError),

    /// Filtering caller-supplied data failed
    #[error("Processing error: {0}")]
    Process(DataError),

    /// Session container or its store failed
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub request_id: String,
}

impl ApiError {
    /// Status code, machine-readable code, and client-facing message
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            ApiError::Generate(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "GENERATE_FAILED",
                GENERATE_FAILED.to_string(),
            ),
            ApiError::Process(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "PROCESS_FAILED",
                PROCESS_FAILED.to_string(),
            ),
            ApiError::Session(SessionError::EmptyMessage) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                SessionError::EmptyMessage.to_string(),
            ),
            ApiError::Session(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "SESSION_ERROR",
                self.to_string(),
            ),
            ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                self.to_string(),
            ),
            ApiError::Io(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "IO_ERROR",
                self.to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let request_id = uuid::Uuid::new_v4().to_string();

        // The full cause is logged; generation/processing failures only
        // expose the generic message to the client.
        tracing::error!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self,
            "API error occurred"
        );

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_error_hides_cause() {
        let err = ApiError::Generate(DataError::invalid("count must not be negative: -3"));
        let (status, code, message) = err.parts();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, "GENERATE_FAILED");
        assert_eq!(message, GENERATE_FAILED);
    }

    #[test]
    fn test_process_error_hides_cause() {
        let err = ApiError::Process(DataError::invalid("record 2: record has no value field"));
        let (status, _, message) = err.parts();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, PROCESS_FAILED);
    }

    #[test]
    fn test_internal_data_error_hides_cause() {
        let err = ApiError::Process(DataError::Internal("malformed request body".into()));
        let (status, code, message) = err.parts();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, "PROCESS_FAILED");
        assert_eq!(message, PROCESS_FAILED);
    }

    #[test]
    fn test_empty_message_is_bad_request() {
        let err = ApiError::Session(SessionError::EmptyMessage);
        let (status, code, _) = err.parts();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "VALIDATION_ERROR");
    }
}
