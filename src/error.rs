//! Error types for the document chat service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, Error>;

/// Service errors
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed request (missing multipart field, bad JSON, ...)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Unsupported file type
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    /// Text extraction failed on a corrupt or unreadable document
    #[error("Failed to extract text from '{filename}': {message}")]
    Extraction { filename: String, message: String },

    /// Embedding service failure
    #[error("Embedding generation failed: {0}")]
    Embedding(String),

    /// Answer generation failure
    #[error("Answer generation failed: {0}")]
    Generation(String),

    /// Unknown or deleted session
    #[error("Session not found: {0}")]
    SessionNotFound(Uuid),

    /// Vector index error
    #[error("Vector index error: {0}")]
    Index(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create an extraction error
    pub fn extraction(filename: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Extraction {
            filename: filename.into(),
            message: message.into(),
        }
    }

    /// Create an embedding error
    pub fn embedding(message: impl Into<String>) -> Self {
        Self::Embedding(message.into())
    }

    /// Create a generation error
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Config(_) | Error::InvalidRequest(_) | Error::UnsupportedType(_) => {
                StatusCode::BAD_REQUEST
            }
            Error::SessionNotFound(_) => StatusCode::NOT_FOUND,
            Error::Extraction { .. }
            | Error::Embedding(_)
            | Error::Generation(_)
            | Error::Index(_)
            | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            Error::Config(_) => "config_error",
            Error::InvalidRequest(_) => "invalid_request",
            Error::UnsupportedType(_) => "unsupported_type",
            Error::Extraction { .. } => "extraction_error",
            Error::Embedding(_) => "embedding_error",
            Error::Generation(_) => "generation_error",
            Error::SessionNotFound(_) => "session_not_found",
            Error::Index(_) => "index_error",
            Error::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "error": {
                "type": self.error_type(),
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_400() {
        assert_eq!(
            Error::UnsupportedType("docx".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::InvalidRequest("no file".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn missing_session_maps_to_404() {
        let err = Error::SessionNotFound(Uuid::new_v4());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_type(), "session_not_found");
    }

    #[test]
    fn upstream_failures_map_to_500() {
        assert_eq!(
            Error::embedding("service unreachable").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            Error::generation("model rejected input").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            Error::extraction("broken.pdf", "bad xref").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
