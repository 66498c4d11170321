//! Error types for the RAG service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for RAG operations
pub type Result<T> = std::result::Result<T, Error>;

/// RAG service errors
///
/// Malformed LLM output is deliberately *not* an error: the answer parser and
/// the relevance evaluator degrade to null/sentinel values instead, so only
/// failed upstream calls abort a request.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration or request validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Embedder or search index call failed
    #[error("Retrieval failed: {0}")]
    Retrieval(String),

    /// LLM completion call failed
    #[error("Generation failed: {0}")]
    Generation(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a retrieval error
    pub fn retrieval(message: impl Into<String>) -> Self {
        Self::Retrieval(message.into())
    }

    /// Create a generation error
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation(message.into())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::Config(_) => StatusCode::BAD_REQUEST,
            Error::Retrieval(_) | Error::Generation(_) => StatusCode::BAD_GATEWAY,
            Error::Io(_) | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_preserve_cause() {
        let err = Error::retrieval("connection refused");
        assert_eq!(err.to_string(), "Retrieval failed: connection refused");

        let err = Error::generation("HTTP 503");
        assert_eq!(err.to_string(), "Generation failed: HTTP 503");
    }
}
