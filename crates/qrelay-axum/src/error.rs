//! Axum-specific error types and mappings.
//!
//! Maps relay errors to HTTP status codes and the JSON error body the
//! relay contract fixes: `{"error": <message>}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use qrelay_core::RelayError;
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The upstream generation provider failed.
    #[error("Upstream failure: {0}")]
    Upstream(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
///
/// Carries only the `error` field; the 400 payload for a missing question
/// must be exactly `{"error": "No question provided"}`.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, axum::Json(ErrorBody { error: message })).into_response()
    }
}

impl From<RelayError> for HttpError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::EmptyQuestion => Self::BadRequest(err.to_string()),
            RelayError::Provider(provider_err) => Self::Upstream(provider_err.to_string()),
        }
    }
}
