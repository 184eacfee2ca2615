//! Internal error types for Cohere operations.
//!
//! These errors are internal to `qrelay-cohere` and are mapped to the core
//! port error at the boundary.

use qrelay_core::ProviderError;
use thiserror::Error;

/// Result type alias for Cohere operations.
pub type CohereResult<T> = Result<T, CohereError>;

/// Errors related to Cohere API operations.
#[derive(Debug, Error)]
pub enum CohereError {
    /// API request failed with an HTTP error status.
    #[error("Cohere API request failed with status {status}: {message}")]
    ApiRequestFailed {
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics.
        message: String,
    },

    /// Network or HTTP client error, including body-decoding failures.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl From<CohereError> for ProviderError {
    fn from(err: CohereError) -> Self {
        match err {
            CohereError::ApiRequestFailed { status, message } => Self::Api { status, message },
            CohereError::Network(e) if e.is_decode() => Self::InvalidResponse(e.to_string()),
            CohereError::Network(e) => Self::Network(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_request_failed_error_message() {
        let error = CohereError::ApiRequestFailed {
            status: 429,
            message: "rate limited".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("429"));
        assert!(msg.contains("rate limited"));
    }

    #[test]
    fn test_api_error_maps_to_port_api_variant() {
        let error = CohereError::ApiRequestFailed {
            status: 401,
            message: "invalid api token".to_string(),
        };
        let port_error = ProviderError::from(error);
        assert!(matches!(
            port_error,
            ProviderError::Api { status: 401, .. }
        ));
    }
}
