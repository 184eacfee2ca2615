//! Relay-level error type.

use thiserror::Error;

use crate::ports::ProviderError;

/// Errors produced by the relay service.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The inbound request carried no question text.
    ///
    /// Rejected before any provider call is made.
    #[error("No question provided")]
    EmptyQuestion,

    /// The upstream provider call failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_question_message_matches_contract() {
        // The HTTP adapter serializes this message verbatim into the 400 body.
        assert_eq!(RelayError::EmptyQuestion.to_string(), "No question provided");
    }

    #[test]
    fn test_provider_error_is_transparent() {
        let err = RelayError::from(ProviderError::NoCandidates);
        assert_eq!(
            err.to_string(),
            "provider returned no generation candidates"
        );
    }
}
