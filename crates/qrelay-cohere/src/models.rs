//! Wire-format types for the Cohere v1 generate endpoint.

use serde::{Deserialize, Serialize};

/// Request body for `POST /v1/generate`.
#[derive(Debug, Serialize)]
pub(crate) struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub max_tokens: u32,
}

/// Response body for `POST /v1/generate`.
///
/// Only the fields the relay consumes are modeled; everything else in the
/// payload is ignored on deserialization.
#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
    pub generations: Vec<Generation>,
}

/// One generation candidate in the response.
#[derive(Debug, Deserialize)]
pub(crate) struct Generation {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_to_expected_shape() {
        let request = GenerateRequest {
            model: "command",
            prompt: "What is 2+2?",
            max_tokens: 256,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "command",
                "prompt": "What is 2+2?",
                "max_tokens": 256,
            })
        );
    }

    #[test]
    fn test_response_tolerates_unknown_fields() {
        let payload = json!({
            "id": "gen-123",
            "prompt": "What is 2+2?",
            "generations": [
                {"id": "c-0", "text": " 4 ", "finish_reason": "COMPLETE"},
                {"id": "c-1", "text": "four"}
            ],
            "meta": {"api_version": {"version": "1"}}
        });

        let response: GenerateResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(response.generations.len(), 2);
        assert_eq!(response.generations[0].text, " 4 ");
    }

    #[test]
    fn test_response_allows_empty_generation_list() {
        let response: GenerateResponse =
            serde_json::from_value(json!({ "generations": [] })).unwrap();
        assert!(response.generations.is_empty());
    }
}
