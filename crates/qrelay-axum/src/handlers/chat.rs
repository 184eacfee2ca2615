//! Chat relay handler.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::error::HttpError;
use crate::state::AppState;
use qrelay_core::GenerationRequest;

/// Request body for the chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The question to relay. Absent is treated the same as empty.
    #[serde(default)]
    pub question: Option<String>,
}

/// Response body for a successful relay.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Trimmed text of the provider's first generation candidate.
    pub answer: String,
}

/// Relay one question to the generation provider.
///
/// POST /chat
///
/// Returns 400 with `{"error": "No question provided"}` when the question is
/// missing or empty (no provider call is made), 200 with
/// `{"answer": ...}` on success, and 502 when the provider call fails.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, HttpError> {
    let question = request.question.unwrap_or_default();
    let result = state.relay.ask(GenerationRequest::new(question)).await?;

    Ok(Json(ChatResponse {
        answer: result.into_answer(),
    }))
}
