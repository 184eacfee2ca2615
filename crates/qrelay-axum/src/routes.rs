//! Route definitions and router construction.

use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;

use crate::bootstrap::AxumContext;
use crate::handlers;
use crate::state::AppState;

/// Create the main Axum router.
///
/// The relay exposes exactly one operation, `POST /chat`, plus a liveness
/// endpoint.
pub fn create_router(ctx: AxumContext) -> Router {
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/health", get(health_check))
        .route("/chat", post(handlers::chat::chat))
        .with_state(state)
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
