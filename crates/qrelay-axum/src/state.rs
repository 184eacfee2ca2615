//! Shared application state type.

use crate::bootstrap::AxumContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// An Arc-wrapped [`AxumContext`]; the context is read-only after
/// construction, so no locking is needed across concurrent requests.
pub type AppState = Arc<AxumContext>;
