//! Port definitions implemented by provider adapters.
//!
//! The core crate never talks to the network itself. Adapters implement
//! [`GenerationProvider`] and map their internal errors to [`ProviderError`]
//! at the boundary, so no adapter types leak into the core.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Candidate;

/// Errors surfaced by a generation provider adapter.
///
/// Every upstream failure mode collapses into one of these variants; the
/// relay performs no retries and no partial-failure handling, so a call
/// either yields candidates or exactly one of these errors.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider API rejected the request with an error status.
    #[error("provider request failed with status {status}: {message}")]
    Api {
        /// HTTP status code returned by the provider.
        status: u16,
        /// Response body or status text, for diagnostics.
        message: String,
    },

    /// The request never completed (connect, DNS, timeout, transport).
    #[error("network error calling provider: {0}")]
    Network(String),

    /// The provider answered but the payload could not be understood.
    #[error("invalid response from provider: {0}")]
    InvalidResponse(String),

    /// The provider answered successfully but returned no candidates.
    #[error("provider returned no generation candidates")]
    NoCandidates,
}

/// A hosted text-generation service, treated as an opaque collaborator.
///
/// Implementations hold their credential internally; it is supplied at
/// construction time and never mutated afterwards, so a single client can be
/// shared across concurrent requests behind an `Arc`.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Request generation candidates for `prompt`.
    ///
    /// The prompt must be forwarded verbatim. The call blocks until the
    /// provider responds or fails; there is no cancellation or deadline
    /// beyond the underlying client's own default.
    async fn generate(
        &self,
        prompt: &str,
        model: &str,
        max_tokens: u32,
    ) -> Result<Vec<Candidate>, ProviderError>;
}
