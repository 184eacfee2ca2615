//! Domain types for the prompt-to-completion relay.
//!
//! The data model is deliberately small: one request, one result, and the
//! candidate type returned by providers. `GenerationResult` can only be
//! built through [`GenerationResult::from_candidates`], so "first candidate,
//! trimmed" holds by construction everywhere a result exists.

/// Model identifier sent to the generation provider on every call.
pub const GENERATION_MODEL: &str = "command";

/// Maximum output length requested from the provider, in tokens.
pub const MAX_OUTPUT_TOKENS: u32 = 256;

/// A single inbound generation request.
///
/// Owned exclusively by the handler processing it and discarded after the
/// call completes. The question is forwarded to the provider verbatim;
/// no trimming or normalization is applied to the prompt itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// The prompt text to forward to the provider.
    pub question: String,
}

impl GenerationRequest {
    /// Create a request from the given question text.
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }
}

/// One generated text option returned by a provider.
///
/// Providers may return several candidates; the relay always consumes
/// index 0 and ignores the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The generated text, exactly as returned by the provider.
    pub text: String,
}

impl Candidate {
    /// Create a candidate from the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// The relay's answer, derived from exactly one generation candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    answer: String,
}

impl GenerationResult {
    /// Build a result from a provider's candidate list.
    ///
    /// Selects candidate index 0 and trims leading/trailing whitespace from
    /// its text. Returns `None` when the provider produced no candidates.
    pub fn from_candidates(candidates: &[Candidate]) -> Option<Self> {
        candidates.first().map(|candidate| Self {
            answer: candidate.text.trim().to_string(),
        })
    }

    /// The trimmed answer text.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Consume the result, returning the trimmed answer text.
    pub fn into_answer(self) -> String {
        self.answer
    }
}
