//! The request-to-completion relay service.
//!
//! Control flow is linear: validate the question, call the provider with the
//! fixed parameters, shape the first candidate into a trimmed answer.

use std::sync::Arc;

use crate::domain::{GENERATION_MODEL, GenerationRequest, GenerationResult, MAX_OUTPUT_TOKENS};
use crate::error::RelayError;
use crate::ports::{GenerationProvider, ProviderError};

/// Translates an inbound request into a single outbound provider call.
///
/// Stateless apart from the shared provider client; one instance serves all
/// concurrent requests.
pub struct RelayService {
    provider: Arc<dyn GenerationProvider>,
}

impl RelayService {
    /// Create a relay backed by the given provider.
    pub fn new(provider: Arc<dyn GenerationProvider>) -> Self {
        Self { provider }
    }

    /// Relay one question to the provider and return the trimmed answer.
    ///
    /// An empty question is rejected before any provider call. The prompt is
    /// forwarded verbatim; only the response text is trimmed.
    pub async fn ask(&self, request: GenerationRequest) -> Result<GenerationResult, RelayError> {
        if request.question.is_empty() {
            return Err(RelayError::EmptyQuestion);
        }

        tracing::debug!(prompt_len = request.question.len(), "relaying question to provider");
        let candidates = self
            .provider
            .generate(&request.question, GENERATION_MODEL, MAX_OUTPUT_TOKENS)
            .await?;

        GenerationResult::from_candidates(&candidates)
            .ok_or(RelayError::Provider(ProviderError::NoCandidates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Candidate;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Stub provider recording every call it receives.
    #[derive(Default)]
    struct StubProvider {
        candidates: Vec<Candidate>,
        fail: bool,
        calls: AtomicUsize,
        last_prompt: Mutex<Option<String>>,
    }

    impl StubProvider {
        fn returning(texts: &[&str]) -> Self {
            Self {
                candidates: texts.iter().copied().map(Candidate::new).collect(),
                ..Self::default()
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl GenerationProvider for StubProvider {
        async fn generate(
            &self,
            prompt: &str,
            model: &str,
            max_tokens: u32,
        ) -> Result<Vec<Candidate>, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            assert_eq!(model, GENERATION_MODEL);
            assert_eq!(max_tokens, MAX_OUTPUT_TOKENS);
            if self.fail {
                return Err(ProviderError::Api {
                    status: 401,
                    message: "invalid api token".to_string(),
                });
            }
            Ok(self.candidates.clone())
        }
    }

    #[tokio::test]
    async fn test_answer_is_trimmed_first_candidate() {
        let provider = Arc::new(StubProvider::returning(&["  The answer is 4.\n", "ignored"]));
        let relay = RelayService::new(provider.clone());

        let result = relay
            .ask(GenerationRequest::new("What is 2+2?"))
            .await
            .unwrap();

        assert_eq!(result.answer(), "The answer is 4.");
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_question_rejected_without_provider_call() {
        let provider = Arc::new(StubProvider::returning(&["unused"]));
        let relay = RelayService::new(provider.clone());

        let err = relay.ask(GenerationRequest::new("")).await.unwrap_err();

        assert!(matches!(err, RelayError::EmptyQuestion));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_prompt_is_forwarded_verbatim() {
        let provider = Arc::new(StubProvider::returning(&["4"]));
        let relay = RelayService::new(provider.clone());

        relay
            .ask(GenerationRequest::new("  What is 2+2?  "))
            .await
            .unwrap();

        let seen = provider.last_prompt.lock().unwrap().clone();
        assert_eq!(seen.as_deref(), Some("  What is 2+2?  "));
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        let provider = Arc::new(StubProvider::failing());
        let relay = RelayService::new(provider);

        let err = relay
            .ask(GenerationRequest::new("anything"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            RelayError::Provider(ProviderError::Api { status: 401, .. })
        ));
    }

    #[tokio::test]
    async fn test_empty_candidate_list_is_upstream_error() {
        let provider = Arc::new(StubProvider::returning(&[]));
        let relay = RelayService::new(provider);

        let err = relay
            .ask(GenerationRequest::new("anything"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            RelayError::Provider(ProviderError::NoCandidates)
        ));
    }
}
