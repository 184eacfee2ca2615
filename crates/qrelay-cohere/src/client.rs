//! Reqwest-backed client for the Cohere generate API.

use async_trait::async_trait;

use qrelay_core::{Candidate, GenerationProvider, ProviderError};

use crate::config::CohereConfig;
use crate::error::{CohereError, CohereResult};
use crate::models::{GenerateRequest, GenerateResponse};

/// Production client for the Cohere v1 generate endpoint.
///
/// Holds its credential immutably; a single instance is shared across all
/// concurrent requests. No retries are performed - every call either fully
/// succeeds or fully fails.
pub struct CohereClient {
    http: reqwest::Client,
    config: CohereConfig,
}

impl CohereClient {
    /// Create a new client from the given configuration.
    pub fn new(config: CohereConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .expect("failed to create HTTP client");

        Self { http, config }
    }

    /// Full URL of the generate endpoint.
    fn generate_url(&self) -> String {
        format!("{}/v1/generate", self.config.base_url.trim_end_matches('/'))
    }

    async fn post_generate(
        &self,
        prompt: &str,
        model: &str,
        max_tokens: u32,
    ) -> CohereResult<GenerateResponse> {
        let body = GenerateRequest {
            model,
            prompt,
            max_tokens,
        };

        let response = self
            .http
            .post(self.generate_url())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Cohere generate call failed");
            return Err(CohereError::ApiRequestFailed {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<GenerateResponse>().await?)
    }
}

#[async_trait]
impl GenerationProvider for CohereClient {
    async fn generate(
        &self,
        prompt: &str,
        model: &str,
        max_tokens: u32,
    ) -> Result<Vec<Candidate>, ProviderError> {
        tracing::debug!(model, max_tokens, "calling Cohere generate");
        let response = self.post_generate(prompt, model, max_tokens).await?;

        Ok(response
            .generations
            .into_iter()
            .map(|generation| Candidate::new(generation.text))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_url_joins_base_without_double_slash() {
        let client = CohereClient::new(
            CohereConfig::new("sk-test").with_base_url("https://api.cohere.ai/"),
        );
        assert_eq!(client.generate_url(), "https://api.cohere.ai/v1/generate");
    }

    #[test]
    fn test_generate_url_with_stub_base() {
        let client =
            CohereClient::new(CohereConfig::new("sk-test").with_base_url("http://127.0.0.1:4010"));
        assert_eq!(client.generate_url(), "http://127.0.0.1:4010/v1/generate");
    }
}
