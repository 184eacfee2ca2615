//! Public configuration for the Cohere client.

use std::time::Duration;

/// Configuration for the Cohere client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use qrelay_cohere::CohereConfig;
/// use std::time::Duration;
///
/// let config = CohereConfig::new("sk-secret")
///     .with_timeout(Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct CohereConfig {
    /// Base URL for the Cohere API.
    pub(crate) base_url: String,
    /// Credential sent as a bearer token on every request.
    ///
    /// May be empty; the API then rejects the first call, which is the
    /// relay's documented lazy-failure behavior.
    pub(crate) api_key: String,
    /// User agent string for HTTP requests.
    pub(crate) user_agent: String,
    /// Request timeout.
    pub(crate) timeout: Duration,
}

impl CohereConfig {
    /// Create a configuration with default settings and the given credential.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: "https://api.cohere.ai".to_string(),
            api_key: api_key.into(),
            user_agent: concat!("qrelay-cohere/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the base URL for the Cohere API.
    ///
    /// Defaults to `https://api.cohere.ai`. Mainly useful for pointing the
    /// client at a local stub in tests.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
