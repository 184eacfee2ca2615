//! Process configuration for the relay.
//!
//! Configuration is loaded explicitly, once, before any listener starts, and
//! then passed immutably into the composition root. Recognized options:
//!
//! - `COHERE_API_KEY` - credential authenticating provider calls
//! - `QRELAY_PORT` - listener port for the HTTP relay (default 5001)

/// Default listener port for the HTTP relay service.
pub const DEFAULT_RELAY_PORT: u16 = 5001;

/// Environment variable holding the provider credential.
pub const API_KEY_VAR: &str = "COHERE_API_KEY";

/// Environment variable overriding the listener port.
pub const PORT_VAR: &str = "QRELAY_PORT";

/// Immutable relay configuration, read once at process start.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Credential for the generation provider.
    ///
    /// A missing credential is not a startup error: the provider client is
    /// constructed with an empty key and fails on first use, matching the
    /// relay's lazy-failure contract.
    pub api_key: String,
    /// Port the HTTP relay listens on.
    pub port: u16,
}

impl RelayConfig {
    /// Load configuration from the process environment.
    ///
    /// Callers that want `.env` support load it (e.g. via `dotenvy`) before
    /// calling this.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary lookup function.
    ///
    /// Exists so the parsing rules can be tested without mutating the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup(API_KEY_VAR).unwrap_or_default();
        if api_key.is_empty() {
            tracing::warn!(
                "{API_KEY_VAR} is not set; provider calls will fail until it is provided"
            );
        }

        let port = match lookup(PORT_VAR) {
            None => DEFAULT_RELAY_PORT,
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(
                    "ignoring invalid {PORT_VAR} value {raw:?}, using {DEFAULT_RELAY_PORT}"
                );
                DEFAULT_RELAY_PORT
            }),
        };

        Self { api_key, port }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from<'a>(
        pairs: &'a [(&'a str, &'a str)],
    ) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        }
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = RelayConfig::from_lookup(|_| None);
        assert_eq!(config.api_key, "");
        assert_eq!(config.port, DEFAULT_RELAY_PORT);
    }

    #[test]
    fn test_reads_key_and_port() {
        let config =
            RelayConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "sk-test"), (PORT_VAR, "8080")]));
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_invalid_port_falls_back_to_default() {
        let config = RelayConfig::from_lookup(lookup_from(&[(PORT_VAR, "not-a-port")]));
        assert_eq!(config.port, DEFAULT_RELAY_PORT);
    }
}
