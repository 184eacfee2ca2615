//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together for
//! the web adapter: the Cohere client is constructed here from the loaded
//! configuration and injected into the relay service.

use std::sync::Arc;

use anyhow::Result;
use qrelay_cohere::{CohereClient, CohereConfig};
use qrelay_core::{GenerationProvider, RelayConfig, RelayService};

/// Application context for the Axum adapter.
///
/// Holds the composed relay service for the lifetime of the process. The
/// credential lives inside the provider client and is never mutated after
/// construction.
pub struct AxumContext {
    /// The relay service handling all requests.
    pub relay: RelayService,
}

impl AxumContext {
    /// Build a context around an arbitrary provider.
    ///
    /// Tests use this to inject a stub provider; production code goes
    /// through [`bootstrap`].
    pub fn new(provider: Arc<dyn GenerationProvider>) -> Self {
        Self {
            relay: RelayService::new(provider),
        }
    }
}

/// Bootstrap the web adapter from the loaded configuration.
///
/// A missing credential is deliberately not an error here: the client is
/// built with whatever key the configuration carries and fails on first use.
pub fn bootstrap(config: &RelayConfig) -> AxumContext {
    let provider: Arc<dyn GenerationProvider> =
        Arc::new(CohereClient::new(CohereConfig::new(config.api_key.clone())));
    AxumContext::new(provider)
}

/// Start the HTTP relay on the configured port.
pub async fn start_server(config: RelayConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config);
    let app = crate::routes::create_router(ctx);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("qrelay HTTP relay listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
