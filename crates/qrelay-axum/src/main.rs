//! HTTP relay entry point.
//!
//! Loads configuration once, then hands off to the server bootstrap.

use qrelay_axum::start_server;
use qrelay_core::RelayConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load environment variables from a local .env file if present
    dotenvy::dotenv().ok();

    let config = RelayConfig::from_env();
    tracing::info!(port = config.port, "starting qrelay HTTP relay");

    start_server(config).await
}
