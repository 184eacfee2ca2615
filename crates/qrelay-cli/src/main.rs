//! One-shot CLI relay entry point.
//!
//! `qrelay <question> <api_key>` performs exactly one generation call with
//! the fixed parameters and prints the trimmed first-candidate text to
//! stdout. Missing arguments fail with a usage error before any client is
//! constructed; provider failures surface as an error chain with a non-zero
//! exit.

use std::sync::Arc;

use clap::Parser;

use qrelay_cohere::{CohereClient, CohereConfig};
use qrelay_core::{
    GENERATION_MODEL, GenerationProvider, GenerationResult, MAX_OUTPUT_TOKENS, ProviderError,
};

/// Relay a single question to the generation provider and print the answer.
#[derive(Debug, Parser)]
#[command(name = "qrelay", version, about)]
struct Cli {
    /// Question to relay, forwarded to the provider verbatim
    question: String,
    /// Provider API key
    api_key: String,
}

/// Perform the single relay call.
///
/// Unlike the HTTP endpoint, the one-shot relay applies no emptiness check
/// to the question; whatever was given on the command line is forwarded.
async fn relay_once(
    question: &str,
    provider: &dyn GenerationProvider,
) -> anyhow::Result<String> {
    let candidates = provider
        .generate(question, GENERATION_MODEL, MAX_OUTPUT_TOKENS)
        .await?;
    let result =
        GenerationResult::from_candidates(&candidates).ok_or(ProviderError::NoCandidates)?;
    Ok(result.into_answer())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Parse CLI arguments; missing arguments exit here with a usage error
    let cli = Cli::parse();

    let provider: Arc<dyn GenerationProvider> =
        Arc::new(CohereClient::new(CohereConfig::new(cli.api_key)));

    let answer = relay_once(&cli.question, provider.as_ref()).await?;
    println!("{answer}");
    Ok(())
}
