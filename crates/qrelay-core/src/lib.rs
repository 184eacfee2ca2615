#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use config::{DEFAULT_RELAY_PORT, RelayConfig};
pub use domain::{
    Candidate, GENERATION_MODEL, GenerationRequest, GenerationResult, MAX_OUTPUT_TOKENS,
};
pub use error::RelayError;
pub use ports::{GenerationProvider, ProviderError};
pub use services::RelayService;
