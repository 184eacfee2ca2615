#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod client;
pub mod config;
pub mod error;
mod models;

// Re-export primary types
pub use client::CohereClient;
pub use config::CohereConfig;
pub use error::{CohereError, CohereResult};
