//! Predef sampler — error types.

use predef_core::error::PredefError;
use thiserror::Error;

/// Startup and runtime errors for the sampler.
#[derive(Debug, Error)]
pub enum SamplerError {
    /// An environment variable holds an invalid value.
    #[error("configuration error: {0}")]
    Config(String),

    /// A draw was rejected by the random provider.
    #[error(transparent)]
    Predef(#[from] PredefError),

    /// A worker thread panicked before reporting.
    #[error("worker {0} panicked")]
    Worker(usize),

    /// The report could not be serialized.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
