//! Sampler configuration read from the environment.

use std::str::FromStr;

use crate::error::SamplerError;

/// Environment variable naming the worker thread count.
pub const WORKERS_VAR: &str = "PREDEF_WORKERS";
/// Environment variable naming the draws per worker.
pub const DRAWS_VAR: &str = "PREDEF_DRAWS";
/// Environment variable naming the inclusive lower bound.
pub const LOWER_VAR: &str = "PREDEF_LOWER";
/// Environment variable naming the inclusive upper bound.
pub const UPPER_VAR: &str = "PREDEF_UPPER";

/// Validated sampler settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Number of worker threads, each with its own generator.
    pub workers: usize,
    /// Draws performed by each worker.
    pub draws: usize,
    /// Inclusive lower bound of every draw.
    pub lower: i32,
    /// Inclusive upper bound of every draw.
    pub upper: i32,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            workers: 4,
            draws: 10_000,
            lower: 1,
            upper: 6,
        }
    }
}

impl SamplerConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `SamplerError::Config` if a variable is set but invalid.
    pub fn from_env() -> Result<Self, SamplerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, falling back to defaults for
    /// unset keys.
    ///
    /// # Errors
    ///
    /// Returns `SamplerError::Config` if a value does not parse, `workers` is
    /// zero, or `lower > upper`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SamplerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            workers: parse_or(&lookup, WORKERS_VAR, defaults.workers)?,
            draws: parse_or(&lookup, DRAWS_VAR, defaults.draws)?,
            lower: parse_or(&lookup, LOWER_VAR, defaults.lower)?,
            upper: parse_or(&lookup, UPPER_VAR, defaults.upper)?,
        };

        if config.workers == 0 {
            return Err(SamplerError::Config(format!(
                "{WORKERS_VAR} must be at least 1"
            )));
        }
        if config.lower > config.upper {
            return Err(SamplerError::Config(format!(
                "{LOWER_VAR} ({}) must not exceed {UPPER_VAR} ({})",
                config.lower, config.upper
            )));
        }

        Ok(config)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, SamplerError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| SamplerError::Config(format!("{key} must be a valid number: {e}"))),
    }
}
