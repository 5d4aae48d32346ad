//! Predef sampler entry point.

use std::error::Error;

use predef_sampler::config::SamplerConfig;
use predef_sampler::sampler;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting predef sampler");

    let config = SamplerConfig::from_env()?;
    tracing::info!(
        workers = config.workers,
        draws = config.draws,
        lower = config.lower,
        upper = config.upper,
        "sampler configured"
    );

    let report = sampler::run(&config)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
