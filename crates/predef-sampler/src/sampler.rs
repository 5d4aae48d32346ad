//! Worker fan-out and distribution report.

use std::collections::BTreeMap;
use std::thread;

use predef_core::error::PredefError;
use predef_core::rng::RandomSource;
use predef_random::{OsSeededRandom, RandomProvider};
use serde::Serialize;
use tracing::{info, instrument};

use crate::config::SamplerConfig;
use crate::error::SamplerError;

/// Widest range for which per-value counts are included in the report.
pub const MAX_HISTOGRAM_SPAN: u32 = 1_024;

/// Tally of one or more workers' draws.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    /// Number of draws recorded.
    pub total: u64,
    /// Smallest value drawn.
    pub min: Option<i32>,
    /// Largest value drawn.
    pub max: Option<i32>,
    /// Occurrences per value, when the range is narrow enough.
    pub counts: Option<BTreeMap<i32, u64>>,
}

impl Tally {
    fn for_range(lower: i32, upper: i32) -> Self {
        let counts = (upper.abs_diff(lower) < MAX_HISTOGRAM_SPAN).then(BTreeMap::new);
        Self {
            counts,
            ..Self::default()
        }
    }

    fn record(&mut self, value: i32) {
        self.total += 1;
        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.max = Some(self.max.map_or(value, |m| m.max(value)));
        if let Some(counts) = self.counts.as_mut() {
            *counts.entry(value).or_insert(0) += 1;
        }
    }

    fn merge(&mut self, other: Tally) {
        self.total += other.total;
        self.min = match (self.min, other.min) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        self.max = match (self.max, other.max) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        if let (Some(mine), Some(theirs)) = (self.counts.as_mut(), other.counts) {
            for (value, count) in theirs {
                *mine.entry(value).or_insert(0) += count;
            }
        }
    }
}

/// Summary printed by the sampler binary.
#[derive(Debug, Clone, Serialize)]
pub struct SamplerReport {
    /// Worker threads used.
    pub workers: usize,
    /// Draws per worker.
    pub draws_per_worker: usize,
    /// Inclusive lower bound.
    pub lower: i32,
    /// Inclusive upper bound.
    pub upper: i32,
    /// Total draws across all workers.
    pub total_draws: u64,
    /// Smallest value observed.
    pub min_seen: Option<i32>,
    /// Largest value observed.
    pub max_seen: Option<i32>,
    /// Whether every value in the range was drawn at least once. `None` when
    /// the range is too wide to track.
    pub full_coverage: Option<bool>,
    /// Occurrences per value, omitted for wide ranges.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counts: Option<BTreeMap<i32, u64>>,
}

/// Performs `draws` bounded draws on one provider.
///
/// # Errors
///
/// Returns `PredefError::InvalidRange` if `lower > upper`.
#[instrument(skip(provider), level = "debug")]
pub fn draw_batch<S: RandomSource>(
    worker: usize,
    provider: &mut RandomProvider<S>,
    draws: usize,
    lower: i32,
    upper: i32,
) -> Result<Tally, PredefError> {
    let mut tally = Tally::for_range(lower, upper);
    for _ in 0..draws {
        tally.record(provider.next_int_between(lower, upper)?);
    }
    Ok(tally)
}

/// Runs every worker on its own thread with its own OS-seeded generator and
/// merges their tallies.
///
/// # Errors
///
/// Returns `SamplerError::Predef` if a draw is rejected and
/// `SamplerError::Worker` if a worker thread panics.
pub fn run(config: &SamplerConfig) -> Result<SamplerReport, SamplerError> {
    let SamplerConfig {
        workers,
        draws,
        lower,
        upper,
    } = *config;

    let results = thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|worker| {
                scope.spawn(move || {
                    let mut provider = RandomProvider::new(OsSeededRandom::new());
                    draw_batch(worker, &mut provider, draws, lower, upper)
                })
            })
            .collect();

        handles
            .into_iter()
            .enumerate()
            .map(|(worker, handle)| handle.join().map_err(|_| SamplerError::Worker(worker)))
            .collect::<Vec<_>>()
    });

    let mut merged = Tally::for_range(lower, upper);
    for result in results {
        merged.merge(result??);
    }

    let full_coverage = merged.counts.as_ref().map(|counts| {
        u64::try_from(counts.len()).ok() == Some(u64::from(upper.abs_diff(lower)) + 1)
    });
    info!(total_draws = merged.total, ?full_coverage, "sampling complete");

    Ok(SamplerReport {
        workers,
        draws_per_worker: draws,
        lower,
        upper,
        total_draws: merged.total,
        min_seen: merged.min,
        max_seen: merged.max,
        full_coverage,
        counts: merged.counts,
    })
}
