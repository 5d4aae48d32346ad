//! Production random sources.

use predef_core::rng::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source backed by the calling thread's generator.
///
/// Each thread lazily creates its own generator on first use and keeps it
/// for the thread's lifetime, so a `ThreadRandom` moved between threads
/// always draws from whichever thread it currently runs on.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        rand::rng().random_range(min..=max)
    }
}

/// Owned generator seeded from operating-system entropy.
///
/// Create one per worker and move it in; draws are not reproducible.
///
/// Not `Clone`: a copy would replay the same sequence in a second context.
///
/// ```compile_fail
/// let source = predef_random::OsSeededRandom::new();
/// let _copy: predef_random::OsSeededRandom = source.clone();
/// ```
#[derive(Debug)]
pub struct OsSeededRandom(StdRng);

impl OsSeededRandom {
    /// Seed a new generator from the operating system.
    ///
    /// # Panics
    ///
    /// Panics if the operating system entropy source is unavailable.
    #[must_use]
    pub fn new() -> Self {
        Self(StdRng::from_os_rng())
    }
}

impl Default for OsSeededRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for OsSeededRandom {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        self.0.random_range(min..=max)
    }
}
