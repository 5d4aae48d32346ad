//! Random number source abstraction.
//!
//! In production, this wraps a real RNG owned by one execution context.
//! In tests, a scripted implementation is injected.

/// Abstraction over a per-context source of random numbers.
///
/// A source is owned by a single thread or task at a time; it is `Send` so
/// it can be moved into a worker, but never needs to be shared.
pub trait RandomSource: Send {
    /// Generate a random `u32` in the range `[min, max]` inclusive.
    ///
    /// Callers guarantee `min <= max`.
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        (**self).next_u32_range(min, max)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        (**self).next_u32_range(min, max)
    }
}
