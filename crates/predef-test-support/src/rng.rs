//! Test sources — scripted `RandomSource` implementations for tests.

use predef_core::rng::RandomSource;

/// A source that always returns `min`. Suitable for tests that only care
/// about the lower edge of a draw.
#[derive(Debug, Clone, Copy)]
pub struct MinSource;

impl RandomSource for MinSource {
    fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
        min
    }
}

/// A source that always returns `max`.
#[derive(Debug, Clone, Copy)]
pub struct MaxSource;

impl RandomSource for MaxSource {
    fn next_u32_range(&mut self, _min: u32, max: u32) -> u32 {
        max
    }
}

/// A source that returns values from a predetermined sequence and records
/// every `(min, max)` it was asked for. Panics if the sequence is exhausted.
#[derive(Debug)]
pub struct SequenceSource {
    values: Vec<u32>,
    index: usize,
    requests: Vec<(u32, u32)>,
}

impl SequenceSource {
    /// Create a new `SequenceSource` with the given values.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            values,
            index: 0,
            requests: Vec::new(),
        }
    }

    /// Returns the `(min, max)` pairs requested so far, in call order.
    #[must_use]
    pub fn requests(&self) -> Vec<(u32, u32)> {
        self.requests.clone()
    }
}

impl RandomSource for SequenceSource {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        self.requests.push((min, max));
        let val = self.values[self.index];
        self.index += 1;
        val
    }
}
