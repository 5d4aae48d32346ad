//! Bounded, inclusive-range integer draws.

use std::ops::RangeInclusive;

use predef_core::error::PredefError;
use predef_core::rng::RandomSource;
use tracing::debug;

use crate::source::ThreadRandom;

/// Draws uniformly distributed integers from an injected source.
///
/// The provider holds no state besides its source; give every execution
/// context its own provider rather than sharing one behind a lock.
///
/// A provider is `Clone` only when its source is. `ThreadRandom` clones
/// freely since every draw goes to the current thread's generator;
/// `OsSeededRandom` is not `Clone`, so an owned generator cannot be
/// duplicated into two contexts.
#[derive(Debug, Clone, Default)]
pub struct RandomProvider<S> {
    source: S,
}

impl RandomProvider<ThreadRandom> {
    /// Creates a provider that draws from the calling thread's generator.
    #[must_use]
    pub fn thread_local() -> Self {
        Self::new(ThreadRandom)
    }
}

impl<S: RandomSource> RandomProvider<S> {
    /// Creates a provider over `source`.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns an integer in `[0, upper_inclusive]`.
    ///
    /// # Errors
    ///
    /// Returns `PredefError::InvalidRange` if `upper_inclusive` is negative.
    pub fn next_int(&mut self, upper_inclusive: i32) -> Result<i32, PredefError> {
        self.next_int_between(0, upper_inclusive)
    }

    /// Returns an integer in `[lower, upper_inclusive]`.
    ///
    /// Any pair of `i32` bounds is accepted as long as it is ordered; the
    /// span is computed in unsigned space so `i32::MIN..=i32::MAX` works.
    ///
    /// # Errors
    ///
    /// Returns `PredefError::InvalidRange` if `lower > upper_inclusive`.
    pub fn next_int_between(
        &mut self,
        lower: i32,
        upper_inclusive: i32,
    ) -> Result<i32, PredefError> {
        if lower > upper_inclusive {
            debug!(lower, upper_inclusive, "rejected inverted random range");
            return Err(PredefError::InvalidRange {
                lower,
                upper_inclusive,
            });
        }

        let span = upper_inclusive.abs_diff(lower);
        let offset = self.source.next_u32_range(0, span);
        debug_assert!(offset <= span, "source returned {offset} outside [0, {span}]");

        // lower + offset never exceeds upper_inclusive, so the sum cannot wrap.
        Ok(lower.wrapping_add_unsigned(offset))
    }

    /// Returns an integer within `range`.
    ///
    /// # Errors
    ///
    /// Returns `PredefError::InvalidRange` if the range is empty.
    pub fn next_int_in(&mut self, range: RangeInclusive<i32>) -> Result<i32, PredefError> {
        let (lower, upper_inclusive) = range.into_inner();
        self.next_int_between(lower, upper_inclusive)
    }

    /// Direct access to the underlying source, for draws this provider does
    /// not cover.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Consumes the provider and returns its source.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use predef_core::error::PredefError;
    use predef_test_support::{MaxSource, MinSource, SequenceSource};

    use super::RandomProvider;

    #[test]
    fn test_next_int_zero_always_returns_zero() {
        // Arrange
        let mut provider = RandomProvider::thread_local();

        // Act / Assert
        for _ in 0..100 {
            assert_eq!(provider.next_int(0).unwrap(), 0);
        }
    }

    #[test]
    fn test_next_int_rejects_negative_upper_bound() {
        // Arrange
        let mut provider = RandomProvider::new(MinSource);

        // Act
        let result = provider.next_int(-1);

        // Assert
        assert_eq!(
            result,
            Err(PredefError::InvalidRange {
                lower: 0,
                upper_inclusive: -1,
            })
        );
    }

    #[test]
    fn test_next_int_between_rejects_inverted_range() {
        // Arrange
        let mut provider = RandomProvider::new(MinSource);

        // Act
        let result = provider.next_int_between(10, 3);

        // Assert
        match result {
            Err(PredefError::InvalidRange {
                lower,
                upper_inclusive,
            }) => {
                assert_eq!(lower, 10);
                assert_eq!(upper_inclusive, 3);
            }
            other => panic!("expected InvalidRange, got {other:?}"),
        }
    }

    #[test]
    fn test_inverted_range_does_not_consume_source() {
        // Arrange
        let mut provider = RandomProvider::new(SequenceSource::new(vec![]));

        // Act
        let _ = provider.next_int_between(1, 0);

        // Assert
        assert!(provider.source_mut().requests().is_empty());
    }

    #[test]
    fn test_offset_is_added_to_lower_bound() {
        // Arrange
        let mut provider = RandomProvider::new(SequenceSource::new(vec![0, 3, 5]));

        // Act
        let first = provider.next_int_between(-2, 3).unwrap();
        let second = provider.next_int_between(-2, 3).unwrap();
        let third = provider.next_int_between(-2, 3).unwrap();

        // Assert
        assert_eq!((first, second, third), (-2, 1, 3));
        assert_eq!(
            provider.into_inner().requests(),
            vec![(0, 5), (0, 5), (0, 5)]
        );
    }

    #[test]
    fn test_min_and_max_sources_hit_the_bounds() {
        let mut low = RandomProvider::new(MinSource);
        let mut high = RandomProvider::new(MaxSource);

        assert_eq!(low.next_int_between(4, 9).unwrap(), 4);
        assert_eq!(high.next_int_between(4, 9).unwrap(), 9);
    }

    #[test]
    fn test_full_i32_range_does_not_overflow() {
        // Arrange
        let mut low = RandomProvider::new(MinSource);
        let mut high = RandomProvider::new(MaxSource);

        // Act
        let min = low.next_int_between(i32::MIN, i32::MAX).unwrap();
        let max = high.next_int_between(i32::MIN, i32::MAX).unwrap();

        // Assert
        assert_eq!(min, i32::MIN);
        assert_eq!(max, i32::MAX);
        assert_eq!(
            RandomProvider::new(MaxSource).next_int(i32::MAX).unwrap(),
            i32::MAX
        );
    }

    #[test]
    fn test_next_int_in_forwards_range_bounds() {
        // Arrange
        let mut provider = RandomProvider::new(SequenceSource::new(vec![2]));

        // Act
        let value = provider.next_int_in(10..=20).unwrap();

        // Assert
        assert_eq!(value, 12);
        assert_eq!(provider.source_mut().requests(), vec![(0, 10)]);
    }

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_next_int_in_rejects_empty_range() {
        let mut provider = RandomProvider::new(MinSource);

        assert!(matches!(
            provider.next_int_in(5..=4),
            Err(PredefError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_cloned_thread_local_provider_keeps_bounds() {
        // Arrange
        let original = RandomProvider::thread_local();
        let mut copy = original.clone();

        // Act / Assert
        for _ in 0..1_000 {
            assert!((1..=6).contains(&copy.next_int_between(1, 6).unwrap()));
        }
    }

    #[test]
    fn test_boxed_source_can_be_injected() {
        // Arrange
        let source: Box<dyn predef_core::rng::RandomSource> = Box::new(MaxSource);
        let mut provider = RandomProvider::new(source);

        // Act / Assert
        assert_eq!(provider.next_int(6).unwrap(), 6);
    }
}
