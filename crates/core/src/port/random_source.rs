// Random Source Port (for deterministic testing)

use rand::Rng;
use std::ops::Range;

/// Source of random integers (allows deterministic values in tests)
pub trait RandomSource: Send + Sync {
    /// Uniform integer in `range` (end exclusive)
    fn next_in(&self, range: Range<u32>) -> u32;
}

/// Thread-local RNG (production)
pub struct ThreadRandomSource;

impl RandomSource for ThreadRandomSource {
    fn next_in(&self, range: Range<u32>) -> u32 {
        rand::thread_rng().gen_range(range)
    }
}

/// Always returns the same offset into the range (clamped)
pub struct FixedRandomSource(pub u32);

impl RandomSource for FixedRandomSource {
    fn next_in(&self, range: Range<u32>) -> u32 {
        let span = range.end.saturating_sub(range.start).max(1);
        range.start + self.0.min(span - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_source_stays_in_range() {
        let source = ThreadRandomSource;
        for _ in 0..1000 {
            let n = source.next_in(300..3900);
            assert!((300..3900).contains(&n));
        }
    }

    #[test]
    fn test_fixed_source_clamps() {
        assert_eq!(FixedRandomSource(0).next_in(300..3900), 300);
        assert_eq!(FixedRandomSource(42).next_in(300..3900), 342);
        assert_eq!(FixedRandomSource(u32::MAX).next_in(300..3900), 3899);
    }
}
