// ============================================================================
// Segment Decomposition
// Splits a magnitude into per-tier counts plus a sub-hundred remainder
// ============================================================================

use super::tier::Tier;
use arrayvec::ArrayVec;

/// A magnitude broken down by Indian place value.
///
/// Each tier count is the quotient left after every larger tier has been
/// taken out, so the tiers are disjoint and, together with the remainder,
/// exhaustive:
///
/// ```text
/// 123_456_789
///   crore    = 12          (123_456_789 / 10^7)
///   lakh     = 34          (3_456_789   / 10^5)
///   thousand = 56          (56_789      / 10^3)
///   hundred  = 7           (789         / 10^2)
///   remainder = 89
/// ```
///
/// Below the kharab tier every count is under 100. The kharab count is not
/// bounded from above and reaches 100 at 10^13.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segments {
    counts: [u64; 6],
    remainder: u64,
}

impl Segments {
    /// Decompose `magnitude`, largest tier first.
    pub fn decompose(magnitude: u64) -> Self {
        let mut counts = [0u64; 6];
        let mut rest = magnitude;

        for (slot, tier) in counts.iter_mut().zip(Tier::ALL) {
            *slot = rest / tier.divisor();
            rest %= tier.divisor();
        }

        Self {
            counts,
            remainder: rest,
        }
    }

    /// Count for a single tier (zero when the tier is absent).
    #[inline]
    pub fn count(&self, tier: Tier) -> u64 {
        self.counts[tier as usize]
    }

    /// What is left below one hundred.
    #[inline]
    pub fn remainder(&self) -> u64 {
        self.remainder
    }

    /// Nonzero tiers with their counts, largest first.
    pub fn counts(&self) -> ArrayVec<(Tier, u64), 6> {
        Tier::ALL
            .into_iter()
            .zip(self.counts)
            .filter(|&(_, count)| count > 0)
            .collect()
    }

    /// True when no tier and no remainder is present.
    pub fn is_zero(&self) -> bool {
        self.remainder == 0 && self.counts.iter().all(|&c| c == 0)
    }

    /// Rebuild the magnitude this value was decomposed from.
    pub fn recompose(&self) -> u64 {
        Tier::ALL
            .into_iter()
            .zip(self.counts)
            .fold(self.remainder, |acc, (tier, count)| {
                acc + count * tier.divisor()
            })
    }
}
