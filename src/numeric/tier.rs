// ============================================================================
// Place-Value Tiers
// Indian numbering system magnitudes and their labels
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named place value of the Indian numbering system.
///
/// Variants are declared largest first, so the derived ordering sorts
/// `Kharab` before `Hundred`.
///
/// | Tier     | Divisor |
/// |----------|---------|
/// | Kharab   | 10^11   |
/// | Arab     | 10^9    |
/// | Crore    | 10^7    |
/// | Lakh     | 10^5    |
/// | Thousand | 10^3    |
/// | Hundred  | 10^2    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Tier {
    Kharab,
    Arab,
    Crore,
    Lakh,
    Thousand,
    Hundred,
}

impl Tier {
    /// Every tier, largest first. Decomposition walks this order.
    pub const ALL: [Tier; 6] = [
        Tier::Kharab,
        Tier::Arab,
        Tier::Crore,
        Tier::Lakh,
        Tier::Thousand,
        Tier::Hundred,
    ];

    /// The value one unit of this tier stands for.
    #[inline]
    pub const fn divisor(self) -> u64 {
        match self {
            Tier::Kharab => 100_000_000_000,
            Tier::Arab => 1_000_000_000,
            Tier::Crore => 10_000_000,
            Tier::Lakh => 100_000,
            Tier::Thousand => 1_000,
            Tier::Hundred => 100,
        }
    }

    /// The word appended after the tier's count.
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Tier::Kharab => "kharab",
            Tier::Arab => "arab",
            Tier::Crore => "crore",
            Tier::Lakh => "lakh",
            Tier::Thousand => "thousand",
            Tier::Hundred => "hundred",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divisors_descend() {
        for pair in Tier::ALL.windows(2) {
            assert!(pair[0].divisor() > pair[1].divisor());
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_glossary_values() {
        assert_eq!(Tier::Lakh.divisor(), 100_000);
        assert_eq!(Tier::Crore.divisor(), 10_000_000);
        assert_eq!(Tier::Arab.divisor(), 1_000_000_000);
        assert_eq!(Tier::Kharab.divisor(), 100_000_000_000);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(Tier::Crore.to_string(), "crore");
        assert_eq!(format!("{}", Tier::Thousand), "thousand");
    }
}
