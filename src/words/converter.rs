// ============================================================================
// Number Word Converter
// Integer -> Indian place-value phrase ("twelve crore thirty four lakh ...")
// ============================================================================

use super::tables::{TENS, UNITS};
use crate::numeric::Segments;
use smallvec::SmallVec;
use std::borrow::Cow;

/// Ordered word tokens of a phrase. Six tiers of up to three tokens each,
/// plus "and" and the remainder, fit without spilling to the heap.
pub(crate) type Tokens = SmallVec<[Cow<'static, str>; 24]>;

/// Spell an integer using Indian place values.
///
/// Zero is `"zero"`. Negative numbers are the phrase for the absolute value
/// with `"negative "` in front. The last sub-hundred part is joined with
/// `"and"` when any tier came before it. Tens and units are separated by a
/// space, not a hyphen.
///
/// # Example
/// ```
/// use indian_number_words::to_words;
///
/// assert_eq!(to_words(45), "forty five");
/// assert_eq!(
///     to_words(123_456_789),
///     "twelve crore thirty four lakh fifty six thousand seven hundred and eighty nine"
/// );
/// assert_eq!(to_words(-100_000), "negative one lakh");
/// ```
pub fn to_words(number: i64) -> String {
    if number == 0 {
        return "zero".to_string();
    }

    let phrase = phrase_tokens(number.unsigned_abs()).join(" ");
    if number < 0 {
        format!("negative {}", phrase)
    } else {
        phrase
    }
}

/// Words for a value below one hundred.
///
/// `0` maps to the empty string; callers only use it for nonzero parts.
/// Values of 100 and above are not in the tables and come back as their
/// decimal digits. Segmentation only produces them for a kharab count at
/// or beyond 10^13.
pub fn small_to_words(n: u64) -> Cow<'static, str> {
    match n {
        0..=19 => Cow::Borrowed(UNITS[n as usize]),
        20..=99 => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => Cow::Borrowed(tens),
                units => Cow::Owned(format!("{} {}", tens, UNITS[units as usize])),
            }
        },
        _ => {
            tracing::debug!(segment = n, "segment beyond word tables, rendering digits");
            Cow::Owned(n.to_string())
        },
    }
}

/// Tokens for a nonzero magnitude, largest tier first.
pub(crate) fn phrase_tokens(magnitude: u64) -> Tokens {
    let segments = Segments::decompose(magnitude);
    let mut tokens = Tokens::new();

    for (tier, count) in segments.counts() {
        tokens.push(small_to_words(count));
        tokens.push(Cow::Borrowed(tier.label()));
    }

    let remainder = segments.remainder();
    if remainder > 0 {
        if !tokens.is_empty() {
            tokens.push(Cow::Borrowed("and"));
        }
        tokens.push(small_to_words(remainder));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use quickcheck::quickcheck;

    #[test]
    fn test_zero() {
        assert_eq!(to_words(0), "zero");
    }

    #[test]
    fn test_units_match_table() {
        let expected = [
            "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
            "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen",
            "eighteen", "nineteen",
        ];
        for (n, word) in (1..=19).zip(expected) {
            assert_eq!(to_words(n), word);
        }
    }

    #[test]
    fn test_tens_and_units_use_space() {
        assert_eq!(to_words(20), "twenty");
        assert_eq!(to_words(45), "forty five");
        assert_eq!(to_words(78), "seventy eight");
        assert_eq!(to_words(99), "ninety nine");
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(to_words(100), "one hundred");
        assert_eq!(to_words(1_000), "one thousand");
        assert_eq!(to_words(100_000), "one lakh");
        assert_eq!(to_words(10_000_000), "one crore");
        assert_eq!(to_words(1_000_000_000), "one arab");
        assert_eq!(to_words(100_000_000_000), "one kharab");
    }

    #[test]
    fn test_and_only_before_remainder() {
        assert_eq!(to_words(101), "one hundred and one");
        assert_eq!(to_words(100_001), "one lakh and one");
        assert_eq!(to_words(1_100), "one thousand one hundred");
        assert_eq!(to_words(123), "one hundred and twenty three");
    }

    #[test]
    fn test_crore_example() {
        assert_eq!(
            to_words(123_456_789),
            "twelve crore thirty four lakh fifty six thousand seven hundred and eighty nine"
        );
    }

    #[test]
    fn test_full_kharab_range() {
        assert_eq!(
            to_words(9_999_999_999_999),
            "ninety nine kharab ninety nine arab ninety nine crore ninety nine lakh \
             ninety nine thousand nine hundred and ninety nine"
        );
    }

    #[test]
    fn test_negative() {
        assert_eq!(to_words(-45), "negative forty five");
        assert_eq!(to_words(-1), "negative one");
        assert_eq!(to_words(-1_000), "negative one thousand");
    }

    #[test]
    fn test_digit_fallback_at_ten_pow_thirteen() {
        assert_eq!(to_words(10_000_000_000_000), "100 kharab");
        assert_eq!(to_words(10_000_000_000_005), "100 kharab and five");
        assert_eq!(to_words(123_400_000_000_000), "1234 kharab");
    }

    #[test]
    fn test_i64_extremes() {
        assert_eq!(
            to_words(i64::MAX),
            "92233720 kharab thirty six arab eighty five crore forty seven lakh \
             seventy five thousand eight hundred and seven"
        );
        assert_eq!(
            to_words(i64::MIN),
            "negative 92233720 kharab thirty six arab eighty five crore forty seven lakh \
             seventy five thousand eight hundred and eight"
        );
    }

    #[test]
    fn test_small_to_words() {
        assert_eq!(small_to_words(0), "");
        assert_eq!(small_to_words(7), "seven");
        assert_eq!(small_to_words(60), "sixty");
        assert_eq!(small_to_words(61), "sixty one");
        assert_eq!(small_to_words(100), "100");
        assert_eq!(small_to_words(4_321), "4321");
    }

    quickcheck! {
        fn qc_small_words_never_padded(n: u64) -> bool {
            let words = small_to_words(n);
            words.trim() == words && !words.contains("  ")
        }

        fn qc_small_words_fallback_is_digits(n: u64) -> bool {
            n < 100 || small_to_words(n) == n.to_string()
        }
    }

    proptest! {
        #[test]
        fn prop_negation_prefixes(n in (i64::MIN + 1)..0i64) {
            prop_assert_eq!(to_words(n), format!("negative {}", to_words(-n)));
        }

        #[test]
        fn prop_single_spaced_and_trimmed(n in any::<i64>()) {
            let words = to_words(n);
            prop_assert_eq!(words.trim(), words.as_str());
            prop_assert!(!words.contains("  "));
        }

        #[test]
        fn prop_and_precedes_remainder_only(n in 101i64..10_000_000_000_000) {
            let words = to_words(n);
            let has_remainder = n % 100 != 0;
            prop_assert_eq!(words.contains(" and "), has_remainder);
            prop_assert!(!words.starts_with("and"));
        }

        #[test]
        fn prop_no_digits_below_ten_pow_thirteen(n in 0i64..10_000_000_000_000) {
            prop_assert!(!to_words(n).chars().any(|c| c.is_ascii_digit()));
        }

        #[test]
        fn prop_deterministic(n in any::<i64>()) {
            prop_assert_eq!(to_words(n), to_words(n));
        }
    }
}
