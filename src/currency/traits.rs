// ============================================================================
// Currency Words Trait
// One entry point per numeric input type
// ============================================================================

use super::formatter::{
    rupees_to_words, to_currency_words, to_currency_words_f32, to_currency_words_f64,
};
use rust_decimal::Decimal;

/// Numeric types that can be spelled as a rupee amount.
///
/// Decimal and float amounts go through the rupee/paise split. Integer
/// amounts have no fractional part and only produce the whole-rupee phrase.
///
/// ```
/// use indian_number_words::ToCurrencyWords;
/// use rust_decimal::Decimal;
///
/// assert_eq!(Decimal::new(250, 2).to_currency_words(), "two rupees and fifty paise");
/// assert_eq!(10_000_000i64.to_currency_words(), "one crore rupees");
/// assert_eq!(0i32.to_currency_words(), "zero rupee");
/// ```
pub trait ToCurrencyWords {
    fn to_currency_words(&self) -> String;
}

impl ToCurrencyWords for Decimal {
    fn to_currency_words(&self) -> String {
        to_currency_words(*self)
    }
}

impl ToCurrencyWords for f32 {
    fn to_currency_words(&self) -> String {
        to_currency_words_f32(*self)
    }
}

impl ToCurrencyWords for f64 {
    fn to_currency_words(&self) -> String {
        to_currency_words_f64(*self)
    }
}

impl ToCurrencyWords for i64 {
    fn to_currency_words(&self) -> String {
        rupees_to_words(*self)
    }
}

impl ToCurrencyWords for i32 {
    fn to_currency_words(&self) -> String {
        rupees_to_words(i64::from(*self))
    }
}

impl ToCurrencyWords for i16 {
    fn to_currency_words(&self) -> String {
        rupees_to_words(i64::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_and_float_agree() {
        let decimal = Decimal::new(12345, 2).to_currency_words();
        assert_eq!(123.45f32.to_currency_words(), decimal);
        assert_eq!(123.45f64.to_currency_words(), decimal);
    }

    #[test]
    fn test_integers_skip_paise_logic() {
        // The decimal path spells zero as "", the integer path never does
        assert_eq!(Decimal::ZERO.to_currency_words(), "");
        assert_eq!(0i64.to_currency_words(), "zero rupee");
        assert_eq!(1i16.to_currency_words(), "one rupee");
        assert_eq!(
            i16::MAX.to_currency_words(),
            "thirty two thousand seven hundred and sixty seven rupees"
        );
        assert_eq!(2i32.to_currency_words(), 2i64.to_currency_words());
    }
}
