// ============================================================================
// Currency Formatter
// Rupee/paise phrases built on the word converter
// ============================================================================

use super::amount::CurrencyAmount;
use super::float::{decimal_from_f32, decimal_from_f64};
use crate::config::{FormatterConfig, NegativeAmountPolicy};
use crate::numeric::{NumericError, NumericResult};
use crate::words::to_words;
use rust_decimal::Decimal;
use smallvec::SmallVec;
use std::sync::OnceLock;

/// Formats amounts as "<words> rupees and <words> paise".
///
/// # Phrase Rules
/// - Rupees are spelled only when positive; "rupee" gets the plural
///   suffix when the count is above one
/// - Paise are spelled only when positive and are never pluralized
/// - The conjunction appears only when both parts are present
/// - An amount with neither part formats to the empty string
///
/// # Example
/// ```
/// use indian_number_words::prelude::*;
/// use rust_decimal::Decimal;
///
/// let formatter = CurrencyFormatter::new(FormatterConfig::signed());
/// assert_eq!(
///     formatter.format_decimal(Decimal::new(-150, 2)),
///     "negative one rupee and fifty paise"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CurrencyFormatter {
    config: FormatterConfig,
}

impl CurrencyFormatter {
    /// Create a formatter. The configuration is used as given.
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    /// Create a formatter after validating the configuration.
    pub fn try_new(config: FormatterConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    // ========================================================================
    // Decimal Amounts
    // ========================================================================

    /// Format a decimal amount.
    ///
    /// # Errors
    /// Returns `Overflow` if the rupee part does not fit in an i64.
    pub fn try_format_decimal(&self, amount: Decimal) -> NumericResult<String> {
        let (negative, value) = self.sign_split(amount);
        let parts = CurrencyAmount::from_decimal(value)?;
        Ok(self.phrase(negative, parts))
    }

    /// Format a decimal amount. Rupee parts beyond the i64 range are
    /// clamped to it.
    pub fn format_decimal(&self, amount: Decimal) -> String {
        let (negative, value) = self.sign_split(amount);
        let parts = CurrencyAmount::from_decimal(value).unwrap_or_else(|err| {
            tracing::warn!(%amount, error = %err, "saturating rupee part");
            CurrencyAmount::from_decimal_saturating(value)
        });
        self.phrase(negative, parts)
    }

    // ========================================================================
    // Float Amounts
    // ========================================================================

    /// Format an f32 amount.
    ///
    /// # Errors
    /// `NonFinite` for NaN and infinities, `Overflow` for amounts whose
    /// rupee part does not fit in an i64.
    pub fn try_format_f32(&self, amount: f32) -> NumericResult<String> {
        self.try_format_decimal(decimal_from_f32(amount)?)
    }

    /// Format an f32 amount. NaN and infinities give the empty string.
    pub fn format_f32(&self, amount: f32) -> String {
        self.format_float(decimal_from_f32(amount), amount.is_sign_negative())
    }

    /// Format an f64 amount.
    ///
    /// # Errors
    /// Same as [`try_format_f32`](Self::try_format_f32).
    pub fn try_format_f64(&self, amount: f64) -> NumericResult<String> {
        self.try_format_decimal(decimal_from_f64(amount)?)
    }

    /// Format an f64 amount. NaN and infinities give the empty string.
    pub fn format_f64(&self, amount: f64) -> String {
        self.format_float(decimal_from_f64(amount), amount.is_sign_negative())
    }

    fn format_float(&self, converted: NumericResult<Decimal>, negative: bool) -> String {
        match converted {
            Ok(amount) => self.format_decimal(amount),
            Err(NumericError::Overflow) => {
                let clamped = if negative { Decimal::MIN } else { Decimal::MAX };
                self.format_decimal(clamped)
            },
            Err(err) => {
                tracing::warn!(error = %err, "float amount cannot be formatted");
                String::new()
            },
        }
    }

    // ========================================================================
    // Whole Rupees
    // ========================================================================

    /// Format a whole number of rupees.
    ///
    /// Integer amounts have no paise, so this is only the rupee phrase.
    /// Unlike decimal amounts it is never empty: zero is "zero rupee" and
    /// negative counts keep their sign ("negative five rupee"). The unit is
    /// plural only above one.
    pub fn format_rupees(&self, amount: i64) -> String {
        self.rupee_phrase(amount)
    }

    // ========================================================================
    // Phrase Assembly
    // ========================================================================

    fn sign_split(&self, amount: Decimal) -> (bool, Decimal) {
        match self.config.negative_amounts {
            NegativeAmountPolicy::Floor => (false, amount),
            NegativeAmountPolicy::SignPrefixed => (amount < Decimal::ZERO, amount.abs()),
        }
    }

    fn rupee_phrase(&self, rupees: i64) -> String {
        let suffix = if rupees > 1 {
            self.config.plural_suffix.as_str()
        } else {
            ""
        };
        format!("{} {}{}", to_words(rupees), self.config.rupee_unit, suffix)
    }

    fn phrase(&self, negative: bool, amount: CurrencyAmount) -> String {
        let mut parts: SmallVec<[String; 3]> = SmallVec::new();

        if amount.rupees > 0 {
            parts.push(self.rupee_phrase(amount.rupees));
        }
        if amount.paise > 0 {
            if !parts.is_empty() {
                parts.push(self.config.conjunction.clone());
            }
            parts.push(format!("{} {}", to_words(amount.paise), self.config.paise_unit));
        }

        let joined = parts.join(" ");
        let phrase = joined.trim();
        if negative && !phrase.is_empty() {
            format!("negative {}", phrase)
        } else {
            phrase.to_string()
        }
    }
}

// ============================================================================
// Default-Configuration Functions
// ============================================================================

fn default_formatter() -> &'static CurrencyFormatter {
    static DEFAULT: OnceLock<CurrencyFormatter> = OnceLock::new();
    DEFAULT.get_or_init(CurrencyFormatter::default)
}

/// Spell a decimal amount as rupees and paise.
///
/// Zero gives the empty string. Negative amounts are floored, see
/// [`NegativeAmountPolicy::Floor`].
///
/// ```
/// use indian_number_words::to_currency_words;
/// use rust_decimal::Decimal;
///
/// assert_eq!(
///     to_currency_words(Decimal::new(12345, 2)),
///     "one hundred and twenty three rupees and forty five paise"
/// );
/// assert_eq!(to_currency_words(Decimal::new(1, 2)), "one paise");
/// assert_eq!(to_currency_words(Decimal::ZERO), "");
/// ```
pub fn to_currency_words(amount: Decimal) -> String {
    default_formatter().format_decimal(amount)
}

/// Rejecting variant of [`to_currency_words`].
pub fn try_to_currency_words(amount: Decimal) -> NumericResult<String> {
    default_formatter().try_format_decimal(amount)
}

/// Spell an f32 amount as rupees and paise.
pub fn to_currency_words_f32(amount: f32) -> String {
    default_formatter().format_f32(amount)
}

/// Rejecting variant of [`to_currency_words_f32`].
pub fn try_to_currency_words_f32(amount: f32) -> NumericResult<String> {
    default_formatter().try_format_f32(amount)
}

/// Spell an f64 amount as rupees and paise.
pub fn to_currency_words_f64(amount: f64) -> String {
    default_formatter().format_f64(amount)
}

/// Rejecting variant of [`to_currency_words_f64`].
pub fn try_to_currency_words_f64(amount: f64) -> NumericResult<String> {
    default_formatter().try_format_f64(amount)
}

/// Spell a whole number of rupees ("one crore rupees").
pub fn rupees_to_words(amount: i64) -> String {
    default_formatter().format_rupees(amount)
}

/// Whole-rupee phrase for an i32 amount.
pub fn to_currency_words_i32(amount: i32) -> String {
    rupees_to_words(i64::from(amount))
}

/// Whole-rupee phrase for an i16 amount.
pub fn to_currency_words_i16(amount: i16) -> String {
    rupees_to_words(i64::from(amount))
}
