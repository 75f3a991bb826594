// ============================================================================
// Currency Amount
// Rupee/paise split of a decimal amount
// ============================================================================

use crate::numeric::{NumericError, NumericResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An amount split into whole rupees and paise.
///
/// `rupees` is the floor of the amount, `paise` the leftover fraction
/// times 100, truncated. Fractions below one paise are dropped, never
/// rounded up: 0.019 has 1 paise.
///
/// For negative input the floor goes away from zero and the paise are
/// what remains up to the amount, so -1.50 is `-2` rupees and `50` paise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurrencyAmount {
    pub rupees: i64,
    pub paise: i64,
}

impl CurrencyAmount {
    /// Zero rupees, zero paise
    pub const ZERO: Self = Self::new(0, 0);

    #[inline]
    pub const fn new(rupees: i64, paise: i64) -> Self {
        Self { rupees, paise }
    }

    /// Split a decimal amount.
    ///
    /// # Errors
    /// Returns `Overflow` if the floored amount does not fit in an i64.
    ///
    /// # Example
    /// ```
    /// use indian_number_words::currency::CurrencyAmount;
    /// use rust_decimal::Decimal;
    ///
    /// let split = CurrencyAmount::from_decimal(Decimal::new(12345, 2)).unwrap();
    /// assert_eq!(split, CurrencyAmount::new(123, 45));
    /// ```
    pub fn from_decimal(amount: Decimal) -> NumericResult<Self> {
        let floor = amount.floor();
        let rupees = floor.to_i64().ok_or(NumericError::Overflow)?;

        Ok(Self {
            rupees,
            paise: paise_of(amount - floor),
        })
    }

    /// Split a decimal amount, clamping the rupee part to the i64 range.
    pub fn from_decimal_saturating(amount: Decimal) -> Self {
        let floor = amount.floor();
        let rupees = floor.to_i64().unwrap_or(if floor.is_sign_negative() {
            i64::MIN
        } else {
            i64::MAX
        });

        Self {
            rupees,
            paise: paise_of(amount - floor),
        }
    }

    /// True when neither rupees nor paise would be spelled.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.rupees <= 0 && self.paise <= 0
    }
}

/// Whole paise in a fraction in [0, 1).
fn paise_of(fraction: Decimal) -> i64 {
    (fraction * Decimal::ONE_HUNDRED)
        .trunc()
        .to_i64()
        .unwrap_or(0)
}

impl FromStr for CurrencyAmount {
    type Err = NumericError;

    /// Parse a plain decimal string such as `"123.45"` or `"-0.5"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s.trim()).map_err(|_| NumericError::InvalidInput)?;
        Self::from_decimal(amount)
    }
}
