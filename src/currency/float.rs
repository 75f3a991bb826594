// ============================================================================
// Float Conversion
// f32/f64 -> Decimal through the shortest round-trip rendering
// ============================================================================
//
// Converting the binary value exactly would turn 123.45f32 into
// 123.4499969482421875 and lose a paisa. Rendering with `Display` first gives
// the shortest decimal that reads back as the same float ("123.45"), which
// is the amount the caller wrote.

use crate::numeric::{NumericError, NumericResult};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Convert an f32 amount to `Decimal`.
///
/// # Errors
/// - `NonFinite` for NaN and infinities
/// - `Overflow` for magnitudes beyond the `Decimal` range
pub fn decimal_from_f32(value: f32) -> NumericResult<Decimal> {
    if !value.is_finite() {
        return Err(NumericError::NonFinite);
    }
    parse_rendered(&value.to_string(), value.abs() < 1.0)
}

/// Convert an f64 amount to `Decimal`. Same rules as [`decimal_from_f32`].
pub fn decimal_from_f64(value: f64) -> NumericResult<Decimal> {
    if !value.is_finite() {
        return Err(NumericError::NonFinite);
    }
    parse_rendered(&value.to_string(), value.abs() < 1.0)
}

fn parse_rendered(rendered: &str, below_one: bool) -> NumericResult<Decimal> {
    match Decimal::from_str(rendered) {
        Ok(amount) => Ok(amount),
        // Only a subnormal-sized fraction renders with more digits than
        // Decimal holds, and that is far below one paisa.
        Err(_) if below_one => Ok(Decimal::ZERO),
        Err(_) => Err(NumericError::Overflow),
    }
}
