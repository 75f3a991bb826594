// ============================================================================
// Numeric Errors
// Error types for amount conversion and splitting
// ============================================================================

use std::fmt;

/// Errors that can occur while turning an input value into a rupee amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Rupee part does not fit in an i64
    Overflow,
    /// Float input was NaN or infinite
    NonFinite,
    /// Input string is not a decimal number
    InvalidInput,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "amount overflow: rupee part exceeds the 64-bit range")
            },
            NumericError::NonFinite => write!(f, "non-finite amount: NaN or infinity"),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse amount"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
