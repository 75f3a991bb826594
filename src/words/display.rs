// ============================================================================
// Display Adapters
// fmt::Display wrapper and extension trait over the word converter
// ============================================================================

use super::converter::{phrase_tokens, to_words};
use std::fmt;

/// Writes an integer in Indian words through `fmt::Display`.
///
/// Produces exactly what [`to_words`] returns, but streams the tokens into
/// the formatter instead of building an intermediate `String`.
///
/// ```
/// use indian_number_words::IndianWords;
///
/// let line = format!("Total: {} items", IndianWords(150_000));
/// assert_eq!(line, "Total: one lakh fifty thousand items");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndianWords(pub i64);

impl fmt::Display for IndianWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("zero");
        }
        if self.0 < 0 {
            f.write_str("negative ")?;
        }

        for (i, token) in phrase_tokens(self.0.unsigned_abs()).iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

/// Integer types that can be spelled in Indian words.
///
/// Implemented for every integer width that widens into `i64` without loss.
pub trait ToIndianWords {
    fn to_indian_words(&self) -> String;
}

macro_rules! impl_to_indian_words {
    ($($t:ty),*) => {
        $(
            impl ToIndianWords for $t {
                #[inline]
                fn to_indian_words(&self) -> String {
                    to_words(i64::from(*self))
                }
            }
        )*
    };
}

impl_to_indian_words!(i8, i16, i32, i64, u8, u16, u32);
