// ============================================================================
// Indian Number Words Library
// Numbers and rupee amounts spelled with lakh, crore, arab and kharab
// ============================================================================

//! # Indian Number Words
//!
//! Converts integers to English words under the Indian numbering system and
//! formats currency amounts as rupee/paise phrases.
//!
//! ## Features
//!
//! - **Indian place values**: hundred, thousand, lakh (10^5), crore (10^7),
//!   arab (10^9) and kharab (10^11)
//! - **Rupee/paise phrases** from `Decimal`, `f32`, `f64` and integer amounts
//! - **Configurable labels** and negative-amount handling via [`FormatterConfig`]
//! - **Pure functions**: no I/O, no shared mutable state, safe from any thread
//!
//! ## Example
//!
//! ```rust
//! use indian_number_words::prelude::*;
//! use rust_decimal::Decimal;
//!
//! assert_eq!(to_words(0), "zero");
//! assert_eq!(to_words(1_000), "one thousand");
//! assert_eq!(
//!     to_words(123_456_789),
//!     "twelve crore thirty four lakh fifty six thousand seven hundred and eighty nine"
//! );
//!
//! assert_eq!(
//!     to_currency_words(Decimal::new(12345, 2)),
//!     "one hundred and twenty three rupees and forty five paise"
//! );
//! assert_eq!(rupees_to_words(10_000_000), "one crore rupees");
//! ```
//!
//! ## Magnitude Limit
//!
//! Kharab is the largest named tier. From 10^13 on, the kharab count is 100
//! or more and is written as digits: `to_words(10_000_000_000_000)` is
//! `"100 kharab"`.

pub mod config;
pub mod currency;
pub mod numeric;
pub mod words;

pub use config::{FormatterConfig, NegativeAmountPolicy};
pub use currency::{
    rupees_to_words, to_currency_words, to_currency_words_f32, to_currency_words_f64,
    to_currency_words_i16, to_currency_words_i32, try_to_currency_words, CurrencyAmount,
    CurrencyFormatter, ToCurrencyWords,
};
pub use numeric::{NumericError, NumericResult};
pub use words::{small_to_words, to_words, IndianWords, ToIndianWords};

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::{FormatterConfig, NegativeAmountPolicy};
    pub use crate::currency::{
        rupees_to_words, to_currency_words, to_currency_words_f32, to_currency_words_f64,
        to_currency_words_i16, to_currency_words_i32, try_to_currency_words,
        try_to_currency_words_f32, try_to_currency_words_f64, CurrencyAmount,
        CurrencyFormatter, ToCurrencyWords,
    };
    pub use crate::numeric::{NumericError, NumericResult, Segments, Tier};
    pub use crate::words::{small_to_words, to_words, IndianWords, ToIndianWords};
}
