// ============================================================================
// Currency Module
// Rupee/paise phrases for decimal, float and integer amounts
// ============================================================================

mod amount;
mod float;
mod formatter;
mod traits;

pub use amount::CurrencyAmount;
pub use float::{decimal_from_f32, decimal_from_f64};
pub use formatter::{
    rupees_to_words, to_currency_words, to_currency_words_f32, to_currency_words_f64,
    to_currency_words_i16, to_currency_words_i32, try_to_currency_words,
    try_to_currency_words_f32, try_to_currency_words_f64, CurrencyFormatter,
};
pub use traits::ToCurrencyWords;
