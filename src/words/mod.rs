// ============================================================================
// Words Module
// Integer to Indian-numbering-system English words
// ============================================================================

mod converter;
mod display;
mod tables;

pub use converter::{small_to_words, to_words};
pub use display::{IndianWords, ToIndianWords};
