// ============================================================================
// Numeric Module
// Place-value model for the Indian numbering system
// ============================================================================
//
// This module provides:
// - Tier: the six named place values (kharab down to hundred)
// - Segments: a magnitude split into per-tier counts and a remainder
// - NumericError: Error types for amount conversion
//
// Design principles:
// - Integer arithmetic only, largest tier first
// - Magnitudes are unsigned; sign handling belongs to the callers
// - Fallible conversions return Result (no panics)

mod errors;
mod segments;
mod tier;

pub use errors::{NumericError, NumericResult};
pub use segments::Segments;
pub use tier::Tier;
