// ============================================================================
// Word Tables
// Fixed English words for values below one hundred
// ============================================================================

/// Words for 0-19. Index 0 is empty: zero is only ever spelled by the
/// top-level converter, never as part of a larger phrase.
pub(crate) const UNITS: [&str; 20] = [
    "",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Words for the tens digit. Indices 0 and 1 are unused.
pub(crate) const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];
