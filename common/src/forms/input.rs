//! Conversions from raw form text to typed field values.
//!
//! None of these fail: anything that does not parse becomes the field's
//! default, so a bad keystroke never blocks a save.

use chrono::NaiveDate;

use crate::model::RecipeCategory;

/// Reads a non-negative count the way a browser number input is read:
/// leading whitespace and an optional `+` are skipped, then the run of
/// decimal digits is taken. No digits (including negative input) gives 0;
/// values past `u32::MAX` saturate.
pub fn coerce_count(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];

    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u32::MAX)
}

/// Parses an ISO `YYYY-MM-DD` date, falling back to `fallback`.
pub fn coerce_date(raw: &str, fallback: NaiveDate) -> NaiveDate {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").unwrap_or(fallback)
}

pub fn coerce_category(raw: &str) -> RecipeCategory {
    raw.parse().unwrap_or_default()
}
