//! Field-level parsing rules for results logs.
//!
//! JTL writers are inconsistent about optional attributes, so every field
//! has a documented default instead of an error:
//!
//! - success flag: `true` only for the exact literal `"true"`; anything
//!   else, including a missing field, is `false`.
//! - numbers: the leading integer of the trimmed value (optional sign then
//!   ASCII digits), so `"12.7"` reads as 12 and `"12ms"` as 12. A missing,
//!   empty, non-numeric or overflowing value reads as 0.
//! - elapsed time: as numbers, with negative values clamped to 0.

/// Literal accepted as a successful outcome.
const SUCCESS_LITERAL: &str = "true";

#[must_use]
pub fn parse_success(value: Option<&str>) -> bool {
    value == Some(SUCCESS_LITERAL)
}

#[must_use]
pub fn parse_elapsed_ms(value: Option<&str>) -> u64 {
    value
        .and_then(leading_integer)
        .and_then(|parsed| u64::try_from(parsed).ok())
        .unwrap_or(0)
}

#[must_use]
pub fn parse_timestamp_ms(value: Option<&str>) -> i64 {
    value.and_then(leading_integer).unwrap_or(0)
}

fn leading_integer(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    let unsigned = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);
    let sign_len = trimmed.len().saturating_sub(unsigned.len());
    let digits_len = unsigned
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits_len == 0 {
        return None;
    }
    trimmed
        .get(..sign_len.saturating_add(digits_len))
        .and_then(|number| number.parse::<i64>().ok())
}
