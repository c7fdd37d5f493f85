//! Odometer parsing.

use super::digits_to_int;

/// Parses a mileage cell, keeping the lower bound of a range.
///
/// "100 000 - 110 000" reads as 100000; separators and units are stripped.
/// Returns `None` when no digits remain, which is distinct from a reading
/// of zero.
pub fn parse_mileage(raw: &str) -> Option<i64> {
    let text = raw.trim().to_lowercase();
    let lower_bound = text.split('-').next().unwrap_or_default();
    digits_to_int(lower_bound)
}

/// Parses a mileage cell, reading "no digits" as 0.
///
/// # Examples
///
/// ```
/// use listing_normalization::normalization::mileage_or_zero;
///
/// assert_eq!(mileage_or_zero("100 000 - 110 000"), 100000);
/// assert_eq!(mileage_or_zero("85,000 km"), 85000);
/// assert_eq!(mileage_or_zero(""), 0);
/// ```
pub fn mileage_or_zero(raw: &str) -> i64 {
    parse_mileage(raw).unwrap_or(0)
}
