//! Per-cell parsers for listing fields.
//!
//! - **price**: currency text, thousands groups and zero fractions
//! - **mileage**: ranges and separators, lower bound kept
//! - **year**: first four-digit run
//!
//! Arabic-Indic (U+0660..U+0669) and Eastern Arabic-Indic (U+06F0..U+06F9)
//! digits are read as their ASCII equivalents by every parser.

pub mod mileage;
pub mod price;
pub mod year;

pub use mileage::{mileage_or_zero, parse_mileage};
pub use price::{parse_price, parse_price_with};
pub use year::parse_year;

/// Map a decimal digit from the ASCII or Arabic-Indic ranges to ASCII.
pub(crate) fn ascii_digit(c: char) -> Option<char> {
    match c {
        '0'..='9' => Some(c),
        '\u{0660}'..='\u{0669}' => char::from_digit(c as u32 - 0x0660, 10),
        '\u{06F0}'..='\u{06F9}' => char::from_digit(c as u32 - 0x06F0, 10),
        _ => None,
    }
}

/// Rewrite Arabic-Indic digits in `text` as ASCII, leaving everything else.
pub(crate) fn fold_digits(text: &str) -> String {
    text.chars().map(|c| ascii_digit(c).unwrap_or(c)).collect()
}

/// Parse the decimal digits of `text`, ignoring every other character.
///
/// Returns `None` when there are no digits or the value overflows `i64`.
pub(crate) fn digits_to_int(text: &str) -> Option<i64> {
    let digits: String = text.chars().filter_map(ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    match digits.parse::<i64>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::debug!(
                digits = digits.len(),
                "digit run overflows i64, treated as missing"
            );
            None
        }
    }
}
