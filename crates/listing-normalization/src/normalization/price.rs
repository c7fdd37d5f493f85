//! Asking-price parsing.
//!
//! Observed encodings:
//!
//! | Raw | Parsed |
//! |---|---|
//! | `80000` | 80000 |
//! | `80 000 DH` | 80000 |
//! | `80000.0`, `80000.00` | 80000 |
//! | `100,00`, `100,50` | 100 |
//! | `80.000`, `80,000` | 80000 |
//!
//! A fractional remainder is the final `.` or `,` followed by one or two
//! digits at the end of the numeric part. Three-digit tails are thousands
//! groups. A two-digit comma tail is a cents group and is always dropped.
//! Anything that is not a digit is then stripped.

use listing_model::FractionPolicy;

use super::{digits_to_int, fold_digits};

/// Parses a price cell with the default [`FractionPolicy::Reject`].
///
/// # Examples
///
/// ```
/// use listing_normalization::normalization::parse_price;
///
/// assert_eq!(parse_price("80 000 DH"), Some(80000));
/// assert_eq!(parse_price("80000.00"), Some(80000));
/// assert_eq!(parse_price("100,00"), Some(100));
/// assert_eq!(parse_price("95 000,50 DH"), Some(95000));
/// assert_eq!(parse_price("80000.5"), None);
/// assert_eq!(parse_price("abc"), None);
/// ```
pub fn parse_price(raw: &str) -> Option<i64> {
    parse_price_with(raw, FractionPolicy::default())
}

/// Parses a price cell, applying `policy` to non-zero fractional remainders.
///
/// Comma cents (",NN") are discarded under either policy.
pub fn parse_price_with(raw: &str, policy: FractionPolicy) -> Option<i64> {
    let text = fold_digits(raw.trim()).to_lowercase();
    let integral = match split_fraction(&text) {
        Some((head, separator, fraction)) => {
            let is_zero = fraction.bytes().all(|b| b == b'0');
            let is_cents = separator == ',' && fraction.len() == 2;
            if !is_zero && !is_cents && policy == FractionPolicy::Reject {
                return None;
            }
            head
        }
        None => text.as_str(),
    };
    digits_to_int(integral)
}

/// Split `text` at a trailing one- or two-digit fraction.
///
/// Trailing non-digit text (currency words) is ignored when locating the
/// fraction. The separator must directly follow a digit.
fn split_fraction(text: &str) -> Option<(&str, char, &str)> {
    let body_end = text.rfind(|c: char| c.is_ascii_digit())? + 1;
    let body = &text[..body_end];
    let separator = body.rfind(['.', ','])?;
    let (head, fraction) = (&body[..separator], &body[separator + 1..]);
    if fraction.is_empty()
        || fraction.len() > 2
        || !fraction.bytes().all(|b| b.is_ascii_digit())
        || !head.ends_with(|c: char| c.is_ascii_digit())
    {
        return None;
    }
    Some((head, text[separator..].chars().next()?, fraction))
}
