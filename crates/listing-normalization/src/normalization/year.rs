//! Model-year parsing.

use std::sync::LazyLock;

use regex::Regex;

use super::fold_digits;

/// Four consecutive ASCII digits, matched after Arabic-Indic digits are folded.
static YEAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}").expect("Invalid year regex"));

/// Extracts the first run of four digits from a year cell.
///
/// Surrounding words are ignored ("1980 ou plus ancien" -> 1980). Only the
/// first match counts, so a range "2015-2018" yields 2015. No bounds are
/// checked here.
///
/// # Examples
///
/// ```
/// use listing_normalization::normalization::parse_year;
///
/// assert_eq!(parse_year("2019"), Some(2019));
/// assert_eq!(parse_year("1980 ou plus ancien"), Some(1980));
/// assert_eq!(parse_year("no digits here"), None);
/// ```
pub fn parse_year(raw: &str) -> Option<i32> {
    let text = fold_digits(raw.trim());
    YEAR_REGEX
        .find(&text)
        .and_then(|found| found.as_str().parse::<i32>().ok())
}
