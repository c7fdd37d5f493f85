//! Cell-to-text coercion for Polars `AnyValue`s.
//!
//! Every field parser works on text. Source tables mix strings, integers and
//! floats within a single column depending on how the scraper serialized
//! them, so each cell is rendered to text first.

use polars::prelude::*;

/// Renders a cell as text.
///
/// Returns an empty string for `Null`. Floats with an integral value are
/// rendered without a fraction, so a price stored as `80000.0` reads "80000".
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use listing_common::cell_to_text;
///
/// assert_eq!(cell_to_text(AnyValue::Null), "");
/// assert_eq!(cell_to_text(AnyValue::Int64(2019)), "2019");
/// assert_eq!(cell_to_text(AnyValue::Float64(80000.0)), "80000");
/// assert_eq!(cell_to_text(AnyValue::String("80 000 DH")), "80 000 DH");
/// ```
pub fn cell_to_text(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_float(f64::from(v)),
        AnyValue::Float64(v) => format_float(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => {
            let s = other.to_string();
            if s.starts_with('"') && s.ends_with('"') && s.len() >= 2 {
                s[1..s.len() - 1].to_string()
            } else {
                s
            }
        }
    }
}

/// Formats a float without trailing zeros after the decimal point.
///
/// Integer-valued floats like `40.0` render as "40", not "4".
pub fn format_float(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        s
    }
}

/// Renders every cell of a column as text, in row order.
pub fn column_text_values(column: &Column) -> PolarsResult<Vec<String>> {
    let mut values = Vec::with_capacity(column.len());
    for idx in 0..column.len() {
        values.push(cell_to_text(column.get(idx)?));
    }
    Ok(values)
}
