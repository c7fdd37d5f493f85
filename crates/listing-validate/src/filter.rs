//! Row-level plausibility filtering.
//!
//! Rules run in a fixed order and a rejected row is counted under the first
//! rule it fails:
//!
//! 1. price is null
//! 2. price is outside the exclusive plausibility bounds
//! 3. year is null
//!
//! Mileage never rejects a row.

use listing_model::{ColumnRole, PlausibilityBounds};
use polars::prelude::*;

use crate::error::{FilterError, Result};

/// Why a row was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    MissingPrice,
    PriceOutOfRange,
    MissingYear,
}

impl RejectReason {
    pub fn label(&self) -> &'static str {
        match self {
            Self::MissingPrice => "Missing price",
            Self::PriceOutOfRange => "Price out of range",
            Self::MissingYear => "Missing year",
        }
    }
}

/// Row counts produced by [`apply_record_filter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterReport {
    pub input_rows: usize,
    pub retained_rows: usize,
    pub missing_price: usize,
    pub price_out_of_range: usize,
    pub missing_year: usize,
}

impl FilterReport {
    /// Total number of dropped rows.
    pub fn rejected(&self) -> usize {
        self.missing_price + self.price_out_of_range + self.missing_year
    }

    /// Count of rows dropped for `reason`.
    pub fn count(&self, reason: RejectReason) -> usize {
        match reason {
            RejectReason::MissingPrice => self.missing_price,
            RejectReason::PriceOutOfRange => self.price_out_of_range,
            RejectReason::MissingYear => self.missing_year,
        }
    }

    fn record(&mut self, reason: RejectReason) {
        match reason {
            RejectReason::MissingPrice => self.missing_price += 1,
            RejectReason::PriceOutOfRange => self.price_out_of_range += 1,
            RejectReason::MissingYear => self.missing_year += 1,
        }
    }
}

/// Returns the first rule a row fails, or `None` when it is retained.
pub fn classify_row(
    price: Option<i64>,
    year: Option<i64>,
    bounds: &PlausibilityBounds,
) -> Option<RejectReason> {
    let Some(price) = price else {
        return Some(RejectReason::MissingPrice);
    };
    if !bounds.accepts_price(price) {
        return Some(RejectReason::PriceOutOfRange);
    }
    if year.is_none() {
        return Some(RejectReason::MissingYear);
    }
    None
}

/// Drop implausible rows from a normalized frame.
///
/// The frame must carry Int64 `price` and `year` columns. Surviving rows keep
/// their relative order; no deduplication is performed.
pub fn apply_record_filter(
    df: &DataFrame,
    bounds: &PlausibilityBounds,
) -> Result<(DataFrame, FilterReport)> {
    let prices = int_column(df, ColumnRole::Price.canonical_name())?;
    let years = int_column(df, ColumnRole::Year.canonical_name())?;

    let mut report = FilterReport {
        input_rows: df.height(),
        ..FilterReport::default()
    };
    let keep: Vec<bool> = prices
        .into_iter()
        .zip(years)
        .map(|(price, year)| match classify_row(price, year, bounds) {
            Some(reason) => {
                report.record(reason);
                false
            }
            None => true,
        })
        .collect();

    let mask = BooleanChunked::from_slice("plausible".into(), &keep);
    let filtered = df.filter(&mask)?;
    report.retained_rows = filtered.height();

    tracing::info!(
        input = report.input_rows,
        retained = report.retained_rows,
        missing_price = report.missing_price,
        price_out_of_range = report.price_out_of_range,
        missing_year = report.missing_year,
        "filtered records"
    );
    Ok((filtered, report))
}

/// Largest price among the frame's rows, if any.
pub fn max_price(df: &DataFrame) -> Result<Option<i64>> {
    Ok(int_column(df, ColumnRole::Price.canonical_name())?.max())
}

pub(crate) fn int_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Int64Chunked> {
    let column = df
        .column(name)
        .map_err(|_| FilterError::MissingColumn(name.to_string()))?;
    if column.dtype() != &DataType::Int64 {
        return Err(FilterError::UnexpectedType {
            column: name.to_string(),
            dtype: column.dtype().to_string(),
        });
    }
    Ok(column.as_materialized_series().i64()?)
}
