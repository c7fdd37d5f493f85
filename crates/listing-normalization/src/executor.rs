//! Column-wise normalization.
//!
//! Applies the per-cell parsers to whole Polars columns. Each output cell
//! depends only on the matching input cell; row order is preserved.

use listing_common::column_text_values;
use listing_model::{ColumnRole, FractionPolicy, MissingMileage};
use polars::prelude::*;

use crate::error::{NormalizationError, Result};
use crate::normalization::{parse_mileage, parse_price_with, parse_year};
use crate::types::NormalizationOptions;

/// Normalize the source column bound to `role` into its canonical column.
///
/// Numeric roles are parsed to `Int64`; descriptive roles pass through as text.
pub fn normalize_role_column(
    df: &DataFrame,
    role: ColumnRole,
    source: &str,
    options: &NormalizationOptions,
) -> Result<Series> {
    let column = df
        .column(source)
        .map_err(|_| NormalizationError::ColumnNotFound(source.to_string()))?;
    let series = match role {
        ColumnRole::Price => normalize_price_column(column, options.fraction_policy)?,
        ColumnRole::Mileage => normalize_mileage_column(column, options.missing_mileage)?,
        ColumnRole::Year => normalize_year_column(column)?,
        ColumnRole::Brand | ColumnRole::Model | ColumnRole::FuelType => {
            passthrough_text_column(column, role.canonical_name())?
        }
    };
    tracing::debug!(
        role = %role,
        source = %source,
        nulls = series.null_count(),
        "normalized column"
    );
    Ok(series)
}

/// Parse every cell as a price. Unparseable cells become null.
pub fn normalize_price_column(column: &Column, policy: FractionPolicy) -> Result<Series> {
    let values: Vec<Option<i64>> = column_text_values(column)?
        .iter()
        .map(|raw| parse_price_with(raw, policy))
        .collect();
    Ok(Series::new(
        ColumnRole::Price.canonical_name().into(),
        values,
    ))
}

/// Parse every cell as a mileage, storing digit-less cells per `missing`.
pub fn normalize_mileage_column(column: &Column, missing: MissingMileage) -> Result<Series> {
    let values: Vec<Option<i64>> = column_text_values(column)?
        .iter()
        .map(|raw| match (parse_mileage(raw), missing) {
            (Some(km), _) => Some(km),
            (None, MissingMileage::Zero) => Some(0),
            (None, MissingMileage::Null) => None,
        })
        .collect();
    Ok(Series::new(
        ColumnRole::Mileage.canonical_name().into(),
        values,
    ))
}

/// Parse every cell as a model year. Cells without four digits become null.
pub fn normalize_year_column(column: &Column) -> Result<Series> {
    let values: Vec<Option<i64>> = column_text_values(column)?
        .iter()
        .map(|raw| parse_year(raw).map(i64::from))
        .collect();
    Ok(Series::new(ColumnRole::Year.canonical_name().into(), values))
}

/// Copy a descriptive column as text under `name`, keeping nulls.
pub fn passthrough_text_column(column: &Column, name: &str) -> Result<Series> {
    let text = column.cast(&DataType::String)?;
    Ok(text.take_materialized_series().with_name(name.into()))
}
