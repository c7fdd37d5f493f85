//! Raw table to canonical table.
//!
//! # Stages
//!
//! 1. **Resolve** column roles from the table's header
//! 2. **Require** price, mileage and year before touching any cell
//! 3. **Normalize** each bound column into its canonical column
//! 4. **Filter** implausible rows
//! 5. **Project** onto the canonical column order

use std::time::Instant;

use listing_map::{require_roles, resolve_roles};
use listing_model::ColumnBinding;
use listing_normalization::normalize_role_column;
use listing_validate::{FilterReport, apply_record_filter, max_price, project_canonical};
use polars::prelude::*;

use crate::error::Result;
use crate::options::NormalizeOptions;

/// Output of a successful [`normalize`] run.
#[derive(Debug, Clone)]
pub struct Normalized {
    /// Canonical table: `price`, `mileage_km`, `year`, then bound descriptive columns.
    pub df: DataFrame,
    pub binding: ColumnBinding,
    pub report: FilterReport,
    /// Largest retained price. A value far above typical listings points to a
    /// unit or scale error in the source.
    pub max_price: Option<i64>,
}

/// Normalize a raw listing table into its canonical form.
///
/// Fails before any extraction when a required role cannot be resolved.
/// Cell-level parse failures never fail the run; they surface as dropped rows
/// in [`Normalized::report`].
pub fn normalize(raw: &DataFrame, options: &NormalizeOptions) -> Result<Normalized> {
    let start = Instant::now();
    let columns: Vec<String> = raw
        .get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect();

    let binding = resolve_roles(&columns, &options.synonyms);
    require_roles(&binding, &columns, &options.synonyms)?;

    let extracted = extract_columns(raw, &binding, options)?;
    let (filtered, report) = apply_record_filter(&extracted, &options.bounds)?;
    let df = project_canonical(&filtered, &binding)?;
    let max_price = max_price(&df)?;

    tracing::info!(
        rows = raw.height(),
        retained = df.height(),
        max_price = ?max_price,
        duration_ms = start.elapsed().as_millis(),
        "normalized listing table"
    );
    Ok(Normalized {
        df,
        binding,
        report,
        max_price,
    })
}

/// Build a frame holding one canonical column per bound role.
fn extract_columns(
    raw: &DataFrame,
    binding: &ColumnBinding,
    options: &NormalizeOptions,
) -> Result<DataFrame> {
    let parse = options.normalization();
    let columns = binding
        .iter()
        .map(|(role, source)| {
            normalize_role_column(raw, role, source, &parse).map(Series::into_column)
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(DataFrame::new(columns)?)
}
