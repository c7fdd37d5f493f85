//! Error types for record filtering.

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised while filtering or projecting a normalized frame.
#[derive(Debug, Error)]
pub enum FilterError {
    /// A canonical column the filter depends on is absent.
    #[error("normalized frame has no `{0}` column")]
    MissingColumn(String),

    /// A canonical column has a type other than Int64.
    #[error("column `{column}` must be Int64, found {dtype}")]
    UnexpectedType { column: String, dtype: String },

    /// Polars operation failed.
    #[error(transparent)]
    Polars(#[from] PolarsError),
}

/// Result type for filter operations.
pub type Result<T> = std::result::Result<T, FilterError>;
