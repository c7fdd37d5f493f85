use thiserror::Error;

/// Errors raised while normalizing a column.
///
/// Per-cell parse failures are never errors; they become null cells.
#[derive(Debug, Error)]
pub enum NormalizationError {
    #[error("column not found: {0}")]
    ColumnNotFound(String),
    #[error("polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}

pub type Result<T> = std::result::Result<T, NormalizationError>;
