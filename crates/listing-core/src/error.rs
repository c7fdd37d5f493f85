use listing_map::MappingError;
use listing_normalization::NormalizationError;
use listing_validate::FilterError;
use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised by [`crate::normalize`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A required role has no source column, or the synonym table is invalid.
    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error(transparent)]
    Normalization(#[from] NormalizationError),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
