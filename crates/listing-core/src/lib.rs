//! Listing normalization pipeline.
//!
//! Composes role resolution, value normalization and record filtering into a
//! single `normalize(raw_table) -> canonical_table` call.
//!
//! # Example
//!
//! ```
//! use listing_core::{NormalizeOptions, normalize};
//! use polars::prelude::*;
//!
//! let raw = df! {
//!     "Prix" => &["80 000 DH", "3000"],
//!     "Kilométrage (km)" => &["100 000 - 110 000", "85,000 km"],
//!     "Annee" => &["2019", "2020"],
//! }?;
//! let out = normalize(&raw, &NormalizeOptions::default())?;
//! assert_eq!(out.df.height(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod options;
mod pipeline;

pub use error::{PipelineError, Result};
pub use options::NormalizeOptions;
pub use pipeline::{Normalized, normalize};
