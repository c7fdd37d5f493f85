//! Data model for listing normalization.
//!
//! Shared types used by every stage of the pipeline:
//!
//! - **role**: the closed set of semantic column roles and the per-table binding
//! - **options**: plausibility bounds and parse policies
//! - **error**: errors raised while interpreting model values

pub mod error;
pub mod options;
pub mod role;

pub use error::{ModelError, Result};
pub use options::{FractionPolicy, MissingMileage, PlausibilityBounds};
pub use role::{ColumnBinding, ColumnRole};
