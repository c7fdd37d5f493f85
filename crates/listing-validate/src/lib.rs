//! Record filtering for normalized listing tables.
//!
//! - **filter**: drops rows with a missing or implausible price or a missing year
//! - **project**: keeps only the canonical output columns, in fixed order

mod error;
mod filter;
mod project;

pub use error::{FilterError, Result};
pub use filter::{FilterReport, RejectReason, apply_record_filter, classify_row, max_price};
pub use project::{canonical_columns, project_canonical};
