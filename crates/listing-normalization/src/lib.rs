//! Field normalization for scraped listing tables.
//!
//! Converts free-text price, mileage and year cells into canonical integers.
//!
//! # Overview
//!
//! - **normalization**: pure per-cell parsers (`&str -> Option<i64>`)
//! - **executor**: applies the parsers to whole Polars columns
//!
//! Every parser is referentially transparent: its result depends on the one
//! cell it is given and nothing else, so columns may be processed in any
//! order or in parallel.
//!
//! # Example
//!
//! ```
//! use listing_normalization::normalization::{mileage_or_zero, parse_price, parse_year};
//!
//! assert_eq!(parse_price("80 000 DH"), Some(80000));
//! assert_eq!(mileage_or_zero("100 000 - 110 000"), 100000);
//! assert_eq!(parse_year("1980 ou plus ancien"), Some(1980));
//! ```

mod error;
mod executor;
mod types;

pub mod normalization;

pub use error::{NormalizationError, Result};
pub use executor::{
    normalize_mileage_column, normalize_price_column, normalize_role_column,
    normalize_year_column, passthrough_text_column,
};
pub use types::NormalizationOptions;
