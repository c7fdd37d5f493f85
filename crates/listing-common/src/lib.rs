//! Shared utilities for listing normalization crates.

mod cell;

pub use cell::{cell_to_text, column_text_values, format_float};
