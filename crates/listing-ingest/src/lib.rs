//! Listing table ingestion.
//!
//! Loads scraped listing tables into Polars DataFrames, writes canonical
//! tables back out, and flattens saved phone-offer JSON documents into the
//! same raw tabular shape.
//!
//! # Features
//!
//! - **CSV Loading**: every column read as text so parsers see raw cells
//! - **CSV Output**: header row, parent directories created
//! - **Phone Offers**: specs and shop prices joined into one row per offer

mod csv;
mod error;
mod offers;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV ===
pub use csv::{read_raw_table, write_table};

// === Phone Offers ===
pub use offers::{
    PhoneSpecs, PriceOffer, offers_frame, parse_prices, parse_specs, read_json_document,
    slugify_phone_name,
};
