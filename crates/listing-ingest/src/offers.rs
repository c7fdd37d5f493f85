//! Flattening of saved phone spec and price documents into a raw table.
//!
//! Documents come from a price-comparison site and have loose, varying
//! structure: every lookup tolerates missing keys and yields an empty string.

use std::path::Path;
use std::sync::LazyLock;

use polars::prelude::*;
use regex::Regex;
use serde_json::Value;

use crate::error::{IngestError, Result};

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static NON_SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\-]").expect("valid regex"));

/// Hardware summary extracted from a specs document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneSpecs {
    pub brand: String,
    pub model: String,
    pub soc: String,
    pub ram: String,
    pub storage: String,
    pub battery_capacity: String,
    pub screen_size: String,
    pub screen_type: String,
    pub screen_resolution: String,
}

impl PhoneSpecs {
    const COLUMNS: [&'static str; 9] = [
        "brand",
        "model",
        "soc",
        "ram",
        "storage",
        "battery_capacity",
        "screen_size",
        "screen_type",
        "screen_resolution",
    ];

    fn values(&self) -> [&str; 9] {
        [
            &self.brand,
            &self.model,
            &self.soc,
            &self.ram,
            &self.storage,
            &self.battery_capacity,
            &self.screen_size,
            &self.screen_type,
            &self.screen_resolution,
        ]
    }
}

/// One shop's offer from a prices document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceOffer {
    pub shop: String,
    pub country: String,
    /// Raw price text; normalized later like any other listing price.
    pub price: String,
    pub currency: String,
    pub url: String,
}

impl PriceOffer {
    const COLUMNS: [&'static str; 5] = ["shop", "country", "price", "currency", "url"];

    fn values(&self) -> [&str; 5] {
        [
            &self.shop,
            &self.country,
            &self.price,
            &self.currency,
            &self.url,
        ]
    }
}

/// Lowercase, dash-separated identifier for a phone name.
///
/// ```
/// use listing_ingest::slugify_phone_name;
///
/// assert_eq!(slugify_phone_name("Google Pixel 9"), "google-pixel-9");
/// assert_eq!(slugify_phone_name("  Galaxy S24+ (5G) "), "galaxy-s24-5g");
/// ```
pub fn slugify_phone_name(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let dashed = WHITESPACE_RUN.replace_all(&lowered, "-");
    NON_SLUG.replace_all(&dashed, "").into_owned()
}

/// Extract the hardware summary from a specs document.
pub fn parse_specs(doc: &Value) -> PhoneSpecs {
    PhoneSpecs {
        brand: text_at(doc, &["brand"]),
        model: text_at(doc, &["name"]),
        soc: text_at(doc, &["hardware", "chipset"]),
        ram: text_at(doc, &["hardware", "ram"]),
        storage: text_at(doc, &["hardware", "storage"]),
        battery_capacity: text_at(doc, &["battery", "capacity"]),
        screen_size: text_at(doc, &["screen", "size"]),
        screen_type: text_at(doc, &["screen", "type"]),
        screen_resolution: text_at(doc, &["screen", "resolution"]),
    }
}

/// Extract shop offers from a prices document.
///
/// Offers are read from `stores`, or from `prices` when `stores` is absent
/// or empty.
pub fn parse_prices(doc: &Value) -> Vec<PriceOffer> {
    let entries = ["stores", "prices"]
        .into_iter()
        .filter_map(|key| doc.get(key).and_then(Value::as_array))
        .find(|entries| !entries.is_empty());
    let Some(entries) = entries else {
        return Vec::new();
    };
    entries
        .iter()
        .map(|entry| PriceOffer {
            shop: text_or(entry, "shop", "name"),
            country: text_at(entry, &["country"]),
            price: text_at(entry, &["price"]),
            currency: entry
                .get("currency")
                .map(value_text)
                .unwrap_or_else(|| "€".to_string()),
            url: text_or(entry, "url", "link"),
        })
        .collect()
}

/// One row per offer with the specs repeated, or a single specs-only row
/// when there are no offers.
pub fn offers_frame(specs: &PhoneSpecs, offers: &[PriceOffer]) -> PolarsResult<DataFrame> {
    let spec_values = specs.values();
    let mut columns: Vec<Column> = Vec::new();
    if !offers.is_empty() {
        for (idx, name) in PriceOffer::COLUMNS.iter().enumerate() {
            let values: Vec<&str> = offers.iter().map(|offer| offer.values()[idx]).collect();
            columns.push(Series::new((*name).into(), values).into_column());
        }
    }
    let rows = offers.len().max(1);
    for (name, value) in PhoneSpecs::COLUMNS.iter().zip(spec_values) {
        columns.push(Series::new((*name).into(), vec![value; rows]).into_column());
    }
    DataFrame::new(columns)
}

/// Read a saved JSON document.
pub fn read_json_document(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::from_io(path, e))?;
    serde_json::from_str(&text).map_err(|source| IngestError::JsonParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Text at a nested key path; empty when any step is missing.
fn text_at(doc: &Value, path: &[&str]) -> String {
    path.iter()
        .try_fold(doc, |node, key| node.get(*key))
        .map(value_text)
        .unwrap_or_default()
}

fn text_or(doc: &Value, key: &str, fallback: &str) -> String {
    doc.get(key)
        .or_else(|| doc.get(fallback))
        .map(value_text)
        .unwrap_or_default()
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
