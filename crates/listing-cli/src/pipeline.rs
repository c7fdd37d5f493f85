//! File-level operations behind the CLI commands.
//!
//! Kept in the library so integration tests can drive them without a
//! process boundary.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use listing_core::{NormalizeOptions, Normalized, normalize};
use listing_ingest::{
    offers_frame, parse_prices, parse_specs, read_json_document, read_raw_table, write_table,
};
use listing_map::RoleSynonyms;
use listing_model::{FractionPolicy, MissingMileage, PlausibilityBounds};
use tracing::info;

/// Everything needed to clean one listing file.
#[derive(Debug, Clone, Default)]
pub struct CleanRequest {
    pub input: PathBuf,
    /// Defaults to `<stem>_cleaned.csv` next to the input.
    pub output: Option<PathBuf>,
    pub synonyms: Option<PathBuf>,
    pub price_floor: Option<i64>,
    pub price_ceiling: Option<i64>,
    pub missing_mileage: MissingMileage,
    pub fraction_policy: FractionPolicy,
    pub dry_run: bool,
}

/// Result of [`clean_file`].
#[derive(Debug)]
pub struct CleanOutcome {
    pub input: PathBuf,
    /// `None` on a dry run.
    pub output: Option<PathBuf>,
    pub normalized: Normalized,
}

/// `cars.csv` becomes `cars_cleaned.csv` in the same directory.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "listings".to_string());
    input.with_file_name(format!("{stem}_cleaned.csv"))
}

/// Default synonyms, extended by the JSON file at `path` when given.
pub fn load_synonyms(path: Option<&Path>) -> Result<RoleSynonyms> {
    match path {
        Some(path) => Ok(RoleSynonyms::load(path)?),
        None => Ok(RoleSynonyms::default()),
    }
}

/// Build pipeline options from a request, validating the price bounds.
pub fn build_options(request: &CleanRequest) -> Result<NormalizeOptions> {
    let defaults = PlausibilityBounds::default();
    let bounds = PlausibilityBounds::new(
        request.price_floor.unwrap_or(defaults.price_floor),
        request.price_ceiling.unwrap_or(defaults.price_ceiling),
    )
    .context("invalid price bounds")?;
    Ok(NormalizeOptions::new()
        .with_synonyms(load_synonyms(request.synonyms.as_deref())?)
        .with_bounds(bounds)
        .with_missing_mileage(request.missing_mileage)
        .with_fraction_policy(request.fraction_policy))
}

/// Read, normalize and write one listing table.
///
/// Output is written once, after the whole table is processed. Nothing is
/// written when the input is missing, a required role is unresolved, or the
/// request is a dry run.
pub fn clean_file(request: &CleanRequest) -> Result<CleanOutcome> {
    let options = build_options(request)?;

    let start = Instant::now();
    let raw = read_raw_table(&request.input)?;
    info!(
        path = %request.input.display(),
        rows = raw.height(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );

    let mut normalized = normalize(&raw, &options)
        .with_context(|| format!("normalize {}", request.input.display()))?;

    let output = if request.dry_run {
        None
    } else {
        let path = request
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&request.input));
        write_table(&mut normalized.df, &path)?;
        Some(path)
    };

    Ok(CleanOutcome {
        input: request.input.clone(),
        output,
        normalized,
    })
}

/// Flatten saved spec and price documents into a raw offers table.
///
/// Returns the number of rows written.
pub fn flatten_offers(specs: &Path, prices: &Path, output: &Path) -> Result<usize> {
    let specs = parse_specs(&read_json_document(specs)?);
    let offers = parse_prices(&read_json_document(prices)?);
    let mut df = offers_frame(&specs, &offers).context("build offers table")?;
    write_table(&mut df, output)?;
    info!(
        offers = offers.len(),
        rows = df.height(),
        "flattened phone offers"
    );
    Ok(df.height())
}
