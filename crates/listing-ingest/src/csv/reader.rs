//! Raw listing table loading.

use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};

/// Reads a delimited UTF-8 file with one header row into a DataFrame.
///
/// Every column is read as text, so `"80000.00"` and `"80 000 DH"` reach the
/// normalizers exactly as scraped. A leading UTF-8 BOM is stripped from the
/// first column name.
pub fn read_raw_table(path: &Path) -> Result<DataFrame> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::from_io(path, e))?;
    if metadata.len() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    strip_bom(&mut df)?;
    tracing::info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded raw table"
    );
    Ok(df)
}

fn strip_bom(df: &mut DataFrame) -> Result<()> {
    let Some(first) = df.get_column_names().first().map(|name| name.to_string()) else {
        return Ok(());
    };
    if let Some(clean) = first.strip_prefix('\u{feff}') {
        let clean = clean.to_string();
        df.rename(&first, clean.into())?;
    }
    Ok(())
}
