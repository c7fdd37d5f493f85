//! Canonical table output.

use std::path::Path;

use polars::prelude::*;
use tempfile::NamedTempFile;

use crate::error::{IngestError, Result};

/// Writes `df` as CSV with a header row, creating parent directories.
///
/// The table goes to a temporary file in the target directory, which is
/// renamed over `path` once complete. A failed write leaves any existing
/// file at `path` untouched.
pub fn write_table(df: &mut DataFrame, path: &Path) -> Result<()> {
    let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            std::fs::create_dir_all(parent).map_err(|e| IngestError::FileWrite {
                path: parent.to_path_buf(),
                source: e,
            })?;
            parent
        }
        None => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(parent).map_err(|e| IngestError::FileWrite {
        path: parent.to_path_buf(),
        source: e,
    })?;
    CsvWriter::new(staged.as_file_mut())
        .include_header(true)
        .finish(df)
        .map_err(|e| IngestError::CsvWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    staged.persist(path).map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    tracing::info!(path = %path.display(), rows = df.height(), "wrote table");
    Ok(())
}
