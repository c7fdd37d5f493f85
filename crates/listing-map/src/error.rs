//! Error types for column-role resolution.

use std::path::PathBuf;

use listing_model::{ColumnRole, ModelError};
use thiserror::Error;

/// Errors from role resolution and synonym configuration.
#[derive(Debug, Error)]
pub enum MappingError {
    /// A required role matched none of the table's columns.
    #[error(
        "required field {role} not found: no column contains any of [{}] (columns: [{}])",
        synonyms.join(", "),
        columns.join(", ")
    )]
    RequiredRoleUnresolved {
        role: ColumnRole,
        synonyms: Vec<String>,
        columns: Vec<String>,
    },

    /// Synonym file could not be read.
    #[error("failed to read synonyms file {path}: {source}")]
    SynonymsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Synonym file is not a JSON object of string lists.
    #[error("invalid synonyms file {path}: {source}")]
    SynonymsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Synonym file names a role that does not exist.
    #[error(transparent)]
    UnknownRole(#[from] ModelError),

    /// A role was configured with no usable synonym.
    #[error("no synonyms configured for {role}")]
    EmptySynonyms { role: ColumnRole },
}

/// Result type for mapping operations.
pub type Result<T> = std::result::Result<T, MappingError>;
