//! Configured column-name synonyms per role.

use std::collections::BTreeMap;
use std::path::Path;

use listing_model::ColumnRole;
use serde::{Deserialize, Serialize};

use crate::error::{MappingError, Result};

/// Lower-case name fragments that identify each role, in priority order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSynonyms {
    entries: BTreeMap<ColumnRole, Vec<String>>,
}

fn default_synonyms(role: ColumnRole) -> &'static [&'static str] {
    match role {
        ColumnRole::Price => &["price", "prix"],
        ColumnRole::Mileage => &["mileage", "km"],
        ColumnRole::Year => &["year", "annee"],
        ColumnRole::Brand => &["brand", "marque"],
        ColumnRole::Model => &["model", "modele"],
        ColumnRole::FuelType => &["fuel", "carburant"],
    }
}

impl Default for RoleSynonyms {
    fn default() -> Self {
        let entries = ColumnRole::ALL
            .iter()
            .map(|role| {
                let values = default_synonyms(*role)
                    .iter()
                    .map(|s| (*s).to_string())
                    .collect();
                (*role, values)
            })
            .collect();
        Self { entries }
    }
}

impl RoleSynonyms {
    /// Synonyms configured for `role`.
    pub fn for_role(&self, role: ColumnRole) -> &[String] {
        self.entries.get(&role).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replace the synonyms of one role.
    ///
    /// Values are trimmed and lower-cased; blanks are dropped.
    pub fn set(&mut self, role: ColumnRole, synonyms: Vec<String>) -> Result<()> {
        let cleaned: Vec<String> = synonyms
            .into_iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        if cleaned.is_empty() {
            return Err(MappingError::EmptySynonyms { role });
        }
        self.entries.insert(role, cleaned);
        Ok(())
    }

    /// Returns true when the lower-cased `column` contains any synonym of `role`.
    pub fn matches(&self, role: ColumnRole, column: &str) -> bool {
        let lowered = column.to_lowercase();
        self.for_role(role)
            .iter()
            .any(|synonym| lowered.contains(synonym.as_str()))
    }

    /// Overlay a JSON object such as `{"price": ["price", "prix", "cost"]}`.
    ///
    /// Roles absent from the object keep their current synonyms.
    pub fn merge_json(&mut self, json: &str) -> std::result::Result<(), MergeError> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;
        for (key, values) in raw {
            let role: ColumnRole = key.parse().map_err(MappingError::from)?;
            self.set(role, values)?;
        }
        Ok(())
    }

    /// Defaults overlaid with the synonyms file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| MappingError::SynonymsRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut synonyms = Self::default();
        match synonyms.merge_json(&contents) {
            Ok(()) => {}
            Err(MergeError::Json(source)) => {
                return Err(MappingError::SynonymsParse {
                    path: path.to_path_buf(),
                    source,
                });
            }
            Err(MergeError::Mapping(error)) => return Err(error),
        }
        tracing::debug!(path = %path.display(), "loaded role synonyms");
        Ok(synonyms)
    }

    /// All roles with their synonyms, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ColumnRole, &[String])> {
        self.entries
            .iter()
            .map(|(role, values)| (*role, values.as_slice()))
    }
}

/// Failure while overlaying synonyms from JSON text.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Mapping(#[from] MappingError),
}
