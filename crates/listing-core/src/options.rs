//! Pipeline configuration.

use listing_map::RoleSynonyms;
use listing_model::{FractionPolicy, MissingMileage, PlausibilityBounds};
use listing_normalization::NormalizationOptions;
use serde::{Deserialize, Serialize};

/// Everything [`crate::normalize`] needs besides the table itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    pub synonyms: RoleSynonyms,
    pub bounds: PlausibilityBounds,
    pub missing_mileage: MissingMileage,
    pub fraction_policy: FractionPolicy,
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_synonyms(mut self, synonyms: RoleSynonyms) -> Self {
        self.synonyms = synonyms;
        self
    }

    pub fn with_bounds(mut self, bounds: PlausibilityBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_missing_mileage(mut self, policy: MissingMileage) -> Self {
        self.missing_mileage = policy;
        self
    }

    pub fn with_fraction_policy(mut self, policy: FractionPolicy) -> Self {
        self.fraction_policy = policy;
        self
    }

    /// Per-cell parse policies handed to the column executors.
    pub fn normalization(&self) -> NormalizationOptions {
        NormalizationOptions::default()
            .with_fraction_policy(self.fraction_policy)
            .with_missing_mileage(self.missing_mileage)
    }
}
