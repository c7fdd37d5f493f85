use listing_model::{FractionPolicy, MissingMileage};
use serde::{Deserialize, Serialize};

/// Parse policies applied while normalizing columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationOptions {
    /// Treatment of non-zero price fractions such as "80000.50".
    pub fraction_policy: FractionPolicy,
    /// Value stored for mileage cells without digits.
    pub missing_mileage: MissingMileage,
}

impl NormalizationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_fraction_policy(mut self, policy: FractionPolicy) -> Self {
        self.fraction_policy = policy;
        self
    }

    #[must_use]
    pub fn with_missing_mileage(mut self, missing: MissingMileage) -> Self {
        self.missing_mileage = missing;
        self
    }
}
