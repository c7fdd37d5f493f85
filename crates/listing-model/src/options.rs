//! Configuration options for listing normalization.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Exclusive lower bound on a plausible price.
pub const DEFAULT_PRICE_FLOOR: i64 = 5_000;
/// Exclusive upper bound on a plausible price.
pub const DEFAULT_PRICE_CEILING: i64 = 3_000_000;

/// Fixed plausibility bounds applied by the record filter.
///
/// Both bounds are exclusive: a row survives only when
/// `price_floor < price < price_ceiling`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlausibilityBounds {
    /// Prices at or below this are toy or placeholder listings.
    pub price_floor: i64,
    /// Prices at or above this are scale or decimal errors.
    pub price_ceiling: i64,
}

impl Default for PlausibilityBounds {
    fn default() -> Self {
        Self {
            price_floor: DEFAULT_PRICE_FLOOR,
            price_ceiling: DEFAULT_PRICE_CEILING,
        }
    }
}

impl PlausibilityBounds {
    /// Create bounds, rejecting an empty open interval.
    pub fn new(price_floor: i64, price_ceiling: i64) -> Result<Self> {
        if price_ceiling.saturating_sub(price_floor) < 2 {
            return Err(ModelError::InvalidBounds {
                floor: price_floor,
                ceiling: price_ceiling,
            });
        }
        Ok(Self {
            price_floor,
            price_ceiling,
        })
    }

    /// Returns true when `price` lies strictly inside the bounds.
    pub fn accepts_price(&self, price: i64) -> bool {
        price > self.price_floor && price < self.price_ceiling
    }
}

/// What to store when a mileage cell contains no digits at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingMileage {
    /// Store 0. Unknown and zero mileage become indistinguishable.
    #[default]
    Zero,
    /// Store null so downstream consumers can impute explicitly.
    Null,
}

/// How the price parser treats a non-zero fractional remainder ("80000.50").
///
/// Zero remainders (".0", ".00", ",00") and two-digit comma cents ("100,50")
/// are always discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FractionPolicy {
    /// The cell does not parse; the row is later dropped as price-less.
    #[default]
    Reject,
    /// Keep the integer part and drop the remainder.
    Truncate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_exclusive() {
        let bounds = PlausibilityBounds::default();
        assert!(!bounds.accepts_price(5_000));
        assert!(bounds.accepts_price(5_001));
        assert!(bounds.accepts_price(2_999_999));
        assert!(!bounds.accepts_price(3_000_000));
    }

    #[test]
    fn bounds_reject_empty_interval() {
        assert_eq!(
            PlausibilityBounds::new(100, 101),
            Err(ModelError::InvalidBounds {
                floor: 100,
                ceiling: 101
            })
        );
        assert!(PlausibilityBounds::new(100, 102).is_ok());
    }

    #[test]
    fn policies_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&MissingMileage::Null).unwrap(),
            "\"null\""
        );
        assert_eq!(
            serde_json::to_string(&FractionPolicy::Truncate).unwrap(),
            "\"truncate\""
        );
    }
}
