//! Semantic column roles and per-table bindings.
//!
//! A raw listing table names its columns however the source site likes
//! ("Prix", "price_dh", "Kilométrage"). Each [`ColumnRole`] names what a column
//! means; a [`ColumnBinding`] records which source column was chosen for each
//! role in one particular table.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Semantic role a source column may fulfil.
///
/// The set is closed. Declaration order is the canonical output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    /// Asking price, currency-agnostic integer units.
    Price,
    /// Odometer reading in kilometres.
    Mileage,
    /// Model year, four digits.
    Year,
    /// Manufacturer, passed through as text.
    Brand,
    /// Model name, passed through as text.
    Model,
    /// Fuel type, passed through as text.
    FuelType,
}

impl ColumnRole {
    /// All roles in canonical output order.
    pub const ALL: [ColumnRole; 6] = [
        ColumnRole::Price,
        ColumnRole::Mileage,
        ColumnRole::Year,
        ColumnRole::Brand,
        ColumnRole::Model,
        ColumnRole::FuelType,
    ];

    /// Roles whose absence makes a table unusable.
    pub const REQUIRED: [ColumnRole; 3] =
        [ColumnRole::Price, ColumnRole::Mileage, ColumnRole::Year];

    /// Field name of this role in the canonical output table.
    pub fn canonical_name(&self) -> &'static str {
        match self {
            ColumnRole::Price => "price",
            ColumnRole::Mileage => "mileage_km",
            ColumnRole::Year => "year",
            ColumnRole::Brand => "brand",
            ColumnRole::Model => "model",
            ColumnRole::FuelType => "fuel_type",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ColumnRole::Price => "Price",
            ColumnRole::Mileage => "Mileage",
            ColumnRole::Year => "Year",
            ColumnRole::Brand => "Brand",
            ColumnRole::Model => "Model",
            ColumnRole::FuelType => "Fuel type",
        }
    }

    /// Returns true for the numeric roles every table must provide.
    pub fn is_required(&self) -> bool {
        ColumnRole::REQUIRED.contains(self)
    }

    /// Returns true for roles normalized to integers rather than passed through.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ColumnRole::Price | ColumnRole::Mileage | ColumnRole::Year
        )
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ColumnRole {
    type Err = ModelError;

    /// Accepts labels and canonical field names, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "price" => Ok(ColumnRole::Price),
            "mileage" | "mileage_km" => Ok(ColumnRole::Mileage),
            "year" => Ok(ColumnRole::Year),
            "brand" => Ok(ColumnRole::Brand),
            "model" => Ok(ColumnRole::Model),
            "fuel" | "fuel_type" | "fueltype" => Ok(ColumnRole::FuelType),
            _ => Err(ModelError::UnknownRole(s.to_string())),
        }
    }
}

/// Resolved mapping from role to source column name for one table.
///
/// Built once by the resolver and only read afterwards. A role with no entry
/// is unresolved: no source column matched it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnBinding {
    columns: BTreeMap<ColumnRole, String>,
}

impl ColumnBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `role` to `column`, replacing any previous binding.
    pub fn bind(&mut self, role: ColumnRole, column: impl Into<String>) {
        self.columns.insert(role, column.into());
    }

    /// Source column bound to `role`, if any.
    pub fn source(&self, role: ColumnRole) -> Option<&str> {
        self.columns.get(&role).map(String::as_str)
    }

    pub fn is_bound(&self, role: ColumnRole) -> bool {
        self.columns.contains_key(&role)
    }

    /// Required roles that have no source column.
    pub fn missing_required(&self) -> Vec<ColumnRole> {
        ColumnRole::REQUIRED
            .iter()
            .copied()
            .filter(|role| !self.is_bound(*role))
            .collect()
    }

    /// Bound roles in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ColumnRole, &str)> {
        self.columns.iter().map(|(role, col)| (*role, col.as_str()))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
