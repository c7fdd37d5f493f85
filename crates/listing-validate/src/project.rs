//! Projection onto the canonical record layout.

use listing_model::{ColumnBinding, ColumnRole};
use polars::prelude::*;

use crate::error::{FilterError, Result};

/// Canonical output column names, in output order, for a binding.
///
/// Numeric roles always appear. Descriptive roles appear only when bound.
pub fn canonical_columns(binding: &ColumnBinding) -> Vec<&'static str> {
    ColumnRole::ALL
        .into_iter()
        .filter(|role| role.is_numeric() || binding.is_bound(*role))
        .map(|role| role.canonical_name())
        .collect()
}

/// Select the canonical columns from a normalized frame, dropping the rest.
pub fn project_canonical(df: &DataFrame, binding: &ColumnBinding) -> Result<DataFrame> {
    let columns = canonical_columns(binding);
    if let Some(missing) = columns
        .iter()
        .find(|name| df.get_column_index(name).is_none())
    {
        return Err(FilterError::MissingColumn((*missing).to_string()));
    }
    Ok(df.select(columns)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric_binding() -> ColumnBinding {
        let mut binding = ColumnBinding::new();
        binding.bind(ColumnRole::Price, "Prix");
        binding.bind(ColumnRole::Mileage, "KM");
        binding.bind(ColumnRole::Year, "Annee");
        binding
    }

    #[test]
    fn canonical_order_is_fixed() {
        let mut binding = numeric_binding();
        binding.bind(ColumnRole::FuelType, "Carburant");
        binding.bind(ColumnRole::Brand, "Marque");
        insta::assert_debug_snapshot!(canonical_columns(&binding), @r#"
        [
            "price",
            "mileage_km",
            "year",
            "brand",
            "fuel_type",
        ]
        "#);
    }

    #[test]
    fn projection_drops_extra_columns() {
        let df = df! {
            "sector" => &["Casablanca"],
            "year" => &[2019i64],
            "price" => &[80_000i64],
            "mileage_km" => &[100_000i64],
        }
        .unwrap();
        let projected = project_canonical(&df, &numeric_binding()).unwrap();
        let names: Vec<&str> = projected
            .get_column_names()
            .into_iter()
            .map(|name| name.as_str())
            .collect();
        assert_eq!(names, vec!["price", "mileage_km", "year"]);
    }

    #[test]
    fn projection_reports_absent_column() {
        let df = df! { "price" => &[80_000i64], "year" => &[2019i64] }.unwrap();
        let err = project_canonical(&df, &numeric_binding()).unwrap_err();
        assert!(matches!(err, FilterError::MissingColumn(name) if name == "mileage_km"));
    }
}
