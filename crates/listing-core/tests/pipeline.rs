use listing_core::{NormalizeOptions, normalize};
use listing_model::{ColumnRole, FractionPolicy, PlausibilityBounds};
use polars::prelude::*;

fn prices(df: &DataFrame) -> Vec<Option<i64>> {
    df.column("price")
        .expect("price column")
        .as_materialized_series()
        .i64()
        .expect("int prices")
        .into_iter()
        .collect()
}

fn moroccan_listings() -> DataFrame {
    df! {
        "Sector" => &["Casablanca", "Rabat", "Fes", "Tanger", "Oujda"],
        "Prix" => &["80 000 DH", "3000", "120000.00", "95 000,50 DH", "70000.50"],
        "Kilométrage (km)" => &[
            "100 000 - 110 000",
            "",
            "85,000 km",
            "40 000 - 44 999",
            "60 000 - 64 999",
        ],
        "Annee-Modele" => &["2015", "2018", "1980 ou plus ancien", "2021", "2017"],
        "Marque" => &["Dacia", "Fiat", "Renault", "Peugeot", "Kia"],
        "Carburant" => &["Diesel", "Essence", "Diesel", "Diesel", "Essence"],
    }
    .expect("fixture")
}

#[test]
fn canonical_columns_in_fixed_order() {
    let out = normalize(&moroccan_listings(), &NormalizeOptions::default()).expect("normalize");
    let names: Vec<String> = out
        .df
        .get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(
        names,
        vec!["price", "mileage_km", "year", "brand", "model", "fuel_type"]
    );
    assert_eq!(out.binding.source(ColumnRole::Model), Some("Annee-Modele"));
}

#[test]
fn fraction_policy_changes_retention() {
    let raw = moroccan_listings();

    let rejected = normalize(&raw, &NormalizeOptions::default()).expect("normalize");
    assert_eq!(
        prices(&rejected.df),
        vec![Some(80000), Some(120000), Some(95000)]
    );
    assert_eq!(rejected.report.missing_price, 1);

    let options = NormalizeOptions::default().with_fraction_policy(FractionPolicy::Truncate);
    let truncated = normalize(&raw, &options).expect("normalize");
    assert_eq!(
        prices(&truncated.df),
        vec![Some(80000), Some(120000), Some(95000), Some(70000)]
    );
    assert_eq!(truncated.report.missing_price, 0);
}

#[test]
fn comma_cents_survive_the_default_policy() {
    let raw = df! {
        "Prix" => &["95 000,50 DH", "100 000,99"],
        "KM" => &["40 000", "10 000"],
        "Annee" => &["2021", "2020"],
    }
    .expect("fixture");
    let out = normalize(&raw, &NormalizeOptions::default()).expect("normalize");
    assert_eq!(prices(&out.df), vec![Some(95000), Some(100000)]);
    assert_eq!(out.report.rejected(), 0);
}

#[test]
fn custom_bounds_keep_cheap_listings() {
    let options = NormalizeOptions::default()
        .with_bounds(PlausibilityBounds::new(1_000, 3_000_000).expect("bounds"));
    let out = normalize(&moroccan_listings(), &options).expect("normalize");
    assert_eq!(
        prices(&out.df),
        vec![Some(80000), Some(3000), Some(120000), Some(95000)]
    );
}

#[test]
fn header_only_table_yields_empty_output() {
    let raw = DataFrame::new(vec![
        Series::new_empty("Prix".into(), &DataType::String).into_column(),
        Series::new_empty("KM".into(), &DataType::String).into_column(),
        Series::new_empty("Annee".into(), &DataType::String).into_column(),
    ])
    .expect("fixture");

    let out = normalize(&raw, &NormalizeOptions::default()).expect("normalize");
    assert_eq!(out.df.shape(), (0, 3));
    let names: Vec<String> = out
        .df
        .get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(names, vec!["price", "mileage_km", "year"]);
    assert_eq!(out.report.input_rows, 0);
    assert_eq!(out.report.retained_rows, 0);
    assert_eq!(out.max_price, None);
}

#[test]
fn normalizing_canonical_output_is_stable() {
    let once = normalize(&moroccan_listings(), &NormalizeOptions::default()).expect("first pass");
    let twice = normalize(&once.df, &NormalizeOptions::default()).expect("second pass");

    assert_eq!(prices(&twice.df), prices(&once.df));
    assert_eq!(twice.report.rejected(), 0);
    assert_eq!(twice.max_price, once.max_price);
}
