//! Integration tests for the clean and offers commands.

use std::fs;
use std::path::Path;

use listing_cli::pipeline::{CleanRequest, clean_file, default_output_path, flatten_offers};
use listing_model::{FractionPolicy, MissingMileage};
use polars::prelude::{CsvReadOptions, DataType, SerReader};
use tempfile::TempDir;

const LISTINGS: &str = "\
Sector,Prix,Kilométrage (km),Annee,Marque
Casablanca,80 000 DH,100 000 - 110 000,2015,Dacia
Rabat,3000,50 000,2018,Fiat
Fes,120000.00,,1980 ou plus ancien,Renault
";

fn write_input(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("cars.csv");
    fs::write(&path, content).expect("write input");
    path
}

fn request(input: &Path) -> CleanRequest {
    CleanRequest {
        input: input.to_path_buf(),
        ..CleanRequest::default()
    }
}

#[test]
fn clean_writes_canonical_csv_next_to_input() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_input(&dir, LISTINGS);

    let outcome = clean_file(&request(&input)).expect("clean");

    let output = default_output_path(&input);
    assert_eq!(outcome.output.as_deref(), Some(output.as_path()));
    assert_eq!(outcome.normalized.report.retained_rows, 2);
    assert_eq!(outcome.normalized.max_price, Some(120000));
    insta::assert_snapshot!(fs::read_to_string(&output).expect("read output"), @r"
    price,mileage_km,year,brand
    80000,100000,2015,Dacia
    120000,0,1980,Renault
    ");
}

#[test]
fn written_prices_are_integers() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_input(&dir, LISTINGS);
    let outcome = clean_file(&request(&input)).expect("clean");
    let output = outcome.output.expect("output path");

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(output))
        .expect("reader")
        .finish()
        .expect("read output");
    assert_eq!(df.column("price").expect("price").dtype(), &DataType::Int64);
}

#[test]
fn missing_input_reports_path_and_writes_nothing() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("absent.csv");

    let err = clean_file(&request(&input)).unwrap_err();

    assert_eq!(
        err.to_string(),
        format!("input not found: {}", input.display())
    );
    assert!(!default_output_path(&input).exists());
}

#[test]
fn unresolved_required_role_writes_nothing() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_input(&dir, "Prix,KM\n80000,1000\n");

    let err = clean_file(&request(&input)).unwrap_err();

    assert!(format!("{err:#}").contains("required field Year not found"));
    assert!(!default_output_path(&input).exists());
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_input(&dir, LISTINGS);
    let outcome = clean_file(&CleanRequest {
        dry_run: true,
        ..request(&input)
    })
    .expect("clean");

    assert!(outcome.output.is_none());
    assert!(!default_output_path(&input).exists());
}

#[test]
fn options_flow_into_output() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_input(
        &dir,
        "price,mileage,year\n95000.50,,2019\n80000,n/a,2020\n",
    );
    let synonyms = dir.path().join("synonyms.json");
    fs::write(&synonyms, r#"{"year": ["year"]}"#).expect("write synonyms");
    let output = dir.path().join("out").join("clean.csv");

    let outcome = clean_file(&CleanRequest {
        output: Some(output.clone()),
        synonyms: Some(synonyms),
        missing_mileage: MissingMileage::Null,
        fraction_policy: FractionPolicy::Truncate,
        ..request(&input)
    })
    .expect("clean");

    assert_eq!(outcome.normalized.report.retained_rows, 2);
    insta::assert_snapshot!(fs::read_to_string(&output).expect("read output"), @r"
    price,mileage_km,year
    95000,,2019
    80000,,2020
    ");
}

#[test]
fn offers_are_flattened_to_csv() {
    let dir = TempDir::new().expect("temp dir");
    let specs = dir.path().join("specs.json");
    let prices = dir.path().join("prices.json");
    fs::write(&specs, r#"{"brand": "Google", "name": "Pixel 9"}"#).expect("write specs");
    fs::write(
        &prices,
        r#"{"stores": [{"shop": "A", "price": "799"}, {"name": "B", "price": 829}]}"#,
    )
    .expect("write prices");
    let output = dir.path().join("offers.csv");

    let rows = flatten_offers(&specs, &prices, &output).expect("flatten");

    assert_eq!(rows, 2);
    let text = fs::read_to_string(&output).expect("read output");
    assert!(text.starts_with("shop,country,price,currency,url,brand,model,"));
}
