use std::io::Write;

use listing_map::{MappingError, RoleSynonyms, require_roles, resolve_roles};
use listing_model::ColumnRole;
use tempfile::NamedTempFile;

fn columns(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn resolves_moroccan_classifieds_headers() {
    let columns = columns(&[
        "Sector",
        "Location",
        "Prix",
        "Kilométrage (km)",
        "Annee-Modele",
        "Marque",
        "Carburant",
    ]);
    let binding = resolve_roles(&columns, &RoleSynonyms::default());

    assert_eq!(binding.source(ColumnRole::Price), Some("Prix"));
    assert_eq!(binding.source(ColumnRole::Mileage), Some("Kilométrage (km)"));
    assert_eq!(binding.source(ColumnRole::Year), Some("Annee-Modele"));
    assert_eq!(binding.source(ColumnRole::Brand), Some("Marque"));
    assert_eq!(binding.source(ColumnRole::Model), Some("Annee-Modele"));
    assert_eq!(binding.source(ColumnRole::FuelType), Some("Carburant"));
}

#[test]
fn unresolved_required_role_message() {
    let columns = columns(&["Prix", "KM"]);
    let synonyms = RoleSynonyms::default();
    let binding = resolve_roles(&columns, &synonyms);
    let err = require_roles(&binding, &columns, &synonyms).unwrap_err();

    assert!(matches!(
        err,
        MappingError::RequiredRoleUnresolved {
            role: ColumnRole::Year,
            ..
        }
    ));
    insta::assert_snapshot!(
        err.to_string(),
        @"required field Year not found: no column contains any of [year, annee] (columns: [Prix, KM])"
    );
}

#[test]
fn synonyms_file_extends_detection() {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(file, r#"{{"year": ["year", "annee", "ano"]}}"#).expect("write synonyms");

    let synonyms = RoleSynonyms::load(file.path()).expect("load synonyms");
    let columns = columns(&["Precio / price", "km", "Ano"]);
    let binding = resolve_roles(&columns, &synonyms);

    assert_eq!(binding.source(ColumnRole::Year), Some("Ano"));
    assert!(binding.missing_required().is_empty());
}

#[test]
fn malformed_synonyms_file_is_reported() {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(file, "[1, 2, 3]").expect("write synonyms");

    let err = RoleSynonyms::load(file.path()).unwrap_err();
    assert!(matches!(err, MappingError::SynonymsParse { .. }));
}

#[test]
fn missing_synonyms_file_is_reported() {
    let err = RoleSynonyms::load(std::path::Path::new("/nonexistent/synonyms.json")).unwrap_err();
    assert!(matches!(err, MappingError::SynonymsRead { .. }));
}
