//! Behavioral tests for the field parsers.

use listing_model::FractionPolicy;
use listing_normalization::normalization::{
    mileage_or_zero, parse_mileage, parse_price, parse_price_with, parse_year,
};
use proptest::prelude::*;

#[test]
fn year_examples() {
    assert_eq!(parse_year("1980 ou plus ancien"), Some(1980));
    assert_eq!(parse_year("2019"), Some(2019));
    assert_eq!(parse_year("no digits here"), None);
    assert_eq!(parse_year("٢٠١٩"), Some(2019));
}

#[test]
fn mileage_examples() {
    assert_eq!(mileage_or_zero("100 000 - 110 000"), 100000);
    assert_eq!(mileage_or_zero("85,000 km"), 85000);
    assert_eq!(mileage_or_zero(""), 0);
}

#[test]
fn price_examples() {
    assert_eq!(parse_price("80 000 DH"), Some(80000));
    assert_eq!(parse_price("80000.0"), Some(80000));
    assert_eq!(parse_price("80000.00"), Some(80000));
    assert_eq!(parse_price("100,00"), Some(100));
    assert_eq!(parse_price("100,50"), Some(100));
    assert_eq!(parse_price("٨٠٠٠٠ درهم"), Some(80000));
    assert_eq!(parse_price("abc"), None);
}

#[test]
fn price_is_idempotent_on_canonical_integers() {
    assert_eq!(parse_price("80000"), Some(80000));
    assert_eq!(parse_price(&80000.to_string()), Some(80000));
}

proptest! {
    #[test]
    fn mileage_is_never_negative(raw in ".*") {
        prop_assert!(mileage_or_zero(&raw) >= 0);
    }

    #[test]
    fn mileage_range_yields_lower_bound(lower in 0i64..1_000_000, upper in 0i64..1_000_000) {
        let raw = format!("{lower} - {upper}");
        prop_assert_eq!(parse_mileage(&raw), Some(lower));
    }

    #[test]
    fn price_reparses_its_own_output(value in 0i64..1_000_000_000) {
        let parsed = parse_price(&value.to_string());
        prop_assert_eq!(parsed, Some(value));
        prop_assert_eq!(parse_price(&parsed.unwrap().to_string()), parsed);
    }

    #[test]
    fn zero_fraction_never_changes_price(value in 0i64..1_000_000_000, zeros in 1usize..=2) {
        let dotted = format!("{value}.{}", "0".repeat(zeros));
        let commaed = format!("{value},{}", "0".repeat(zeros));
        prop_assert_eq!(parse_price(&dotted), Some(value));
        prop_assert_eq!(parse_price(&commaed), Some(value));
    }

    #[test]
    fn truncate_keeps_integer_part(value in 0i64..1_000_000, cents in 1u32..100) {
        let raw = format!("{value}.{cents:02}");
        prop_assert_eq!(parse_price_with(&raw, FractionPolicy::Truncate), Some(value));
        prop_assert_eq!(parse_price_with(&raw, FractionPolicy::Reject), None);
    }

    #[test]
    fn comma_cents_keep_integer_part_under_either_policy(value in 0i64..1_000_000, cents in 0u32..100) {
        let raw = format!("{value},{cents:02} DH");
        prop_assert_eq!(parse_price(&raw), Some(value));
        prop_assert_eq!(parse_price_with(&raw, FractionPolicy::Truncate), Some(value));
    }

    #[test]
    fn arabic_indic_digits_parse_like_ascii(value in 0i64..1_000_000_000, eastern in any::<bool>()) {
        let zero = if eastern { 0x06F0 } else { 0x0660 };
        let raw: String = value
            .to_string()
            .chars()
            .map(|c| char::from_u32(zero + c.to_digit(10).unwrap()).unwrap())
            .collect();
        prop_assert_eq!(parse_price(&raw), Some(value));
        prop_assert_eq!(parse_mileage(&raw), Some(value));
    }

    #[test]
    fn year_is_four_digits_when_present(raw in ".*") {
        if let Some(year) = parse_year(&raw) {
            prop_assert!((0..=9999).contains(&year));
        }
    }

    #[test]
    fn year_found_inside_text(year in 1000i32..=9999, prefix in "[a-z ]{0,10}", suffix in "[a-z ]{0,10}") {
        let raw = format!("{prefix}{year}{suffix}");
        prop_assert_eq!(parse_year(&raw), Some(year));
    }
}
