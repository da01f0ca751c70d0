//! Property tests for the field normalizer.

use draft_model::{CellValue, ColumnPolicy};
use draft_transform::{normalize, normalize_field, try_normalize};
use proptest::prelude::*;

fn numeric(cell: &CellValue) -> f64 {
    match cell {
        CellValue::Numeric(value) => *value,
        other => panic!("expected numeric cell, got {other:?}"),
    }
}

proptest! {
    #[test]
    fn percentage_strings_parse_to_their_value(whole in 0u32..100, frac in 0u32..100) {
        let raw = format!("{whole}.{frac:02}%");
        let expected: f64 = format!("{whole}.{frac:02}").parse().unwrap();
        let cell = normalize(&raw, ColumnPolicy::PercentageNumeric);
        prop_assert!((numeric(&cell) - expected).abs() < 1e-9);
    }

    #[test]
    fn signed_deltas_keep_their_sign(whole in 0u32..50, tenth in 0u32..10, negative: bool) {
        let sign = if negative { "-" } else { "+" };
        let raw = format!("{sign}{whole}.{tenth}pp");
        let magnitude: f64 = format!("{whole}.{tenth}").parse().unwrap();
        let expected = if negative { -magnitude } else { magnitude };
        let cell = normalize(&raw, ColumnPolicy::DeltaNumeric);
        prop_assert!((numeric(&cell) - expected).abs() < 1e-9);
    }

    #[test]
    fn normalization_is_total(raw in ".*") {
        for policy in ColumnPolicy::ALL {
            // Never panics, and the fallible form agrees whenever it succeeds.
            let cell = normalize(&raw, policy);
            if let Ok(strict) = try_normalize(&raw, policy) {
                prop_assert_eq!(cell, strict);
            } else {
                prop_assert_eq!(cell, CellValue::Missing);
            }
        }
    }

    #[test]
    fn whitespace_only_percentages_are_zero(spaces in "[ \t]{0,8}") {
        prop_assert_eq!(
            normalize(&spaces, ColumnPolicy::PercentageNumeric),
            CellValue::Numeric(0.0)
        );
        prop_assert_eq!(
            normalize(&spaces, ColumnPolicy::DeltaNumeric),
            CellValue::Numeric(0.0)
        );
    }
}

#[test]
fn three_pp_is_three() {
    assert_eq!(
        normalize("3pp", ColumnPolicy::DeltaNumeric),
        CellValue::Numeric(3.0)
    );
}

#[test]
fn absent_numeric_fields_are_missing_not_zero() {
    for policy in [
        ColumnPolicy::PercentageNumeric,
        ColumnPolicy::DeltaNumeric,
        ColumnPolicy::PlainNumeric,
    ] {
        assert_eq!(normalize_field(None, policy), Ok(CellValue::Missing));
    }
    assert_eq!(
        normalize_field(Some(""), ColumnPolicy::PercentageNumeric),
        Ok(CellValue::Numeric(0.0))
    );
}
