//! Policy dispatch from raw fields to [`CellValue`]s.
//!
//! Blank percentage and delta fields mean zero, not missing. Only fields that
//! are absent from the source row become [`CellValue::Missing`] in those
//! columns, together with values that still fail to parse after cleaning.

use std::collections::BTreeMap;

use draft_model::{CellValue, ColumnPolicies, ColumnPolicy, Record};
use tracing::warn;

use crate::error::{CellIssue, NormalizeError};
use crate::normalization::{clean_categorical, clean_delta, clean_percentage, parse_f64};

fn parse_cleaned(
    raw: &str,
    cleaned: &str,
    policy: ColumnPolicy,
    blank: CellValue,
) -> Result<CellValue, NormalizeError> {
    if cleaned.is_empty() {
        return Ok(blank);
    }
    parse_f64(cleaned)
        .map(CellValue::Numeric)
        .ok_or_else(|| NormalizeError::ParseAmbiguity {
            raw: raw.to_string(),
            cleaned: cleaned.to_string(),
            policy,
        })
}

/// Normalizes a present field, reporting values that cannot be parsed.
pub fn try_normalize(raw: &str, policy: ColumnPolicy) -> Result<CellValue, NormalizeError> {
    match policy {
        ColumnPolicy::PercentageNumeric => {
            parse_cleaned(raw, clean_percentage(raw), policy, CellValue::Numeric(0.0))
        }
        ColumnPolicy::DeltaNumeric => {
            parse_cleaned(raw, &clean_delta(raw), policy, CellValue::Numeric(0.0))
        }
        ColumnPolicy::PlainNumeric => parse_cleaned(raw, raw.trim(), policy, CellValue::Missing),
        ColumnPolicy::CategoricalText => Ok(clean_categorical(raw)
            .map_or(CellValue::Missing, CellValue::text)),
        ColumnPolicy::PlainText => Ok(CellValue::text(raw)),
    }
}

/// Normalizes a present field; unparseable numbers become missing.
pub fn normalize(raw: &str, policy: ColumnPolicy) -> CellValue {
    try_normalize(raw, policy).unwrap_or_else(|error| {
        warn!(%policy, %error, "coercing unparseable value to missing");
        CellValue::Missing
    })
}

/// Normalizes a field that may be absent from its row.
pub fn normalize_field(
    raw: Option<&str>,
    policy: ColumnPolicy,
) -> Result<CellValue, NormalizeError> {
    match raw {
        Some(raw) => try_normalize(raw, policy),
        None => Ok(CellValue::Missing),
    }
}

/// A normalized record plus the cells that had to be coerced to missing.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRow {
    pub record: Record,
    pub issues: Vec<CellIssue>,
}

/// Normalizes every column of `columns` for one raw row.
///
/// The resulting record always carries the full column set; absent fields
/// are [`CellValue::Missing`].
pub fn normalize_row(
    row: &BTreeMap<String, String>,
    columns: &[String],
    policies: &ColumnPolicies,
) -> NormalizedRow {
    let mut cells = BTreeMap::new();
    let mut issues = Vec::new();
    for column in columns {
        let policy = policies.policy_for(column);
        let cell = match normalize_field(row.get(column).map(String::as_str), policy) {
            Ok(cell) => cell,
            Err(error) => {
                issues.push(CellIssue {
                    column: column.clone(),
                    error,
                });
                CellValue::Missing
            }
        };
        cells.insert(column.clone(), cell);
    }
    NormalizedRow {
        record: Record::new(cells),
        issues,
    }
}
