//! Comparator engine.
//!
//! Cells of one column may mix numbers, text and missing markers. Both
//! comparators bucket cells into tiers so any mix has a total order, and
//! missing cells always sort last whatever the direction.
//!
//! | comparator   | tier 0  | tier 1 | tier 2  |
//! |--------------|---------|--------|---------|
//! | `Tiered`     | numeric | text   | missing |
//! | `Alphabetic` | text    | missing|         |
//!
//! In the tiered comparator the direction only flips the numeric tier; text
//! stays ascending. In the alphabetic comparator it flips the text tier.

use std::cmp::Ordering;

use draft_model::{CellValue, ColumnPolicy, Record, SortDirection, format_numeric};

/// Which comparator a column sorts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    /// Numeric, then text, then missing.
    Tiered,
    /// Case-insensitive text, then missing. Numbers are compared as text.
    Alphabetic,
}

impl Comparator {
    pub fn for_policy(policy: ColumnPolicy) -> Self {
        match policy {
            ColumnPolicy::PercentageNumeric
            | ColumnPolicy::DeltaNumeric
            | ColumnPolicy::PlainNumeric => Comparator::Tiered,
            ColumnPolicy::CategoricalText | ColumnPolicy::PlainText => Comparator::Alphabetic,
        }
    }

    pub fn key(self, cell: &CellValue) -> SortKey {
        match (self, cell) {
            (Comparator::Tiered, CellValue::Numeric(value)) => SortKey::Numeric(*value),
            (Comparator::Alphabetic, CellValue::Numeric(value)) => {
                SortKey::Text(format_numeric(*value).to_lowercase())
            }
            (_, CellValue::Text(text)) => SortKey::Text(text.to_lowercase()),
            (_, CellValue::Missing) => SortKey::Missing,
        }
    }

    /// Orders two precomputed keys.
    pub fn compare_keys(self, a: &SortKey, b: &SortKey, direction: SortDirection) -> Ordering {
        match (a, b) {
            (SortKey::Numeric(x), SortKey::Numeric(y)) => {
                apply_direction(compare_f64(*x, *y), direction)
            }
            (SortKey::Text(x), SortKey::Text(y)) => match self {
                Comparator::Tiered => x.cmp(y),
                Comparator::Alphabetic => apply_direction(x.cmp(y), direction),
            },
            _ => a.tier().cmp(&b.tier()),
        }
    }

    pub fn compare(self, a: &CellValue, b: &CellValue, direction: SortDirection) -> Ordering {
        self.compare_keys(&self.key(a), &self.key(b), direction)
    }
}

/// A cell reduced to what ordering needs; text is already case-folded.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Numeric(f64),
    Text(String),
    Missing,
}

impl SortKey {
    fn tier(&self) -> u8 {
        match self {
            SortKey::Numeric(_) => 0,
            SortKey::Text(_) => 1,
            SortKey::Missing => 2,
        }
    }
}

fn compare_f64(x: f64, y: f64) -> Ordering {
    x.partial_cmp(&y).unwrap_or_else(|| x.total_cmp(&y))
}

fn apply_direction(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Tiered comparison of two cells.
pub fn compare(a: &CellValue, b: &CellValue, direction: SortDirection) -> Ordering {
    Comparator::Tiered.compare(a, b, direction)
}

/// Alphabetic comparison of two cells.
pub fn compare_alphabetic(a: &CellValue, b: &CellValue, direction: SortDirection) -> Ordering {
    Comparator::Alphabetic.compare(a, b, direction)
}

/// Stable sort of records by one column. Absent cells count as missing.
pub fn sort_records<'a>(
    records: Vec<&'a Record>,
    column: &str,
    comparator: Comparator,
    direction: SortDirection,
) -> Vec<&'a Record> {
    let mut keyed: Vec<(SortKey, &Record)> = records
        .into_iter()
        .map(|record| {
            let key = record
                .get(column)
                .map_or(SortKey::Missing, |cell| comparator.key(cell));
            (key, record)
        })
        .collect();
    keyed.sort_by(|a, b| comparator.compare_keys(&a.0, &b.0, direction));
    keyed.into_iter().map(|(_, record)| record).collect()
}
