//! The record store: normalized rows of one loaded file.
//!
//! A store is built once and never mutated. Reloading builds a new store;
//! views swap their `Arc<RecordStore>` so anyone still holding the old
//! snapshot keeps reading a complete table.

use std::path::{Path, PathBuf};
use std::time::Instant;

use draft_ingest::{IngestOptions, RawTable, read_csv_table};
use draft_model::{ColumnPolicies, ColumnPolicy, Record};
use draft_transform::normalize_row;
use tracing::{debug, info, info_span, warn};

use crate::error::{LoadError, Result};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    columns: Vec<String>,
    records: Vec<Record>,
    source: Option<PathBuf>,
}

impl RecordStore {
    /// An empty store with the given column set.
    pub fn empty(columns: Vec<String>) -> Self {
        Self {
            columns,
            records: Vec::new(),
            source: None,
        }
    }

    /// Normalizes every cell of every row.
    ///
    /// # Errors
    ///
    /// [`LoadError::SchemaMismatch`] when the header lacks a required column,
    /// or a row lacks a required plain-text column. Unparseable numeric
    /// cells are not errors; they are logged and stored as missing.
    pub fn load(table: &RawTable, policies: &ColumnPolicies) -> Result<Self> {
        for column in policies.required() {
            if !table.has_column(column) {
                return Err(LoadError::SchemaMismatch {
                    column: column.clone(),
                    row: None,
                });
            }
        }
        let key_columns: Vec<&String> = policies
            .required()
            .iter()
            .filter(|column| policies.policy_for(column) == ColumnPolicy::PlainText)
            .collect();

        let mut records = Vec::with_capacity(table.rows.len());
        let mut coerced = 0usize;
        for (idx, row) in table.rows.iter().enumerate() {
            let row_number = idx + 1;
            if let Some(column) = key_columns.iter().find(|column| !row.contains_key(**column)) {
                return Err(LoadError::SchemaMismatch {
                    column: (*column).clone(),
                    row: Some(row_number),
                });
            }
            let normalized = normalize_row(row, &table.headers, policies);
            for issue in &normalized.issues {
                warn!(
                    row = row_number,
                    column = %issue.column,
                    error = %issue.error,
                    "value coerced to missing"
                );
            }
            coerced += normalized.issues.len();
            records.push(normalized.record);
        }

        debug!(
            rows = records.len(),
            columns = table.headers.len(),
            coerced,
            "normalized table"
        );
        Ok(Self {
            columns: table.headers.clone(),
            records,
            source: None,
        })
    }

    /// Reads and loads a CSV file.
    pub fn load_path(
        path: &Path,
        policies: &ColumnPolicies,
        options: IngestOptions,
    ) -> Result<Self> {
        let span = info_span!("load", path = %path.display());
        let _guard = span.enter();
        let start = Instant::now();
        let table = read_csv_table(path, options)?;
        let mut store = Self::load(&table, policies)?;
        store.source = Some(path.to_path_buf());
        info!(
            records = store.len(),
            duration_ms = start.elapsed().as_millis(),
            "load complete"
        );
        Ok(store)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|candidate| candidate == column)
    }

    /// Full-table snapshot in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// File the store was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Records whose `column` text contains `query`, ignoring case.
    ///
    /// An empty query returns every record. Cells that are not text never
    /// match a non-empty query.
    pub fn filter_by_substring(&self, column: &str, query: &str) -> Vec<&Record> {
        if query.is_empty() {
            return self.records.iter().collect();
        }
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|record| {
                record
                    .text(column)
                    .is_some_and(|text| text.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// A new store with the records matching `keep`, in order.
    #[must_use]
    pub fn subset<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&Record) -> bool,
    {
        Self {
            columns: self.columns.clone(),
            records: self
                .records
                .iter()
                .filter(|record| keep(record))
                .cloned()
                .collect(),
            source: self.source.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use draft_model::CellValue;

    use super::*;

    fn cards() -> RawTable {
        RawTable::from_rows([
            vec![("Name", "Lightning Bolt"), ("GIH WR", "55.2%")],
            vec![("Name", "Shock"), ("GIH WR", "")],
            vec![("Name", "Zap"), ("GIH WR", "-")],
        ])
    }

    #[test]
    fn load_normalizes_cells() {
        let policies = ColumnPolicies::new()
            .with_policy("GIH WR", ColumnPolicy::PercentageNumeric)
            .with_required(["Name"]);
        let store = RecordStore::load(&cards(), &policies).expect("load");
        assert_eq!(store.len(), 3);
        let values: Vec<_> = store
            .records()
            .iter()
            .map(|record| record.get("GIH WR").cloned())
            .collect();
        assert_eq!(
            values,
            vec![
                Some(CellValue::Numeric(55.2)),
                Some(CellValue::Numeric(0.0)),
                Some(CellValue::Missing),
            ]
        );
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let store = RecordStore::load(&cards(), &ColumnPolicies::new()).expect("load");
        let names: Vec<_> = store
            .filter_by_substring("Name", "")
            .into_iter()
            .filter_map(|record| record.text("Name"))
            .collect();
        assert_eq!(names, vec!["Lightning Bolt", "Shock", "Zap"]);
    }

    #[test]
    fn filter_is_case_insensitive() {
        let store = RecordStore::load(&cards(), &ColumnPolicies::new()).expect("load");
        let hits = store.filter_by_substring("Name", "bolt");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text("Name"), Some("Lightning Bolt"));
        assert_eq!(store.filter_by_substring("Name", "ZA").len(), 1);
    }

    #[test]
    fn non_text_cells_never_match() {
        let policies = ColumnPolicies::new().with_policy("GIH WR", ColumnPolicy::PercentageNumeric);
        let store = RecordStore::load(&cards(), &policies).expect("load");
        assert!(store.filter_by_substring("GIH WR", "55").is_empty());
    }

    #[test]
    fn missing_header_column_is_schema_mismatch() {
        let policies = ColumnPolicies::new().with_required(["Rarity"]);
        let error = RecordStore::load(&cards(), &policies).expect_err("missing column");
        assert!(matches!(
            error,
            LoadError::SchemaMismatch { ref column, row: None } if column == "Rarity"
        ));
    }

    #[test]
    fn row_without_key_column_is_schema_mismatch() {
        let table = RawTable::from_rows([
            vec![("Name", "Bolt"), ("GIH WR", "55%")],
            vec![("GIH WR", "40%")],
        ]);
        let policies = ColumnPolicies::new().with_required(["Name"]);
        let error = RecordStore::load(&table, &policies).expect_err("row lacks name");
        assert!(matches!(error, LoadError::SchemaMismatch { row: Some(2), .. }));
    }
}
