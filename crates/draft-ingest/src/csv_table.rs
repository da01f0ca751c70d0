//! Raw CSV tables.
//!
//! Cells are kept exactly as written; cleaning is the normalizer's job.
//! A field is *absent* from a [`RawRow`] when the record is shorter than the
//! header (or, with [`IngestOptions::empty_is_absent`], when it is blank).
//! Absence is preserved so numeric columns can tell "no data" apart from an
//! empty string.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Column name → raw field. Missing keys are absent fields.
pub type RawRow = BTreeMap<String, String>;

/// Options controlling how CSV fields are read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestOptions {
    /// Treat blank fields as absent instead of as empty strings.
    #[serde(default)]
    pub empty_is_absent: bool,
}

impl IngestOptions {
    #[must_use]
    pub fn with_empty_is_absent(mut self, enable: bool) -> Self {
        self.empty_is_absent = enable;
        self
    }
}

/// Header plus raw rows, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl RawTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Builds a table from `(column, value)` rows; the header is the union
    /// of columns in first-seen order.
    pub fn from_rows<'a, I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut table = Self::default();
        for row in rows {
            let mut raw = RawRow::new();
            for (column, value) in row {
                if !table.headers.iter().any(|header| header == column) {
                    table.headers.push(column.to_string());
                }
                raw.insert(column.to_string(), value.to_string());
            }
            table.rows.push(raw);
        }
        table
    }

    pub fn push_row(&mut self, row: RawRow) {
        self.rows.push(row);
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|header| header == column)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Reads a ratings CSV file.
///
/// # Errors
///
/// [`IngestError::SourceUnavailable`] when the file cannot be opened,
/// [`IngestError::CsvParse`] for malformed records and
/// [`IngestError::EmptyCsv`] when there is no header row.
pub fn read_csv_table(path: &Path, options: IngestOptions) -> Result<RawTable> {
    let file = File::open(path).map_err(|source| IngestError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let table = read_csv_reader(file, path, options)?;
    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.rows.len(),
        "read csv table"
    );
    Ok(table)
}

/// Reads CSV from any reader; `origin` is only used in error messages.
pub fn read_csv_reader<R: Read>(reader: R, origin: &Path, options: IngestOptions) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers: Vec<String> = reader
        .headers()
        .map_err(|error| IngestError::csv(origin, &error))?
        .iter()
        .map(normalize_header)
        .collect();
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: origin.to_path_buf(),
        });
    }

    let mut table = RawTable::new(headers);
    for record in reader.records() {
        let record = record.map_err(|error| IngestError::csv(origin, &error))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = RawRow::new();
        for (header, value) in table.headers.iter().zip(record.iter()) {
            if header.is_empty() || (options.empty_is_absent && value.trim().is_empty()) {
                continue;
            }
            row.entry(header.clone()).or_insert_with(|| value.to_string());
        }
        table.push_row(row);
    }
    Ok(table)
}
