//! Error types for loading and querying tables.

use draft_ingest::IngestError;
use thiserror::Error;

/// Errors that abort a load. The previously loaded store stays in place.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File missing, unreadable or not valid CSV.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// A required column is absent from the header or from a row.
    #[error("schema mismatch: required column '{column}' is missing{}", row_suffix(.row))]
    SchemaMismatch { column: String, row: Option<usize> },
}

fn row_suffix(row: &Option<usize>) -> String {
    row.map(|row| format!(" in row {row}")).unwrap_or_default()
}

impl LoadError {
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, Self::Ingest(error) if error.is_source_unavailable())
    }
}

/// Errors from table view requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("unknown column: {name}")]
    UnknownColumn { name: String },
}

pub type Result<T> = std::result::Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_mismatch_mentions_row_when_known() {
        let header = LoadError::SchemaMismatch {
            column: "Name".to_string(),
            row: None,
        };
        assert_eq!(
            header.to_string(),
            "schema mismatch: required column 'Name' is missing"
        );

        let row = LoadError::SchemaMismatch {
            column: "Name".to_string(),
            row: Some(3),
        };
        assert_eq!(
            row.to_string(),
            "schema mismatch: required column 'Name' is missing in row 3"
        );
        assert!(!row.is_source_unavailable());
    }
}
