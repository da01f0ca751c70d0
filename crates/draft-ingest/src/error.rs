//! Error types for ratings data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading ratings files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// File missing or unreadable. The caller keeps its previous table.
    #[error("data source unavailable: {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory not found or not readable.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Malformed CSV record.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// File has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    // === Data File Errors ===
    /// Snapshot date not in `YYYY-MM-DD` form.
    #[error("invalid snapshot date '{value}' (expected YYYY-MM-DD)")]
    InvalidSnapshot { value: String },

    /// No ratings exports found in a data directory.
    #[error("no card ratings files found in {path}")]
    NoSnapshots { path: PathBuf },
}

impl IngestError {
    pub(crate) fn csv(path: impl Into<PathBuf>, error: &csv::Error) -> Self {
        Self::CsvParse {
            path: path.into(),
            message: error.to_string(),
        }
    }

    /// True when the failure means the file could not be read at all.
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, Self::SourceUnavailable { .. })
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::EmptyCsv {
            path: PathBuf::from("/data/card-ratings-2023-11-20.csv"),
        };
        assert_eq!(
            err.to_string(),
            "CSV file is empty: /data/card-ratings-2023-11-20.csv"
        );
    }

    #[test]
    fn test_source_unavailable_keeps_io_source() {
        let err = IngestError::SourceUnavailable {
            path: PathBuf::from("missing.csv"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.is_source_unavailable());
        assert!(std::error::Error::source(&err).is_some());
    }
}
