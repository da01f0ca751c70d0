use draft_model::ColumnPolicy;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// Value still not a number after cleaning.
    #[error("cannot parse '{raw}' as {policy} value (cleaned to '{cleaned}')")]
    ParseAmbiguity {
        raw: String,
        cleaned: String,
        policy: ColumnPolicy,
    },
}

/// A cell-local normalization problem; the cell was coerced to missing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("column '{column}': {error}")]
pub struct CellIssue {
    pub column: String,
    #[source]
    pub error: NormalizeError,
}
