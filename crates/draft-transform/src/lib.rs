//! Field normalization: raw CSV text to canonical cells.

pub mod error;
pub mod normalization;
pub mod normalizer;

pub use error::{CellIssue, NormalizeError};
pub use normalizer::{NormalizedRow, normalize, normalize_field, normalize_row, try_normalize};
