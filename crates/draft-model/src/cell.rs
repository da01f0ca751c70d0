//! Canonical cell values.
//!
//! Every raw field read from a ratings file is normalized into exactly one
//! [`CellValue`]. Numeric zero and "no data" are distinct variants so a blank
//! percentage (which the exports use for zero) never collides with a field
//! that was absent from the source row.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder shown for [`CellValue::Missing`].
pub const MISSING_GLYPH: &str = "-";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Numeric(f64),
    Text(String),
    Missing,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Numeric(value) => Some(*value),
            Self::Text(_) | Self::Missing => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Numeric(_) | Self::Missing => None,
        }
    }

    /// Display string used by table presenters.
    pub fn display(&self) -> String {
        match self {
            Self::Numeric(value) => format_numeric(*value),
            Self::Text(value) => value.clone(),
            Self::Missing => MISSING_GLYPH.to_string(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Formats a floating-point number as a string without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
