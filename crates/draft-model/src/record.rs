use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cell::CellValue;

/// One normalized row. Immutable once built; a reload produces new records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    cells: BTreeMap<String, CellValue>,
}

impl Record {
    pub fn new(cells: BTreeMap<String, CellValue>) -> Self {
        Self { cells }
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// Text of a column, if the cell holds text.
    pub fn text(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(CellValue::as_text)
    }

    pub fn cells(&self) -> &BTreeMap<String, CellValue> {
        &self.cells
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }
}

impl FromIterator<(String, CellValue)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, CellValue)>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
