pub mod cell;
pub mod color;
pub mod columns;
pub mod error;
pub mod policy;
pub mod record;
pub mod sort;

pub use cell::{CellValue, MISSING_GLYPH, format_numeric};
pub use color::{Archetype, Color, Selection};
pub use columns::{CellFormat, DisplayColumn, card_display_columns, summary_display_columns};
pub use error::{ModelError, Result};
pub use policy::{ColumnPolicies, ColumnPolicy};
pub use record::Record;
pub use sort::{SortDirection, SortState};
