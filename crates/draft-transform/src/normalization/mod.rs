//! Cleaning rules per column policy.
//!
//! - **numeric**: percentage, percentage-point delta and bare number parsing
//! - **text**: categorical trimming

pub mod numeric;
pub mod text;

pub use numeric::{clean_delta, clean_percentage, parse_f64};
pub use text::clean_categorical;
