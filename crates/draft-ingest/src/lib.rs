//! Loading of card ratings exports.
//!
//! - **csv_table**: read a delimited file into raw string rows
//! - **discovery**: resolve the data file for a color selection

pub mod csv_table;
pub mod discovery;
pub mod error;

pub use csv_table::{IngestOptions, RawRow, RawTable, read_csv_reader, read_csv_table};
pub use discovery::{
    BASELINE_PREFIX, COLOR_STATS_PREFIX, DataFiles, SNAPSHOT_FORMAT, list_snapshots,
    parse_snapshot,
};
pub use error::{IngestError, Result};
