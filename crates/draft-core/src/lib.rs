pub mod compare;
pub mod error;
pub mod session;
pub mod stats;
pub mod store;
pub mod view;

pub use compare::{Comparator, SortKey, compare, compare_alphabetic, sort_records};
pub use error::{LoadError, ViewError};
pub use session::Session;
pub use stats::ColorStats;
pub use store::RecordStore;
pub use view::{DisplayRow, TableView};
