//! Table views: a live store plus the presentation state of one table.

use std::path::Path;
use std::sync::Arc;

use draft_ingest::IngestOptions;
use draft_model::{
    ColumnPolicies, DisplayColumn, Record, SortDirection, SortState, card_display_columns,
    columns, summary_display_columns,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::compare::{Comparator, sort_records};
use crate::error::{LoadError, ViewError};
use crate::store::RecordStore;

/// One rendered row, cells in display column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DisplayRow {
    pub cells: Vec<String>,
}

impl DisplayRow {
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }
}

/// Context for one on-screen table.
///
/// Each view owns its own [`SortState`], so the card table and the
/// archetype summary sort independently.
#[derive(Debug, Clone)]
pub struct TableView {
    store: Arc<RecordStore>,
    policies: ColumnPolicies,
    columns: Vec<DisplayColumn>,
    search_column: String,
    sort: SortState,
}

impl TableView {
    pub fn new(
        policies: ColumnPolicies,
        columns: Vec<DisplayColumn>,
        search_column: impl Into<String>,
    ) -> Self {
        Self {
            store: Arc::new(RecordStore::default()),
            policies,
            columns,
            search_column: search_column.into(),
            sort: SortState::new(),
        }
    }

    /// The card information table, searched by card name.
    pub fn card_table(policies: ColumnPolicies) -> Self {
        Self::new(policies, card_display_columns(), columns::NAME)
    }

    /// The two-color win rate table, searched by archetype name.
    pub fn summary_table() -> Self {
        Self::new(
            ColumnPolicies::color_stats(),
            summary_display_columns(),
            columns::COLOR,
        )
    }

    pub fn store(&self) -> &Arc<RecordStore> {
        &self.store
    }

    pub fn policies(&self) -> &ColumnPolicies {
        &self.policies
    }

    pub fn display_columns(&self) -> &[DisplayColumn] {
        &self.columns
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// Swaps in a new snapshot. The sort state is kept.
    pub fn replace_store(&mut self, store: impl Into<Arc<RecordStore>>) {
        self.store = store.into();
    }

    /// Loads `path` with this view's policies and swaps it in.
    ///
    /// On error the current store stays in place.
    pub fn reload(&mut self, path: &Path, options: IngestOptions) -> Result<(), LoadError> {
        match RecordStore::load_path(path, &self.policies, options) {
            Ok(store) => {
                self.replace_store(store);
                Ok(())
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "reload failed, keeping previous table");
                Err(error)
            }
        }
    }

    /// Maps a display key, heading or raw column name to a store column.
    pub fn resolve_column(&self, name: &str) -> Result<String, ViewError> {
        if let Some(column) = self.columns.iter().find(|column| column.matches(name)) {
            return Ok(column.key.clone());
        }
        let trimmed = name.trim();
        if self.store.has_column(trimmed) || self.policies.iter().any(|(c, _)| c == trimmed) {
            return Ok(trimmed.to_string());
        }
        Err(ViewError::UnknownColumn {
            name: name.to_string(),
        })
    }

    /// Header activation. Returns the new direction for the column.
    pub fn activate_column(&mut self, name: &str) -> Result<SortDirection, ViewError> {
        let column = self.resolve_column(name)?;
        let direction = self.sort.activate(&column);
        debug!(%column, %direction, "sort column activated");
        Ok(direction)
    }

    pub fn clear_sort(&mut self) {
        self.sort.clear();
    }

    /// Filtered and sorted records of the current store.
    pub fn visible_records(&self, query: &str) -> Vec<&Record> {
        let filtered = self.store.filter_by_substring(&self.search_column, query);
        match self.sort.active() {
            Some((column, direction)) => self.sorted(filtered, column, direction),
            None => filtered,
        }
    }

    fn sorted<'a>(
        &self,
        records: Vec<&'a Record>,
        column: &str,
        direction: SortDirection,
    ) -> Vec<&'a Record> {
        let comparator = Comparator::for_policy(self.policies.policy_for(column));
        debug!(column, %direction, ?comparator, rows = records.len(), "sorting rows");
        sort_records(records, column, comparator, direction)
    }

    /// Rows for the presenter: filtered by `query`, ordered by the sort state.
    pub fn visible_rows(&self, query: &str) -> Vec<DisplayRow> {
        self.render(self.visible_records(query))
    }

    /// Like [`visible_rows`](Self::visible_rows) with an explicit order that
    /// leaves the sort state untouched.
    pub fn visible_rows_sorted(
        &self,
        query: &str,
        column: &str,
        direction: SortDirection,
    ) -> Result<Vec<DisplayRow>, ViewError> {
        let column = self.resolve_column(column)?;
        let filtered = self.store.filter_by_substring(&self.search_column, query);
        Ok(self.render(self.sorted(filtered, &column, direction)))
    }

    fn render(&self, records: Vec<&Record>) -> Vec<DisplayRow> {
        records
            .into_iter()
            .map(|record| DisplayRow {
                cells: self
                    .columns
                    .iter()
                    .map(|column| column.render(record.get(&column.key)))
                    .collect(),
            })
            .collect()
    }

    /// Column headings; the sorted one carries its direction arrow.
    pub fn headings(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|column| match self.sort.direction_for(&column.key) {
                Some(direction) => format!("{}{}", direction.arrow(), column.heading),
                None => column.heading.clone(),
            })
            .collect()
    }
}
