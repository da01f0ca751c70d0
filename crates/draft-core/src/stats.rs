//! Per-color win rates from the color statistics export.

use std::path::Path;
use std::sync::Arc;

use draft_ingest::IngestOptions;
use draft_model::{Archetype, ColumnPolicies, MISSING_GLYPH, Selection, columns, format_numeric};

use crate::error::Result;
use crate::store::RecordStore;

#[derive(Debug, Clone, Default)]
pub struct ColorStats {
    store: Arc<RecordStore>,
}

impl ColorStats {
    pub fn new(store: impl Into<Arc<RecordStore>>) -> Self {
        Self {
            store: store.into(),
        }
    }

    pub fn load(path: &Path, options: IngestOptions) -> Result<Self> {
        let store = RecordStore::load_path(path, &ColumnPolicies::color_stats(), options)?;
        Ok(Self::new(store))
    }

    pub fn store(&self) -> &Arc<RecordStore> {
        &self.store
    }

    /// Win rate of the row whose `Color` cell equals `name`.
    pub fn win_rate(&self, name: &str) -> Option<f64> {
        self.store
            .records()
            .iter()
            .find(|record| record.text(columns::COLOR).map(str::trim) == Some(name))
            .and_then(|record| record.get(columns::WIN_RATE))
            .and_then(|cell| cell.as_f64())
    }

    /// Win rate over all decks.
    pub fn overall(&self) -> Option<f64> {
        self.win_rate(columns::ALL_DECKS)
    }

    pub fn archetype_win_rate(&self, archetype: Archetype) -> Option<f64> {
        self.win_rate(archetype.display_name())
    }

    /// Heading text for the current selection.
    pub fn title(&self, selection: Selection) -> String {
        if let Some(archetype) = selection.archetype()
            && let Some(rate) = self.archetype_win_rate(archetype)
        {
            return format!(
                "{} - Avg. Win Rate: {}",
                archetype.display_name(),
                percent(Some(rate))
            );
        }
        format!("Overall - Avg. Win Rate: {}", percent(self.overall()))
    }

    /// Rows for the two-color summary table, in file order.
    pub fn two_color_store(&self) -> RecordStore {
        self.store.subset(|record| {
            record
                .text(columns::COLOR)
                .and_then(Archetype::from_display_name)
                .is_some()
        })
    }
}

fn percent(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("{}%", format_numeric(rate)),
        None => MISSING_GLYPH.to_string(),
    }
}
