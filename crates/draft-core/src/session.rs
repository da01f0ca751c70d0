//! A viewing session over one snapshot of a data directory.
//!
//! The session owns both tables and drives reloads from selection changes.
//! A failed load leaves the previous tables and selection in place.

use std::time::Instant;

use draft_ingest::{DataFiles, IngestOptions};
use draft_model::{ColumnPolicies, Selection};
use tracing::{info, info_span};

use crate::error::Result;
use crate::stats::ColorStats;
use crate::view::TableView;

#[derive(Debug, Clone)]
pub struct Session {
    files: DataFiles,
    options: IngestOptions,
    selection: Selection,
    cards: TableView,
    archetypes: TableView,
    stats: ColorStats,
}

impl Session {
    /// Loads the baseline ratings and the color statistics.
    pub fn open(files: DataFiles, policies: ColumnPolicies, options: IngestOptions) -> Result<Self> {
        let span = info_span!("open_session", dir = %files.dir().display(), snapshot = %files.snapshot());
        let _guard = span.enter();
        let start = Instant::now();

        let mut cards = TableView::card_table(policies);
        cards.reload(&files.baseline(), options)?;

        let stats = ColorStats::load(&files.color_stats(), options)?;
        let mut archetypes = TableView::summary_table();
        archetypes.replace_store(stats.two_color_store());

        info!(
            cards = cards.store().len(),
            archetypes = archetypes.store().len(),
            duration_ms = start.elapsed().as_millis(),
            "session opened"
        );
        Ok(Self {
            files,
            options,
            selection: Selection::AllColors,
            cards,
            archetypes,
            stats,
        })
    }

    /// Switches the card table to the ratings file of `selection`.
    pub fn select(&mut self, selection: Selection) -> Result<()> {
        let path = self.files.ratings_for(selection);
        self.cards.reload(&path, self.options)?;
        info!(?selection, records = self.cards.store().len(), "selection changed");
        self.selection = selection;
        Ok(())
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn files(&self) -> &DataFiles {
        &self.files
    }

    pub fn cards(&self) -> &TableView {
        &self.cards
    }

    pub fn cards_mut(&mut self) -> &mut TableView {
        &mut self.cards
    }

    pub fn archetypes(&self) -> &TableView {
        &self.archetypes
    }

    pub fn archetypes_mut(&mut self) -> &mut TableView {
        &mut self.archetypes
    }

    pub fn stats(&self) -> &ColorStats {
        &self.stats
    }

    pub fn title(&self) -> String {
        self.stats.title(self.selection)
    }
}
