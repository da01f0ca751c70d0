//! Data file resolution.
//!
//! A data directory holds one export set per snapshot date:
//!
//! - `card-ratings-<date>.csv`: baseline ratings over all decks
//! - `card-ratings-<date>(<CODE>).csv`: ratings within one archetype
//! - `colors-<date>.csv`: win rate per color combination

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use draft_model::{Archetype, Selection};

use crate::error::{IngestError, Result};

pub const BASELINE_PREFIX: &str = "card-ratings-";
pub const COLOR_STATS_PREFIX: &str = "colors-";
pub const SNAPSHOT_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` snapshot date.
pub fn parse_snapshot(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), SNAPSHOT_FORMAT).map_err(|_| {
        IngestError::InvalidSnapshot {
            value: value.to_string(),
        }
    })
}

/// Lists snapshot dates that have a baseline ratings file, oldest first.
pub fn list_snapshots(dir: &Path) -> Result<Vec<NaiveDate>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }
    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut snapshots = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if let Some(date) = baseline_snapshot(name) {
            snapshots.push(date);
        }
    }
    snapshots.sort();
    snapshots.dedup();
    Ok(snapshots)
}

fn baseline_snapshot(file_name: &str) -> Option<NaiveDate> {
    let rest = file_name.strip_prefix(BASELINE_PREFIX)?;
    let stem = rest
        .strip_suffix(".csv")
        .or_else(|| rest.strip_suffix(".CSV"))?;
    NaiveDate::parse_from_str(stem, SNAPSHOT_FORMAT).ok()
}

/// The export set of one snapshot in a data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFiles {
    dir: PathBuf,
    snapshot: NaiveDate,
}

impl DataFiles {
    pub fn new(dir: impl Into<PathBuf>, snapshot: NaiveDate) -> Self {
        Self {
            dir: dir.into(),
            snapshot,
        }
    }

    /// Uses the most recent snapshot found in `dir`.
    pub fn latest(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        let snapshot = list_snapshots(&dir)?
            .pop()
            .ok_or_else(|| IngestError::NoSnapshots { path: dir.clone() })?;
        Ok(Self::new(dir, snapshot))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn snapshot(&self) -> NaiveDate {
        self.snapshot
    }

    fn stamp(&self) -> String {
        self.snapshot.format(SNAPSHOT_FORMAT).to_string()
    }

    pub fn baseline(&self) -> PathBuf {
        self.dir
            .join(format!("{BASELINE_PREFIX}{}.csv", self.stamp()))
    }

    pub fn archetype(&self, archetype: Archetype) -> PathBuf {
        self.dir.join(format!(
            "{BASELINE_PREFIX}{}({}).csv",
            self.stamp(),
            archetype.code()
        ))
    }

    pub fn color_stats(&self) -> PathBuf {
        self.dir
            .join(format!("{COLOR_STATS_PREFIX}{}.csv", self.stamp()))
    }

    /// Ratings file for a selection. Single colors have no file of their
    /// own and use the baseline.
    pub fn ratings_for(&self, selection: Selection) -> PathBuf {
        match selection {
            Selection::AllColors | Selection::Color(_) => self.baseline(),
            Selection::Archetype(archetype) => self.archetype(archetype),
        }
    }
}
