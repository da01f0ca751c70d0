//! Viewer configuration file.
//!
//! ```toml
//! [data]
//! dir = "data"
//! date = "2023-11-20"
//! empty_is_absent = false
//!
//! [columns]
//! "GIH WR" = "percentage"
//! "Mana Value" = "numeric"
//! ```
//!
//! Command-line flags win over the file; `DRAFT_VIEWER_DATA_DIR` is used when
//! neither names a data directory.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use draft_ingest::IngestOptions;
use draft_model::{ColumnPolicies, ColumnPolicy};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Read from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "draft-viewer.toml";
pub const DATA_DIR_ENV: &str = "DRAFT_VIEWER_DATA_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataConfig {
    pub dir: Option<PathBuf>,
    /// Snapshot date, `YYYY-MM-DD`. The latest snapshot when unset.
    pub date: Option<String>,
    pub empty_is_absent: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    pub data: DataConfig,
    /// Per-column policy overrides on top of the card ratings defaults.
    pub columns: BTreeMap<String, ColumnPolicy>,
}

impl ViewerConfig {
    pub fn parse(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text, path)?;
        debug!(path = %path.display(), overrides = config.columns.len(), "loaded config");
        Ok(config)
    }

    /// Loads `explicit` if given, else the default file when present.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Card ratings policies with this file's overrides applied.
    pub fn card_policies(&self) -> ColumnPolicies {
        self.columns
            .iter()
            .fold(ColumnPolicies::card_ratings(), |policies, (column, policy)| {
                policies.with_policy(column.clone(), *policy)
            })
    }

    pub fn ingest_options(&self, empty_is_absent_flag: bool) -> IngestOptions {
        IngestOptions::default().with_empty_is_absent(empty_is_absent_flag || self.data.empty_is_absent)
    }

    /// Flag, then config file, then environment.
    pub fn data_dir(&self, flag: Option<&Path>, env: Option<PathBuf>) -> Option<PathBuf> {
        flag.map(Path::to_path_buf)
            .or_else(|| self.data.dir.clone())
            .or(env)
    }

    pub fn snapshot_date<'a>(&'a self, flag: Option<&'a str>) -> Option<&'a str> {
        flag.or(self.data.date.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let config = ViewerConfig::parse("", Path::new("inline.toml")).expect("parse");
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn column_overrides_replace_defaults() {
        let config = ViewerConfig::parse(
            "[columns]\n\"GIH WR\" = \"text\"\n\"Mana Value\" = \"numeric\"\n",
            Path::new("inline.toml"),
        )
        .expect("parse");
        let policies = config.card_policies();
        assert_eq!(policies.policy_for("GIH WR"), ColumnPolicy::PlainText);
        assert_eq!(policies.policy_for("Mana Value"), ColumnPolicy::PlainNumeric);
        assert_eq!(policies.policy_for("IWD"), ColumnPolicy::DeltaNumeric);
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let error = ViewerConfig::parse("[columns]\nALSA = \"fraction\"\n", Path::new("bad.toml"))
            .expect_err("bad policy");
        assert!(error.to_string().starts_with("invalid config bad.toml"));
    }

    #[test]
    fn data_dir_precedence() {
        let config = ViewerConfig {
            data: DataConfig {
                dir: Some(PathBuf::from("from-file")),
                ..DataConfig::default()
            },
            ..ViewerConfig::default()
        };
        let env = Some(PathBuf::from("from-env"));
        assert_eq!(
            config.data_dir(Some(Path::new("from-flag")), env.clone()),
            Some(PathBuf::from("from-flag"))
        );
        assert_eq!(config.data_dir(None, env.clone()), Some(PathBuf::from("from-file")));
        assert_eq!(
            ViewerConfig::default().data_dir(None, env),
            Some(PathBuf::from("from-env"))
        );
    }
}
