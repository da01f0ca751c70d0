//! Per-column normalization policies.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::columns;
use crate::error::ModelError;

/// Rule governing how the raw text of a column becomes a [`crate::CellValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ColumnPolicy {
    /// `55.2%`, blank means zero.
    #[serde(rename = "percentage")]
    PercentageNumeric,
    /// Signed percentage-point delta such as `+3.2pp`, blank means zero.
    #[serde(rename = "delta")]
    DeltaNumeric,
    /// Bare number (pick order, counts), blank means missing.
    #[serde(rename = "numeric")]
    PlainNumeric,
    /// Short trimmed label (color, rarity), blank means missing.
    #[serde(rename = "categorical")]
    CategoricalText,
    /// Free text passed through untouched.
    #[default]
    #[serde(rename = "text")]
    PlainText,
}

impl ColumnPolicy {
    pub const ALL: [ColumnPolicy; 5] = [
        ColumnPolicy::PercentageNumeric,
        ColumnPolicy::DeltaNumeric,
        ColumnPolicy::PlainNumeric,
        ColumnPolicy::CategoricalText,
        ColumnPolicy::PlainText,
    ];

    /// Name used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnPolicy::PercentageNumeric => "percentage",
            ColumnPolicy::DeltaNumeric => "delta",
            ColumnPolicy::PlainNumeric => "numeric",
            ColumnPolicy::CategoricalText => "categorical",
            ColumnPolicy::PlainText => "text",
        }
    }

    /// True for policies whose cells carry numeric semantics.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            ColumnPolicy::PercentageNumeric | ColumnPolicy::DeltaNumeric | ColumnPolicy::PlainNumeric
        )
    }
}

impl fmt::Display for ColumnPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnPolicy {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        ColumnPolicy::ALL
            .into_iter()
            .find(|policy| policy.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownPolicy(s.to_string()))
    }
}

/// Column name → policy table, plus the columns a file must provide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnPolicies {
    policies: BTreeMap<String, ColumnPolicy>,
    required: Vec<String>,
}

impl ColumnPolicies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Policies for the card ratings files.
    pub fn card_ratings() -> Self {
        let mut policies = Self::new();
        for column in columns::PERCENTAGE_COLUMNS {
            policies.set(column, ColumnPolicy::PercentageNumeric);
        }
        policies.set(columns::IWD, ColumnPolicy::DeltaNumeric);
        for column in columns::PLAIN_NUMERIC_COLUMNS {
            policies.set(column, ColumnPolicy::PlainNumeric);
        }
        policies.set(columns::COLOR, ColumnPolicy::CategoricalText);
        policies.set(columns::RARITY, ColumnPolicy::CategoricalText);
        policies.set(columns::NAME, ColumnPolicy::PlainText);
        policies.with_required(columns::CARD_REQUIRED_COLUMNS)
    }

    /// Policies for the per-color statistics file.
    pub fn color_stats() -> Self {
        let mut policies = Self::new();
        policies.set(columns::COLOR, ColumnPolicy::PlainText);
        policies.set(columns::WIN_RATE, ColumnPolicy::PercentageNumeric);
        policies.with_required([columns::COLOR, columns::WIN_RATE])
    }

    pub fn set(&mut self, column: impl Into<String>, policy: ColumnPolicy) {
        self.policies.insert(column.into(), policy);
    }

    #[must_use]
    pub fn with_policy(mut self, column: impl Into<String>, policy: ColumnPolicy) -> Self {
        self.set(column, policy);
        self
    }

    #[must_use]
    pub fn with_required<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for column in columns {
            let column = column.into();
            if !self.required.contains(&column) {
                self.required.push(column);
            }
        }
        self
    }

    /// Policy for a column; columns without an entry are plain text.
    pub fn policy_for(&self, column: &str) -> ColumnPolicy {
        self.policies.get(column).copied().unwrap_or_default()
    }

    pub fn required(&self) -> &[String] {
        &self.required
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ColumnPolicy)> {
        self.policies
            .iter()
            .map(|(column, policy)| (column.as_str(), *policy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_columns_default_to_plain_text() {
        let policies = ColumnPolicies::card_ratings();
        assert_eq!(policies.policy_for("Mystery"), ColumnPolicy::PlainText);
    }

    #[test]
    fn card_ratings_assigns_expected_policies() {
        let policies = ColumnPolicies::card_ratings();
        assert_eq!(policies.policy_for("GIH WR"), ColumnPolicy::PercentageNumeric);
        assert_eq!(policies.policy_for("% GP"), ColumnPolicy::PercentageNumeric);
        assert_eq!(policies.policy_for("IWD"), ColumnPolicy::DeltaNumeric);
        assert_eq!(policies.policy_for("ALSA"), ColumnPolicy::PlainNumeric);
        assert_eq!(policies.policy_for("Rarity"), ColumnPolicy::CategoricalText);
        assert_eq!(policies.policy_for("Name"), ColumnPolicy::PlainText);
        assert!(policies.required().iter().any(|c| c == "Name"));
    }

    #[test]
    fn policy_names_parse() {
        for policy in ColumnPolicy::ALL {
            assert_eq!(policy.as_str().parse::<ColumnPolicy>().unwrap(), policy);
        }
        assert_eq!(" Delta ".parse::<ColumnPolicy>().unwrap(), ColumnPolicy::DeltaNumeric);
        assert!("float".parse::<ColumnPolicy>().is_err());
    }

    #[test]
    fn required_columns_are_deduplicated() {
        let policies = ColumnPolicies::new().with_required(["Name", "Name", "Color"]);
        assert_eq!(policies.required(), ["Name".to_string(), "Color".to_string()]);
    }
}
