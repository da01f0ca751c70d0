//! Sort direction and the per-table active sort.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn is_descending(self) -> bool {
        matches!(self, SortDirection::Descending)
    }

    /// Heading indicator: `↓` ascending, `↑` descending.
    pub fn arrow(self) -> char {
        match self {
            SortDirection::Ascending => '↓',
            SortDirection::Descending => '↑',
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("ascending"),
            SortDirection::Descending => f.write_str("descending"),
        }
    }
}

/// Active sort of one table. `None` means insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    active: Option<(String, SortDirection)>,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Header activation: a new column starts ascending, the same column toggles.
    pub fn activate(&mut self, column: &str) -> SortDirection {
        let direction = match &self.active {
            Some((current, direction)) if current == column => direction.toggled(),
            _ => SortDirection::Ascending,
        };
        self.active = Some((column.to_string(), direction));
        direction
    }

    pub fn set(&mut self, column: impl Into<String>, direction: SortDirection) {
        self.active = Some((column.into(), direction));
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<(&str, SortDirection)> {
        self.active
            .as_ref()
            .map(|(column, direction)| (column.as_str(), *direction))
    }

    pub fn column(&self) -> Option<&str> {
        self.active().map(|(column, _)| column)
    }

    pub fn direction_for(&self, column: &str) -> Option<SortDirection> {
        self.active()
            .filter(|(active, _)| *active == column)
            .map(|(_, direction)| direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unsorted() {
        assert_eq!(SortState::new().active(), None);
    }

    #[test]
    fn repeated_activation_toggles() {
        let mut state = SortState::new();
        assert_eq!(state.activate("GIH WR"), SortDirection::Ascending);
        assert_eq!(state.activate("GIH WR"), SortDirection::Descending);
        assert_eq!(state.activate("GIH WR"), SortDirection::Ascending);
    }

    #[test]
    fn new_column_resets_to_ascending() {
        let mut state = SortState::new();
        state.activate("GIH WR");
        state.activate("GIH WR");
        assert_eq!(state.activate("ALSA"), SortDirection::Ascending);
        assert_eq!(state.direction_for("GIH WR"), None);
        assert_eq!(state.activate("GIH WR"), SortDirection::Ascending);
    }
}
