//! Column names used by the ratings exports and the columns the viewer shows.

use serde::Serialize;

use crate::cell::{CellValue, MISSING_GLYPH, format_numeric};

pub const NAME: &str = "Name";
pub const COLOR: &str = "Color";
pub const RARITY: &str = "Rarity";
pub const ALSA: &str = "ALSA";
pub const ATA: &str = "ATA";
pub const GAMES_PLAYED_PCT: &str = "% GP";
pub const GIH_WR: &str = "GIH WR";
pub const IWD: &str = "IWD";
pub const WIN_RATE: &str = "Win Rate";

/// Row of the color statistics file holding the overall win rate.
pub const ALL_DECKS: &str = "All Decks";

pub const PERCENTAGE_COLUMNS: [&str; 6] = ["GNS WR", GIH_WR, "GD WR", "OH WR", "GP WR", GAMES_PLAYED_PCT];

pub const PLAIN_NUMERIC_COLUMNS: [&str; 9] = [
    "# Seen", ALSA, "# Picked", ATA, "# GP", "# OH", "# GD", "# GIH", "# GNS",
];

pub const CARD_REQUIRED_COLUMNS: [&str; 7] =
    [NAME, COLOR, RARITY, ALSA, GAMES_PLAYED_PCT, GIH_WR, IWD];

/// How a cell is rendered in a display column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum CellFormat {
    #[default]
    Plain,
    /// Numbers get a trailing `%`.
    Percent,
}

/// A column shown by a table presenter: the source column and its heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayColumn {
    pub key: String,
    pub heading: String,
    pub format: CellFormat,
}

impl DisplayColumn {
    pub fn new(key: impl Into<String>, heading: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            heading: heading.into(),
            format: CellFormat::Plain,
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: CellFormat) -> Self {
        self.format = format;
        self
    }

    /// True when `name` refers to this column by key or heading.
    pub fn matches(&self, name: &str) -> bool {
        let name = name.trim();
        self.key.eq_ignore_ascii_case(name) || self.heading.trim().eq_ignore_ascii_case(name)
    }

    pub fn render(&self, cell: Option<&CellValue>) -> String {
        match (cell, self.format) {
            (Some(CellValue::Numeric(value)), CellFormat::Percent) => {
                format!("{}%", format_numeric(*value))
            }
            (Some(cell), _) => cell.display(),
            (None, _) => MISSING_GLYPH.to_string(),
        }
    }
}

/// Columns of the card information table.
pub fn card_display_columns() -> Vec<DisplayColumn> {
    vec![
        DisplayColumn::new(NAME, "Card Name"),
        DisplayColumn::new(ALSA, "Avg. Pick Turn"),
        DisplayColumn::new(COLOR, "Color"),
        DisplayColumn::new(RARITY, "Rarity"),
        DisplayColumn::new(GAMES_PLAYED_PCT, "Games Played %"),
        DisplayColumn::new(GIH_WR, "WinRate In Hand (%)"),
        DisplayColumn::new(IWD, " (% WR H - % WR not H)"),
    ]
}

/// Columns of the two-color win rate table.
pub fn summary_display_columns() -> Vec<DisplayColumn> {
    vec![
        DisplayColumn::new(COLOR, "Name (Colors)"),
        DisplayColumn::new(WIN_RATE, "Win Rate").with_format(CellFormat::Percent),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_column_matches_key_or_heading() {
        let column = DisplayColumn::new(GIH_WR, "WinRate In Hand (%)");
        assert!(column.matches("gih wr"));
        assert!(column.matches("WinRate In Hand (%)"));
        assert!(!column.matches("ALSA"));

        let iwd = &card_display_columns()[6];
        assert!(iwd.matches("(% WR H - % WR not H)"));
    }

    #[test]
    fn percent_format_only_applies_to_numbers() {
        let column = DisplayColumn::new(WIN_RATE, "Win Rate").with_format(CellFormat::Percent);
        assert_eq!(column.render(Some(&CellValue::Numeric(59.6))), "59.6%");
        assert_eq!(column.render(Some(&CellValue::Missing)), "-");
        assert_eq!(column.render(None), "-");
    }
}
