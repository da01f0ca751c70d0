//! The five-color wheel and its ten two-color archetypes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// One of the five colors of the wheel, in wheel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Blue,
    Black,
    Red,
    Green,
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::White,
        Color::Blue,
        Color::Black,
        Color::Red,
        Color::Green,
    ];

    pub fn code(self) -> char {
        match self {
            Color::White => 'W',
            Color::Blue => 'U',
            Color::Black => 'B',
            Color::Red => 'R',
            Color::Green => 'G',
        }
    }

    /// Selector label, e.g. `White (W)`.
    pub fn label(self) -> &'static str {
        match self {
            Color::White => "White (W)",
            Color::Blue => "Blue (U)",
            Color::Black => "Black (B)",
            Color::Red => "Red (R)",
            Color::Green => "Green (G)",
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|color| color.code() == code.to_ascii_uppercase())
    }

    /// The four archetypes that include this color.
    pub fn archetypes(self) -> Vec<Archetype> {
        Archetype::ALL
            .into_iter()
            .filter(|archetype| archetype.contains(self))
            .collect()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Color {
    type Err = ModelError;

    /// Accepts a one-letter code, a color name, or a selector label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(code), None) = (chars.next(), chars.next())
            && let Some(color) = Color::from_code(code)
        {
            return Ok(color);
        }
        Color::ALL
            .into_iter()
            .find(|color| {
                color.label().eq_ignore_ascii_case(trimmed)
                    || color
                        .label()
                        .split(' ')
                        .next()
                        .is_some_and(|name| name.eq_ignore_ascii_case(trimmed))
            })
            .ok_or_else(|| ModelError::UnknownColor(s.to_string()))
    }
}

/// A two-color draft archetype, identified by its two-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Archetype {
    Azorius,
    Orzhov,
    Boros,
    Selesnya,
    Dimir,
    Izzet,
    Simic,
    Rakdos,
    Golgari,
    Gruul,
}

impl Archetype {
    pub const ALL: [Archetype; 10] = [
        Archetype::Azorius,
        Archetype::Orzhov,
        Archetype::Boros,
        Archetype::Selesnya,
        Archetype::Dimir,
        Archetype::Izzet,
        Archetype::Simic,
        Archetype::Rakdos,
        Archetype::Golgari,
        Archetype::Gruul,
    ];

    /// Code used in data file names, written in wheel order (`WR`, not `RW`).
    pub fn code(self) -> &'static str {
        match self {
            Archetype::Azorius => "WU",
            Archetype::Orzhov => "WB",
            Archetype::Boros => "WR",
            Archetype::Selesnya => "WG",
            Archetype::Dimir => "UB",
            Archetype::Izzet => "UR",
            Archetype::Simic => "UG",
            Archetype::Rakdos => "BR",
            Archetype::Golgari => "BG",
            Archetype::Gruul => "RG",
        }
    }

    /// Display name as it appears in the color statistics file.
    pub fn display_name(self) -> &'static str {
        match self {
            Archetype::Azorius => "Azorius (WU)",
            Archetype::Orzhov => "Orzhov (WB)",
            Archetype::Boros => "Boros (RW)",
            Archetype::Selesnya => "Selesnya (GW)",
            Archetype::Dimir => "Dimir (UB)",
            Archetype::Izzet => "Izzet (UR)",
            Archetype::Simic => "Simic (GU)",
            Archetype::Rakdos => "Rakdos (BR)",
            Archetype::Golgari => "Golgari (BG)",
            Archetype::Gruul => "Gruul (RG)",
        }
    }

    pub fn colors(self) -> (Color, Color) {
        match self {
            Archetype::Azorius => (Color::White, Color::Blue),
            Archetype::Orzhov => (Color::White, Color::Black),
            Archetype::Boros => (Color::White, Color::Red),
            Archetype::Selesnya => (Color::White, Color::Green),
            Archetype::Dimir => (Color::Blue, Color::Black),
            Archetype::Izzet => (Color::Blue, Color::Red),
            Archetype::Simic => (Color::Blue, Color::Green),
            Archetype::Rakdos => (Color::Black, Color::Red),
            Archetype::Golgari => (Color::Black, Color::Green),
            Archetype::Gruul => (Color::Red, Color::Green),
        }
    }

    pub fn contains(self, color: Color) -> bool {
        let (first, second) = self.colors();
        first == color || second == color
    }

    pub fn from_display_name(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        Archetype::ALL
            .into_iter()
            .find(|archetype| archetype.display_name() == trimmed)
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Archetype {
    type Err = ModelError;

    /// Parses a two-letter code in either letter order (`WR` or `RW`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let colors: Vec<Color> = s.trim().chars().filter_map(Color::from_code).collect();
        if colors.len() != 2 || s.trim().chars().count() != 2 || colors[0] == colors[1] {
            return Err(ModelError::UnknownArchetype(s.to_string()));
        }
        Archetype::ALL
            .into_iter()
            .find(|archetype| archetype.contains(colors[0]) && archetype.contains(colors[1]))
            .ok_or_else(|| ModelError::UnknownArchetype(s.to_string()))
    }
}

/// What the user picked in the color selectors; drives which file is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    AllColors,
    Color(Color),
    Archetype(Archetype),
}

impl Selection {
    pub fn archetype(self) -> Option<Archetype> {
        match self {
            Selection::Archetype(archetype) => Some(archetype),
            Selection::AllColors | Selection::Color(_) => None,
        }
    }
}
