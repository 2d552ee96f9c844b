//! Camels, the tokens that move around the track.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::BoardError;
use super::field::Field;

/// Racing camel, identified by colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CamelColor {
    Blue,
    Green,
    Orange,
    Yellow,
    White,
}

impl CamelColor {
    /// All camels in the race.
    pub const ALL: [CamelColor; 5] = [
        CamelColor::Blue,
        CamelColor::Green,
        CamelColor::Orange,
        CamelColor::Yellow,
        CamelColor::White,
    ];

    /// Human-readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            CamelColor::Blue => "blue",
            CamelColor::Green => "green",
            CamelColor::Orange => "orange",
            CamelColor::Yellow => "yellow",
            CamelColor::White => "white",
        }
    }

    /// Upper-case initial used by the text renderer.
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            CamelColor::Blue => 'B',
            CamelColor::Green => 'G',
            CamelColor::Orange => 'O',
            CamelColor::Yellow => 'Y',
            CamelColor::White => 'W',
        }
    }
}

impl FromStr for CamelColor {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|camel| {
                camel.label() == wanted
                    || (wanted.len() == 1 && wanted.starts_with(camel.initial().to_ascii_lowercase()))
            })
            .ok_or(BoardError::UnknownCamel(wanted))
    }
}

impl std::fmt::Display for CamelColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A camel standing on a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Which camel.
    pub camel: CamelColor,
    /// Field it stands on.
    pub position: Field,
}

impl Token {
    /// Create a token.
    #[must_use]
    pub const fn new(camel: CamelColor, position: Field) -> Self {
        Self { camel, position }
    }
}
