//! Desert tiles: the tile a player holds and the tile committed to the board.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::BoardError;
use super::field::Field;
use super::player::PlayerId;

/// Which face of the desert tile is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileKind {
    /// Cheering side: a camel landing here moves one field forward.
    Oasis,
    /// Booing side: a camel landing here moves one field back.
    Mirage,
}

impl TileKind {
    /// Both faces.
    pub const ALL: [TileKind; 2] = [TileKind::Oasis, TileKind::Mirage];

    /// Human-readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            TileKind::Oasis => "oasis",
            TileKind::Mirage => "mirage",
        }
    }

    /// Single-character marker for text rendering.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            TileKind::Oasis => '+',
            TileKind::Mirage => '-',
        }
    }
}

impl FromStr for TileKind {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "oasis" | "o" | "+" => Ok(TileKind::Oasis),
            "mirage" | "m" | "-" => Ok(TileKind::Mirage),
            other => Err(BoardError::UnknownTileKind(other.to_string())),
        }
    }
}

impl std::fmt::Display for TileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A desert tile lying on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedTile {
    /// Face showing.
    pub kind: TileKind,
    /// Field the tile lies on.
    pub position: Field,
    /// Player who placed it.
    pub owner: PlayerId,
}

impl PlacedTile {
    /// Create a placed tile.
    #[must_use]
    pub const fn new(kind: TileKind, position: Field, owner: PlayerId) -> Self {
        Self { kind, position, owner }
    }
}

/// A tile the active player has picked up but not yet put down.
///
/// It carries no position; [`SelectedTile::place`] produces the
/// [`PlacedTile`] once a field has been chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectedTile {
    /// Face the player chose.
    pub kind: TileKind,
    /// Player holding the tile.
    pub owner: PlayerId,
}

impl SelectedTile {
    /// Create a selection.
    #[must_use]
    pub const fn new(kind: TileKind, owner: PlayerId) -> Self {
        Self { kind, owner }
    }

    /// Commit the selection to a field.
    #[must_use]
    pub const fn place(self, position: Field) -> PlacedTile {
        PlacedTile::new(self.kind, position, self.owner)
    }
}
