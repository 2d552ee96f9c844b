//! Board snapshot: what is lying on the track right now.
//!
//! ## BoardSnapshot
//!
//! Tiles and camels as handed over by the game-state owner. The core only
//! reads snapshots. Uses `im` persistent vectors so that hosts can keep an
//! undo history and pass a fresh copy to every render in O(1).
//!
//! ## Text notation
//!
//! Hosts and the CLI describe boards with a compact notation:
//! - tiles: `1:oasis,2:mirage@1` (field, kind, optional owner; owner
//!   defaults to the tile's position in the list)
//! - camels: `blue:10,green:10` (listed bottom of the stack first)

use im::Vector;
use serde::{Deserialize, Serialize};

use super::error::{BoardError, BoardResult};
use super::field::Field;
use super::player::PlayerId;
use super::tile::{PlacedTile, TileKind};
use super::token::{CamelColor, Token};

/// Tiles and camels on the track.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Tiles in placement order.
    pub tiles: Vector<PlacedTile>,
    /// Camels in stack order: earlier entries on the same field are lower.
    pub tokens: Vector<Token>,
}

impl BoardSnapshot {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from plain collections.
    pub fn from_parts(
        tiles: impl IntoIterator<Item = PlacedTile>,
        tokens: impl IntoIterator<Item = Token>,
    ) -> Self {
        Self {
            tiles: tiles.into_iter().collect(),
            tokens: tokens.into_iter().collect(),
        }
    }

    /// Add a tile.
    #[must_use]
    pub fn with_tile(mut self, tile: PlacedTile) -> Self {
        self.tiles.push_back(tile);
        self
    }

    /// Add a camel on top of whatever already stands on its field.
    #[must_use]
    pub fn with_token(mut self, token: Token) -> Self {
        self.tokens.push_back(token);
        self
    }

    /// Get the tile lying on a field, if any.
    ///
    /// At most one tile per field is expected; if several were handed in, the
    /// first one placed is returned.
    #[must_use]
    pub fn tile_at(&self, field: Field) -> Option<&PlacedTile> {
        self.tiles.iter().find(|t| t.position == field)
    }

    /// Camels on a field, bottom of the stack first.
    pub fn camels_at(&self, field: Field) -> impl Iterator<Item = CamelColor> + '_ {
        self.tokens
            .iter()
            .filter(move |t| t.position == field)
            .map(|t| t.camel)
    }

    /// Check if the board holds nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty() && self.tokens.is_empty()
    }

    /// Parse a snapshot from the tile and camel notation.
    pub fn parse(tiles: &str, camels: &str) -> BoardResult<Self> {
        Ok(Self::from_parts(parse_tiles(tiles)?, parse_tokens(camels)?))
    }
}

/// Parse `field:kind[@owner]` entries separated by commas.
pub fn parse_tiles(notation: &str) -> BoardResult<Vec<PlacedTile>> {
    entries(notation)
        .enumerate()
        .map(|(i, entry)| {
            let (field, rest) = split_pair(entry)?;
            let (kind, owner) = match rest.split_once('@') {
                Some((kind, owner)) => (kind, owner.parse::<PlayerId>()?),
                None => (rest, PlayerId::new(u8::try_from(i).unwrap_or(u8::MAX))),
            };
            Ok(PlacedTile::new(kind.parse::<TileKind>()?, field.parse()?, owner))
        })
        .collect()
}

/// Parse `camel:field` entries separated by commas.
pub fn parse_tokens(notation: &str) -> BoardResult<Vec<Token>> {
    entries(notation)
        .map(|entry| {
            let (camel, field) = split_pair(entry)?;
            Ok(Token::new(camel.parse()?, field.parse()?))
        })
        .collect()
}

fn entries(notation: &str) -> impl Iterator<Item = &str> {
    notation.split(',').map(str::trim).filter(|s| !s.is_empty())
}

fn split_pair(entry: &str) -> BoardResult<(&str, &str)> {
    entry
        .split_once(':')
        .ok_or_else(|| BoardError::Malformed(format!("expected `a:b`, got {entry:?}")))
}
