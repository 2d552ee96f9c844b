//! Render output.

use serde::{Deserialize, Serialize};

use super::board_view::ViewState;
use crate::core::{CamelColor, Field, PlacedTile};
use crate::layout::Anchor;
use crate::rules::FieldSet;

/// A tile to draw.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TileSprite {
    pub tile: PlacedTile,
    pub anchor: Anchor,
}

/// A camel to draw.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CamelSprite {
    pub camel: CamelColor,
    pub field: Field,
    /// Height in the stack on its field, 0 = bottom.
    pub stack_level: usize,
    pub anchor: Anchor,
}

/// A clickable region for placing the selected tile.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacementTarget {
    pub field: Field,
    pub anchor: Anchor,
}

/// Everything needed to draw the board once.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardFrame {
    pub state: ViewState,
    pub tiles: Vec<TileSprite>,
    /// Camels in draw order: lower camels of a stack come first.
    pub camels: Vec<CamelSprite>,
    /// Empty unless a tile is selected.
    pub targets: Vec<PlacementTarget>,
}

impl BoardFrame {
    /// Get the placement target on a field, if one is shown.
    #[must_use]
    pub fn target_at(&self, field: Field) -> Option<&PlacementTarget> {
        self.targets.iter().find(|t| t.field == field)
    }

    /// Fields that currently show a placement target.
    #[must_use]
    pub fn target_fields(&self) -> FieldSet {
        self.targets.iter().map(|t| t.field).collect()
    }
}
