//! The board view: frames in, placement requests out.
//!
//! ## States
//!
//! - `Idle`: nothing selected, no overlay
//! - `Selecting`: a tile is selected; eligible fields are shown as targets
//!
//! A click on a target either places the tile (back to `Idle` once the host
//! clears the selection) or, outside the local player's turn, is rejected with
//! a warning and the selection stays.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::frame::{BoardFrame, CamelSprite, PlacementTarget, TileSprite};
use super::listener::PlacementListener;
use crate::core::{BoardConfig, BoardSnapshot, Field, PlacedTile, SelectedTile, TurnContext};
use crate::layout::{camel_anchor, target_anchor, tile_anchor};
use crate::rules::PlacementEligibility;

/// Where the view is in a placement attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewState {
    /// No tile selected.
    Idle,
    /// A tile is selected and waiting for a field.
    Selecting(SelectedTile),
}

impl ViewState {
    /// Derive the state from the host's selection.
    #[must_use]
    pub fn from_selection(selection: Option<&SelectedTile>) -> Self {
        selection.map_or(ViewState::Idle, |s| ViewState::Selecting(*s))
    }
}

/// What a click on a placement target led to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// The tile was handed to the host.
    Placed(PlacedTile),
    /// Not the local player's turn; a warning was sent.
    NotYourTurn,
    /// Nothing was selected; ignored.
    NothingSelected,
}

/// Renders the ring and turns clicks into placement requests.
#[derive(Debug, Default)]
pub struct BoardView {
    config: BoardConfig,
    eligibility: PlacementEligibility,
}

impl BoardView {
    /// Create a view with the standard placement rules.
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            eligibility: PlacementEligibility::standard(),
        }
    }

    /// Replace the rule set used for the overlay.
    #[must_use]
    pub fn with_eligibility(mut self, eligibility: PlacementEligibility) -> Self {
        self.eligibility = eligibility;
        self
    }

    /// Get the view configuration.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Get the placement rules.
    #[must_use]
    pub fn eligibility(&self) -> &PlacementEligibility {
        &self.eligibility
    }

    /// Build the frame for the current board and selection.
    #[instrument(level = "debug", skip_all, fields(tiles = board.tiles.len(), camels = board.tokens.len()))]
    pub fn render(&self, board: &BoardSnapshot, selection: Option<&SelectedTile>) -> BoardFrame {
        let state = ViewState::from_selection(selection);

        let tiles = board
            .tiles
            .iter()
            .map(|&tile| TileSprite {
                tile,
                anchor: tile_anchor(tile.position),
            })
            .collect();

        let mut levels: FxHashMap<Field, usize> = FxHashMap::default();
        let camels = board
            .tokens
            .iter()
            .map(|token| {
                let level = levels.entry(token.position).or_insert(0);
                let sprite = CamelSprite {
                    camel: token.camel,
                    field: token.position,
                    stack_level: *level,
                    anchor: camel_anchor(token.position, *level, self.config.stack_step),
                };
                *level += 1;
                sprite
            })
            .collect();

        let targets = match state {
            ViewState::Selecting(_) if self.config.show_targets => self
                .eligibility
                .eligible_fields(board)
                .into_iter()
                .map(|field| PlacementTarget {
                    field,
                    anchor: target_anchor(field),
                })
                .collect(),
            _ => Vec::new(),
        };

        BoardFrame {
            state,
            tiles,
            camels,
            targets,
        }
    }

    /// Handle a click on the placement target at `field`.
    ///
    /// The turn check comes first: outside the local player's turn the click
    /// only produces a warning, whether or not a tile is selected.
    #[instrument(skip(self, listener))]
    pub fn handle_tile_placement(
        &self,
        field: Field,
        selection: Option<&SelectedTile>,
        turn: &TurnContext,
        listener: &mut impl PlacementListener,
    ) -> PlacementOutcome {
        if !turn.is_local_turn() {
            warn!(acting = %turn.acting, local = %turn.local, "placement attempted out of turn");
            listener.warn(&self.config.not_your_turn_message);
            return PlacementOutcome::NotYourTurn;
        }

        let Some(selected) = selection else {
            debug!("placement click without a selected tile");
            return PlacementOutcome::NothingSelected;
        };

        let tile = selected.place(field);
        info!(kind = %tile.kind, owner = %tile.owner, "placing desert tile");
        listener.add_desert_tile(tile);
        listener.on_tile_placed(&tile);
        PlacementOutcome::Placed(tile)
    }
}
