//! In-memory board state owner.

use im::Vector;
use tracing::{debug, info};

use crate::core::{BoardSnapshot, PlacedTile, PlayerId, SelectedTile, TileKind, TurnContext};
use crate::view::PlacementListener;

#[derive(Clone, Debug)]
struct Checkpoint {
    board: BoardSnapshot,
    selection: Option<SelectedTile>,
}

/// Board state, selection and turn for one seat at the table.
#[derive(Clone, Debug)]
pub struct Table {
    board: BoardSnapshot,
    selection: Option<SelectedTile>,
    turn: TurnContext,
    warnings: Vec<String>,
    history: Vector<Checkpoint>,
}

impl Table {
    /// Sit down at a board as `local`, with `acting` to move.
    #[must_use]
    pub fn new(board: BoardSnapshot, turn: TurnContext) -> Self {
        Self {
            board,
            selection: None,
            turn,
            warnings: Vec::new(),
            history: Vector::new(),
        }
    }

    /// Get the current board.
    #[must_use]
    pub fn board(&self) -> &BoardSnapshot {
        &self.board
    }

    /// Get the current selection.
    #[must_use]
    pub fn selection(&self) -> Option<&SelectedTile> {
        self.selection.as_ref()
    }

    /// Get the turn context.
    #[must_use]
    pub fn turn(&self) -> &TurnContext {
        &self.turn
    }

    /// Warnings received so far, oldest first.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Number of undo steps available.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Pick up the local player's tile with the given face up.
    pub fn select(&mut self, kind: TileKind) {
        self.selection = Some(SelectedTile::new(kind, self.turn.local));
    }

    /// Put the tile back without placing it.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Hand the turn to another player.
    pub fn pass_turn(&mut self, next: PlayerId) {
        debug!(from = %self.turn.acting, to = %next, "passing turn");
        self.turn.acting = next;
    }

    /// Revert the last placement. Returns `false` if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop_back() {
            Some(checkpoint) => {
                self.board = checkpoint.board;
                self.selection = checkpoint.selection;
                true
            }
            None => false,
        }
    }
}

impl PlacementListener for Table {
    fn add_desert_tile(&mut self, tile: PlacedTile) {
        self.history.push_back(Checkpoint {
            board: self.board.clone(),
            selection: self.selection,
        });
        info!(field = %tile.position, kind = %tile.kind, "tile added to board");
        self.board.tiles.push_back(tile);
    }

    fn on_tile_placed(&mut self, _tile: &PlacedTile) {
        self.selection = None;
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }
}
