//! # camel-ring
//!
//! Desert-tile placement for a 16-field camel racing track.
//!
//! ## Design Principles
//!
//! 1. **Pure rules**: eligibility is a function of the tiles and camels passed
//!    in. Nothing is cached and nothing is read from shared state.
//!
//! 2. **Host owns the board**: the view proposes placements through a
//!    `PlacementListener`; the host decides what actually changes.
//!
//! 3. **Typed fields**: a `Field` is always in 1..=16, so rule and layout
//!    lookups cannot go out of range.
//!
//! ## Modules
//!
//! - `core`: fields, players, tiles, camels, snapshots, configuration, errors
//! - `layout`: field to render-anchor tables
//! - `rules`: adjacency and occupancy rules, eligible-field computation
//! - `view`: frame rendering, placement click handling, text renderer
//! - `host`: in-memory state owner used by the CLI and tests
//! - `setup`: seeded random boards

pub mod core;
pub mod host;
pub mod layout;
pub mod rules;
pub mod setup;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, BoardError, BoardResult, BoardRng, BoardSnapshot, CamelColor, Field, PlacedTile,
    PlayerId, SelectedTile, TileKind, Token, TurnContext, FIELD_COUNT,
};

pub use crate::layout::{resolve, target_anchor, tile_anchor, Anchor, AnchorTable, HorizontalOffset};

pub use crate::rules::{
    eligible_fields, is_adjacent_to_any_tile, is_occupied_by_token, FieldSet, PlacementEligibility,
    PlacementRule,
};

pub use crate::view::{
    render_ascii, BoardFrame, BoardView, Callbacks, PlacementListener, PlacementOutcome, ViewState,
};

pub use crate::host::Table;
pub use crate::setup::random_board;
