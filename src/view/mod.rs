//! Board view: rendering frames and handling placement clicks.
//!
//! The view owns no game state. Every call receives the snapshot, the
//! current selection and the turn context from the host, and reports back
//! through a [`PlacementListener`]. Frames are plain data so any front end
//! (web overlay, TUI, the bundled text renderer) can draw them.

pub mod board_view;
pub mod frame;
pub mod listener;
pub mod text;

pub use board_view::{BoardView, PlacementOutcome, ViewState};
pub use frame::{BoardFrame, CamelSprite, PlacementTarget, TileSprite};
pub use listener::{Callbacks, PlacementListener};
pub use text::render_ascii;
