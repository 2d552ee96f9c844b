//! Outbound channel from the view to the host.

use crate::core::PlacedTile;

/// Receives the view's placement requests and warnings.
///
/// The host owns the board; the view only proposes. For one successful click
/// the view calls `add_desert_tile` then `on_tile_placed`, each exactly once.
/// For a click outside the local player's turn it calls `warn` exactly once
/// and nothing else.
pub trait PlacementListener {
    /// Commit a tile to the board.
    fn add_desert_tile(&mut self, tile: PlacedTile);

    /// The selection has been used up and should be cleared.
    fn on_tile_placed(&mut self, tile: &PlacedTile);

    /// Show a non-blocking warning to the user.
    fn warn(&mut self, message: &str);
}

/// Adapts three closures to [`PlacementListener`].
///
/// ```
/// use camel_ring::view::{Callbacks, PlacementListener};
///
/// let mut warnings = Vec::new();
/// let mut listener = Callbacks::new(|_| {}, |_| {}, |msg: &str| warnings.push(msg.to_string()));
/// listener.warn("not now");
/// drop(listener);
/// assert_eq!(warnings, ["not now"]);
/// ```
pub struct Callbacks<A, P, W> {
    add_desert_tile: A,
    on_tile_placed: P,
    warn: W,
}

impl<A, P, W> Callbacks<A, P, W>
where
    A: FnMut(PlacedTile),
    P: FnMut(&PlacedTile),
    W: FnMut(&str),
{
    /// Bundle the three callbacks.
    pub fn new(add_desert_tile: A, on_tile_placed: P, warn: W) -> Self {
        Self {
            add_desert_tile,
            on_tile_placed,
            warn,
        }
    }
}

impl<A, P, W> PlacementListener for Callbacks<A, P, W>
where
    A: FnMut(PlacedTile),
    P: FnMut(&PlacedTile),
    W: FnMut(&str),
{
    fn add_desert_tile(&mut self, tile: PlacedTile) {
        (self.add_desert_tile)(tile);
    }

    fn on_tile_placed(&mut self, tile: &PlacedTile) {
        (self.on_tile_placed)(tile);
    }

    fn warn(&mut self, message: &str) {
        (self.warn)(message);
    }
}
