//! Seeded random boards for demos and benchmarks.
//!
//! Follows the opening of a race: camels start on fields 1-3 in a shuffled
//! order, then each player puts a desert tile on a random field that the
//! placement rules allow.

use tracing::{debug, instrument};

use crate::core::{BoardRng, BoardSnapshot, CamelColor, Field, PlacedTile, PlayerId, TileKind, Token};
use crate::rules::eligible_fields;

/// Camels start somewhere on the first three fields.
const START_FIELDS: usize = 3;

/// Build a random board.
///
/// `camels` is capped at the number of camel colours. A player whose tile no
/// longer fits anywhere is skipped.
#[instrument(skip(rng), fields(seed = rng.seed()))]
pub fn random_board(rng: &mut BoardRng, players: usize, camels: usize) -> BoardSnapshot {
    let mut colors = CamelColor::ALL;
    rng.shuffle(&mut colors);

    let mut board = BoardSnapshot::new();
    for &camel in colors.iter().take(camels) {
        if let Some(&field) = rng.pick(&Field::ALL[..START_FIELDS]) {
            board = board.with_token(Token::new(camel, field));
        }
    }

    for player in PlayerId::all(players) {
        let open = eligible_fields(&board.tiles, &board.tokens);
        let Some(&field) = rng.pick(&open) else {
            debug!(%player, "no room left for a tile");
            continue;
        };
        let kind = if rng.flip() {
            TileKind::Oasis
        } else {
            TileKind::Mirage
        };
        board = board.with_tile(PlacedTile::new(kind, field, player));
    }

    board
}
