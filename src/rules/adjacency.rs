//! Tiles may not touch: a field next to (or under) an existing tile is closed.

use tracing::trace;

use super::rule::PlacementRule;
use crate::core::{BoardSnapshot, Field, PlacedTile};

/// Check whether a tile lying on `tile_position` keeps a new tile off `field`.
///
/// The two ends of the track are listed explicitly because the ring is cut
/// between 16 and 1 in index space:
/// - field 16 is blocked by tiles on 15, 16 and 1
/// - field 1 is blocked by tiles on 1, 2 and 16
/// - every other field is blocked by tiles at most one index away
#[must_use]
pub fn tile_blocks(field: Field, tile_position: Field) -> bool {
    let t = tile_position.raw();
    if field == Field::LAST {
        matches!(t, 15 | 16 | 1)
    } else if field == Field::FIRST {
        matches!(t, 1 | 2 | 16)
    } else {
        field.raw().abs_diff(t) <= 1
    }
}

/// Check whether any tile lies on `field` or next to it.
pub fn is_adjacent_to_any_tile<'a>(
    field: Field,
    tiles: impl IntoIterator<Item = &'a PlacedTile>,
) -> bool {
    tiles.into_iter().any(|tile| {
        let blocked = tile_blocks(field, tile.position);
        if blocked {
            trace!(%field, tile = %tile.position, "field blocked by tile");
        }
        blocked
    })
}

/// Rule form of [`is_adjacent_to_any_tile`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyRule;

impl PlacementRule for AdjacencyRule {
    fn name(&self) -> &'static str {
        "adjacent-tile"
    }

    fn excludes(&self, field: Field, board: &BoardSnapshot) -> bool {
        is_adjacent_to_any_tile(field, &board.tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlayerId, TileKind};

    fn field(n: u8) -> Field {
        Field::new(n).unwrap()
    }

    fn tile(n: u8) -> PlacedTile {
        PlacedTile::new(TileKind::Oasis, field(n), PlayerId::new(0))
    }

    fn blocked_by(tiles: &[PlacedTile]) -> Vec<u8> {
        Field::all()
            .filter(|f| is_adjacent_to_any_tile(*f, tiles))
            .map(Field::raw)
            .collect()
    }

    #[test]
    fn test_interior_tile() {
        assert_eq!(blocked_by(&[tile(8)]), vec![7, 8, 9]);
    }

    #[test]
    fn test_tile_on_last_field_wraps() {
        assert_eq!(blocked_by(&[tile(16)]), vec![1, 15, 16]);
    }

    #[test]
    fn test_tile_on_first_field_wraps() {
        assert_eq!(blocked_by(&[tile(1)]), vec![1, 2, 16]);
    }

    #[test]
    fn test_tile_blocks_own_field() {
        for f in Field::all() {
            assert!(tile_blocks(f, f), "{f}");
        }
    }

    #[test]
    fn test_no_tiles_blocks_nothing() {
        assert!(blocked_by(&[]).is_empty());
    }

    #[test]
    fn test_symmetric() {
        for a in Field::all() {
            for b in Field::all() {
                assert_eq!(tile_blocks(a, b), tile_blocks(b, a), "{a} {b}");
            }
        }
    }

    /// The explicit end-of-track cases agree with plain cyclic distance for
    /// every pair of fields.
    #[test]
    fn test_matches_cyclic_distance() {
        for f in Field::all() {
            for t in Field::all() {
                assert_eq!(tile_blocks(f, t), f.cyclic_distance(t) <= 1, "{f} {t}");
            }
        }
    }

    #[test]
    fn test_rule_reads_board_tiles() {
        let board = BoardSnapshot::new().with_tile(tile(5));
        assert!(AdjacencyRule.excludes(field(6), &board));
        assert!(!AdjacencyRule.excludes(field(7), &board));
        assert_eq!(AdjacencyRule.name(), "adjacent-tile");
    }
}
