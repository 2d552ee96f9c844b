//! Field to anchor lookup.
//!
//! Fields sit on a circle, field 1 at twelve o'clock and numbering clockwise.
//! Fields on the right half (1-8) hang off the right edge, fields on the left
//! half (9-16) off the left edge, so sprites stay put when the board is
//! resized horizontally.

use serde::{Deserialize, Serialize};

use super::anchor::{
    Anchor,
    HorizontalOffset::{Left, Right},
};
use crate::core::{BoardResult, Field, FIELD_COUNT};

/// Which lookup table to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnchorTable {
    /// Anchors for placed tile sprites (9% wide, centred on the field).
    Tile,
    /// Anchors for placement targets and camels (6% wide).
    Target,
}

const TILE_ANCHORS: [Anchor; FIELD_COUNT as usize] = [
    Anchor::new(5.5, Right(45.5)),
    Anchor::new(8.5, Right(30.2)),
    Anchor::new(17.2, Right(17.2)),
    Anchor::new(30.2, Right(8.5)),
    Anchor::new(45.5, Right(5.5)),
    Anchor::new(60.8, Right(8.5)),
    Anchor::new(73.8, Right(17.2)),
    Anchor::new(82.5, Right(30.2)),
    Anchor::new(85.5, Left(45.5)),
    Anchor::new(82.5, Left(30.2)),
    Anchor::new(73.8, Left(17.2)),
    Anchor::new(60.8, Left(8.5)),
    Anchor::new(45.5, Left(5.5)),
    Anchor::new(30.2, Left(8.5)),
    Anchor::new(17.2, Left(17.2)),
    Anchor::new(8.5, Left(30.2)),
];

const TARGET_ANCHORS: [Anchor; FIELD_COUNT as usize] = [
    Anchor::new(7.0, Right(47.0)),
    Anchor::new(10.0, Right(31.7)),
    Anchor::new(18.7, Right(18.7)),
    Anchor::new(31.7, Right(10.0)),
    Anchor::new(47.0, Right(7.0)),
    Anchor::new(62.3, Right(10.0)),
    Anchor::new(75.3, Right(18.7)),
    Anchor::new(84.0, Right(31.7)),
    Anchor::new(87.0, Left(47.0)),
    Anchor::new(84.0, Left(31.7)),
    Anchor::new(75.3, Left(18.7)),
    Anchor::new(62.3, Left(10.0)),
    Anchor::new(47.0, Left(7.0)),
    Anchor::new(31.7, Left(10.0)),
    Anchor::new(18.7, Left(18.7)),
    Anchor::new(10.0, Left(31.7)),
];

/// Look up the anchor of a field in the given table.
#[must_use]
pub fn resolve(table: AnchorTable, field: Field) -> Anchor {
    match table {
        AnchorTable::Tile => TILE_ANCHORS[field.index()],
        AnchorTable::Target => TARGET_ANCHORS[field.index()],
    }
}

/// Anchor for a tile sprite.
#[must_use]
pub fn tile_anchor(field: Field) -> Anchor {
    resolve(AnchorTable::Tile, field)
}

/// Anchor for a placement target.
#[must_use]
pub fn target_anchor(field: Field) -> Anchor {
    resolve(AnchorTable::Target, field)
}

/// Anchor for the camel at `stack_level` (0 = bottom) on a field.
#[must_use]
pub fn camel_anchor(field: Field, stack_level: usize, stack_step: f32) -> Anchor {
    target_anchor(field).raised(stack_level as f32 * stack_step)
}

/// Look up a raw field number, failing for anything outside 1-16.
pub fn resolve_raw(table: AnchorTable, raw: u8) -> BoardResult<Anchor> {
    Ok(resolve(table, Field::new(raw)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BoardError;

    fn field(n: u8) -> Field {
        Field::new(n).unwrap()
    }

    #[test]
    fn test_every_field_resolves_in_bounds() {
        for table in [AnchorTable::Tile, AnchorTable::Target] {
            for f in Field::all() {
                let anchor = resolve(table, f);
                let side = anchor.left().or(anchor.right()).unwrap();
                assert!((0.0..=100.0).contains(&anchor.top), "{f} {table:?}");
                assert!((0.0..=100.0).contains(&side), "{f} {table:?}");
            }
        }
    }

    #[test]
    fn test_sides_split_by_half() {
        for f in Field::all() {
            let anchor = target_anchor(f);
            if f.raw() <= 8 {
                assert!(anchor.right().is_some(), "{f}");
            } else {
                assert!(anchor.left().is_some(), "{f}");
            }
        }
    }

    #[test]
    fn test_tables_differ() {
        for f in Field::all() {
            assert_ne!(tile_anchor(f), target_anchor(f), "{f}");
        }
    }

    #[test]
    fn test_anchors_are_distinct() {
        let anchors: Vec<Anchor> = Field::all().map(target_anchor).collect();
        for (i, a) in anchors.iter().enumerate() {
            for b in &anchors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_known_anchors() {
        assert_eq!(target_anchor(field(1)), Anchor::new(7.0, Right(47.0)));
        assert_eq!(tile_anchor(field(13)), Anchor::new(45.5, Left(5.5)));
    }

    #[test]
    fn test_camel_anchor_stacks_upwards() {
        let base = camel_anchor(field(5), 0, 2.5);
        let second = camel_anchor(field(5), 1, 2.5);
        assert_eq!(base, target_anchor(field(5)));
        assert_eq!(second.top, base.top - 2.5);
        assert_eq!(second.horizontal, base.horizontal);
    }

    #[test]
    fn test_resolve_raw_rejects_out_of_range() {
        assert!(resolve_raw(AnchorTable::Tile, 16).is_ok());
        assert!(matches!(
            resolve_raw(AnchorTable::Tile, 0),
            Err(BoardError::FieldOutOfRange(0))
        ));
        assert!(matches!(
            resolve_raw(AnchorTable::Target, 17),
            Err(BoardError::FieldOutOfRange(17))
        ));
    }
}
