//! Placement rule trait.

use crate::core::{BoardSnapshot, Field};

/// A single reason a field may be closed to new tiles.
///
/// ## Implementation Notes
///
/// - `excludes` must be pure: same field and board, same answer
/// - `name` is used in logs and in `PlacementEligibility::explain`
pub trait PlacementRule {
    /// Short identifier for this rule.
    fn name(&self) -> &'static str;

    /// Check whether this rule forbids placing a tile on `field`.
    fn excludes(&self, field: Field, board: &BoardSnapshot) -> bool;
}
