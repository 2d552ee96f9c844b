//! Combining the rules into the set of fields that accept a new tile.
//!
//! Results are recomputed on every call. There are only 16 fields, and the
//! board changes between renders, so there is nothing worth caching.

use smallvec::SmallVec;
use tracing::{debug, instrument};

use super::adjacency::{is_adjacent_to_any_tile, AdjacencyRule};
use super::occupancy::{is_occupied_by_token, OccupancyRule};
use super::rule::PlacementRule;
use crate::core::{BoardSnapshot, Field, PlacedTile, Token, FIELD_COUNT};

/// Ordered set of fields. Never spills: the ring has 16 fields.
pub type FieldSet = SmallVec<[Field; FIELD_COUNT as usize]>;

/// Check whether a tile may be placed on `field`.
pub fn is_eligible<'a, T, K>(field: Field, tiles: T, tokens: K) -> bool
where
    T: IntoIterator<Item = &'a PlacedTile>,
    K: IntoIterator<Item = &'a Token>,
{
    !is_adjacent_to_any_tile(field, tiles) && !is_occupied_by_token(field, tokens)
}

/// Fields that accept a new tile, in ascending order.
///
/// A field is included iff no tile lies on it or on a neighbouring field and
/// no camel stands on it.
#[instrument(level = "debug", skip_all)]
pub fn eligible_fields<'a, T, K>(tiles: T, tokens: K) -> FieldSet
where
    T: IntoIterator<Item = &'a PlacedTile> + Copy,
    K: IntoIterator<Item = &'a Token> + Copy,
{
    let fields: FieldSet = Field::all()
        .filter(|&field| is_eligible(field, tiles, tokens))
        .collect();
    debug!(count = fields.len(), ?fields, "computed eligible fields");
    fields
}

/// A composable set of placement rules.
///
/// `PlacementEligibility::standard()` holds the adjacency and occupancy
/// rules and gives the same answers as [`eligible_fields`]. Extra rules can
/// be layered on with [`with_rule`](Self::with_rule).
pub struct PlacementEligibility {
    rules: Vec<Box<dyn PlacementRule>>,
}

impl PlacementEligibility {
    /// Create an empty rule set (every field is eligible).
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The game's rule set: adjacency, then occupancy.
    #[must_use]
    pub fn standard() -> Self {
        Self::new().with_rule(AdjacencyRule).with_rule(OccupancyRule)
    }

    /// Add a rule.
    #[must_use]
    pub fn with_rule(mut self, rule: impl PlacementRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Names of the rules, in evaluation order.
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|r| r.name())
    }

    /// Check whether a tile may be placed on `field`.
    #[must_use]
    pub fn is_eligible(&self, field: Field, board: &BoardSnapshot) -> bool {
        !self.rules.iter().any(|r| r.excludes(field, board))
    }

    /// Fields that accept a new tile, in ascending order.
    #[instrument(level = "debug", skip_all)]
    pub fn eligible_fields(&self, board: &BoardSnapshot) -> FieldSet {
        let fields: FieldSet = Field::all()
            .filter(|&field| self.is_eligible(field, board))
            .collect();
        debug!(count = fields.len(), ?fields, "computed eligible fields");
        fields
    }

    /// Names of the rules that exclude `field`; empty if it is eligible.
    #[must_use]
    pub fn explain(&self, field: Field, board: &BoardSnapshot) -> SmallVec<[&'static str; 2]> {
        self.rules
            .iter()
            .filter(|r| r.excludes(field, board))
            .map(|r| r.name())
            .collect()
    }
}

impl Default for PlacementEligibility {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for PlacementEligibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.rule_names()).finish()
    }
}
