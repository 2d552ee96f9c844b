//! Desert-tile placement rules.
//!
//! A field accepts a new tile unless one of the rules excludes it:
//! - `AdjacencyRule`: a tile lies on the field or on a neighbouring field
//! - `OccupancyRule`: a camel stands on the field
//!
//! The free functions are the rules themselves. `PlacementRule` and
//! `PlacementEligibility` wrap them for callers that want to compose or
//! explain rule sets.

pub mod adjacency;
pub mod eligibility;
pub mod occupancy;
pub mod rule;

pub use adjacency::{is_adjacent_to_any_tile, tile_blocks, AdjacencyRule};
pub use eligibility::{eligible_fields, is_eligible, FieldSet, PlacementEligibility};
pub use occupancy::{is_occupied_by_token, OccupancyRule};
pub use rule::PlacementRule;
