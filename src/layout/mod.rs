//! Mapping from fields to 2-D render anchors.
//!
//! Anchors are expressed in percent of the board's bounding box, the way an
//! absolutely positioned overlay is laid out: a vertical offset from the top
//! and exactly one horizontal offset, from either the left or the right edge.

pub mod anchor;
pub mod resolver;

pub use anchor::{Anchor, HorizontalOffset};
pub use resolver::{camel_anchor, resolve, resolve_raw, target_anchor, tile_anchor, AnchorTable};
