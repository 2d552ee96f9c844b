//! Render anchor types.

use serde::{Deserialize, Serialize};

/// Horizontal half of an anchor. Only one edge is ever set; the other is
/// left to the renderer ("auto").
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalOffset {
    /// Offset from the left edge, in percent.
    Left(f32),
    /// Offset from the right edge, in percent.
    Right(f32),
}

/// Position of a sprite's top-left corner relative to the board.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    /// Offset from the top edge, in percent.
    pub top: f32,
    /// Offset from the left or the right edge.
    pub horizontal: HorizontalOffset,
}

impl Anchor {
    /// Create an anchor.
    #[must_use]
    pub const fn new(top: f32, horizontal: HorizontalOffset) -> Self {
        Self { top, horizontal }
    }

    /// Left offset, or `None` if the anchor hangs off the right edge.
    #[must_use]
    pub const fn left(&self) -> Option<f32> {
        match self.horizontal {
            HorizontalOffset::Left(v) => Some(v),
            HorizontalOffset::Right(_) => None,
        }
    }

    /// Right offset, or `None` if the anchor hangs off the left edge.
    #[must_use]
    pub const fn right(&self) -> Option<f32> {
        match self.horizontal {
            HorizontalOffset::Right(v) => Some(v),
            HorizontalOffset::Left(_) => None,
        }
    }

    /// Same anchor moved up by `delta` percent.
    #[must_use]
    pub fn raised(self, delta: f32) -> Self {
        Self {
            top: self.top - delta,
            ..self
        }
    }

    /// Inline style for an absolutely positioned element.
    #[must_use]
    pub fn css(&self) -> String {
        let fmt = |v: Option<f32>| v.map_or_else(|| "auto".to_string(), |v| format!("{v}%"));
        format!(
            "top: {}%; left: {}; right: {}",
            self.top,
            fmt(self.left()),
            fmt(self.right())
        )
    }
}
