//! Board view configuration.
//!
//! Everything here is presentation: the placement rules themselves have no
//! knobs. Hosts build a `BoardConfig` with the `with_*` builders or load one
//! from a TOML file:
//!
//! ```toml
//! stack_step = 3.0
//! not_your_turn_message = "Wait for your turn"
//! show_targets = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{BoardError, BoardResult};

/// Board view configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Vertical distance, in percent of board height, between camels stacked
    /// on the same field.
    pub stack_step: f32,

    /// Text sent through the warning channel when someone clicks a target
    /// outside their turn.
    pub not_your_turn_message: String,

    /// Whether placement targets are included in rendered frames while a tile
    /// is selected. Turning this off hides the overlay without affecting the
    /// placement handler.
    pub show_targets: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            stack_step: 2.5,
            not_your_turn_message: "It's not your turn!".to_string(),
            show_targets: true,
        }
    }
}

impl BoardConfig {
    /// Set the camel stacking distance.
    #[must_use]
    pub fn with_stack_step(mut self, step: f32) -> Self {
        self.stack_step = step;
        self
    }

    /// Set the not-your-turn warning text.
    #[must_use]
    pub fn with_not_your_turn_message(mut self, message: impl Into<String>) -> Self {
        self.not_your_turn_message = message.into();
        self
    }

    /// Show or hide the placement overlay.
    #[must_use]
    pub fn with_targets(mut self, show: bool) -> Self {
        self.show_targets = show;
        self
    }

    /// Parse a config from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> BoardResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load a config from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> BoardResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| BoardError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&source)
    }
}
