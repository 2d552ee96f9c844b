//! Core board types: fields, players, tiles, camels, snapshots, configuration.
//!
//! These are plain values. The rules and the view read them; only the host
//! application creates or changes them.

pub mod config;
pub mod error;
pub mod field;
pub mod player;
pub mod rng;
pub mod state;
pub mod tile;
pub mod token;

pub use config::BoardConfig;
pub use error::{BoardError, BoardResult};
pub use field::{Field, FIELD_COUNT};
pub use player::{PlayerId, TurnContext};
pub use rng::BoardRng;
pub use state::{parse_tiles, parse_tokens, BoardSnapshot};
pub use tile::{PlacedTile, SelectedTile, TileKind};
pub use token::{CamelColor, Token};
