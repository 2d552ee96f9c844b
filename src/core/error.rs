//! Error type shared by every parsing and validation boundary.
//!
//! Rule evaluation itself never fails: once a value is a [`Field`](super::Field)
//! it is in range. Errors only arise when raw input (integers, strings, config
//! files) is turned into board types.

use thiserror::Error;

/// Errors raised while building board values from raw input.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Field index out of range: {0} (expected 1-16)")]
    FieldOutOfRange(i64),

    #[error("Unknown tile kind: {0}")]
    UnknownTileKind(String),

    #[error("Unknown camel: {0}")]
    UnknownCamel(String),

    #[error("Malformed board description: {0}")]
    Malformed(String),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias used across the crate.
pub type BoardResult<T> = Result<T, BoardError>;
