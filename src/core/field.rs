//! Fields of the 16-slot race track.
//!
//! ## Ring layout
//!
//! Fields are numbered 1 to 16 and form a cycle: the successor of 16 is 1 and
//! the predecessor of 1 is 16. A `Field` can only be built for an index inside
//! that range, so every function taking a `Field` is total.
//!
//! ```
//! use camel_ring::core::Field;
//!
//! let last = Field::new(16).unwrap();
//! assert_eq!(last.next(), Field::FIRST);
//! assert_eq!(Field::FIRST.prev(), last);
//! assert!(Field::new(0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::BoardError;

/// Number of fields on the track.
pub const FIELD_COUNT: u8 = 16;

/// One of the 16 fields of the ring, 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Field(u8);

impl Field {
    /// Field 1, where the track starts.
    pub const FIRST: Field = Field(1);

    /// Field 16, the last field before the track wraps around.
    pub const LAST: Field = Field(FIELD_COUNT);

    /// Every field in ascending order.
    pub const ALL: [Field; FIELD_COUNT as usize] = [
        Field(1),
        Field(2),
        Field(3),
        Field(4),
        Field(5),
        Field(6),
        Field(7),
        Field(8),
        Field(9),
        Field(10),
        Field(11),
        Field(12),
        Field(13),
        Field(14),
        Field(15),
        Field(16),
    ];

    /// Create a field from its 1-based number.
    pub fn new(raw: u8) -> Result<Self, BoardError> {
        if (1..=FIELD_COUNT).contains(&raw) {
            Ok(Self(raw))
        } else {
            Err(BoardError::FieldOutOfRange(i64::from(raw)))
        }
    }

    /// Get the 1-based field number.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Get the 0-based index, for array lookups.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Iterate over all fields in ascending order.
    pub fn all() -> impl Iterator<Item = Field> {
        Self::ALL.into_iter()
    }

    /// The next field clockwise, wrapping 16 to 1.
    #[must_use]
    pub const fn next(self) -> Self {
        if self.0 == FIELD_COUNT {
            Self::FIRST
        } else {
            Self(self.0 + 1)
        }
    }

    /// The previous field, wrapping 1 to 16.
    #[must_use]
    pub const fn prev(self) -> Self {
        if self.0 == 1 {
            Self::LAST
        } else {
            Self(self.0 - 1)
        }
    }

    /// Shortest number of steps between two fields around the ring.
    #[must_use]
    pub const fn cyclic_distance(self, other: Field) -> u8 {
        let forward = (other.0 + FIELD_COUNT - self.0) % FIELD_COUNT;
        let backward = FIELD_COUNT - forward;
        if forward < backward {
            forward
        } else {
            backward
        }
    }

    /// Check whether this field is one of the two track ends (1 or 16).
    #[must_use]
    pub const fn is_boundary(self) -> bool {
        self.0 == 1 || self.0 == FIELD_COUNT
    }
}

impl TryFrom<u8> for Field {
    type Error = BoardError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl TryFrom<i64> for Field {
    type Error = BoardError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        u8::try_from(raw)
            .map_err(|_| BoardError::FieldOutOfRange(raw))
            .and_then(Self::new)
    }
}

impl From<Field> for u8 {
    fn from(field: Field) -> Self {
        field.0
    }
}

impl FromStr for Field {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: i64 = s
            .trim()
            .parse()
            .map_err(|_| BoardError::Malformed(format!("not a field number: {s:?}")))?;
        Self::try_from(raw)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Field {}", self.0)
    }
}
