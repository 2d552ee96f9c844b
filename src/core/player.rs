//! Player identification and the turn context.
//!
//! ## PlayerId
//!
//! Seat number of a player, used as a tile's owner.
//!
//! ## TurnContext
//!
//! The two identities the placement guard needs: the player whose turn it is
//! and the player sitting at this board. Both are supplied by the game-state
//! owner on every call; nothing here reads shared state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::BoardError;

/// Seat at the table, counted from 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(seat: u8) -> Self {
        Self(seat)
    }

    /// Seats `0..count`, in turn order.
    ///
    /// ```
    /// use camel_ring::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).map(|p| p.to_string()).collect();
    /// assert_eq!(seats, ["Player 0", "Player 1", "Player 2"]);
    /// ```
    pub fn all(count: usize) -> impl Iterator<Item = PlayerId> {
        (0..count.min(usize::from(u8::MAX)) as u8).map(PlayerId)
    }
}

impl FromStr for PlayerId {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(PlayerId)
            .map_err(|_| BoardError::Malformed(format!("not a player id: {s:?}")))
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Who is acting and who is looking at the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnContext {
    /// Player whose turn it currently is.
    pub acting: PlayerId,
    /// Player this board instance belongs to.
    pub local: PlayerId,
}

impl TurnContext {
    /// Create a turn context.
    #[must_use]
    pub const fn new(acting: PlayerId, local: PlayerId) -> Self {
        Self { acting, local }
    }

    /// Context where the local player is also the acting one.
    #[must_use]
    pub const fn own_turn(player: PlayerId) -> Self {
        Self::new(player, player)
    }

    /// Check whether the local player may act right now.
    #[must_use]
    pub fn is_local_turn(&self) -> bool {
        self.acting == self.local
    }
}
