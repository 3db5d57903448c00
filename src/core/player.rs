//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Kalah is a two-seat game: `PlayerId(0)` plays the near row (pits 0-5,
//! store 6) and `PlayerId(1)` the far row (pits 7-12, store 13).
//!
//! ## PlayerMap
//!
//! Per-player storage backed by a fixed array, indexable by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::EngineError;
use super::pit::{PitId, PITS_PER_SIDE};

/// Number of seats at the board.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier. Only `0` and `1` are valid seats; every way of
/// building one (including deserialization) goes through [`PlayerId::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player who moves first after initialization.
    pub const FIRST: PlayerId = PlayerId(0);
    /// The player who moves second.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a player ID from a collaborator-supplied seat number.
    ///
    /// Seats other than 0 and 1 yield [`EngineError::InvalidPlayer`].
    pub fn new(seat: u8) -> Result<Self, EngineError> {
        if (seat as usize) < PLAYER_COUNT {
            Ok(Self(seat))
        } else {
            Err(EngineError::InvalidPlayer { seat })
        }
    }

    /// Raw seat number.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// This player's store.
    #[must_use]
    pub const fn store(self) -> PitId {
        PitId::from_raw(self.0 * 7 + 6)
    }

    /// This player's six playing pits, in sowing order.
    pub fn pits(self) -> impl Iterator<Item = PitId> {
        let first = self.0 * 7;
        (first..first + PITS_PER_SIDE as u8).map(PitId::from_raw)
    }

    /// Whether `pit` is one of this player's playing pits (stores excluded).
    #[must_use]
    pub fn owns(self, pit: PitId) -> bool {
        !pit.is_store() && pit.owner() == self
    }

    /// Iterate over both seats in turn order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = EngineError;

    fn try_from(seat: u8) -> Result<Self, Self::Error> {
        Self::new(seat)
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Seats are shown 1-based to people.
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use mancala_engine::core::{PlayerId, PlayerMap};
///
/// let mut stores: PlayerMap<u32> = PlayerMap::with_value(0);
/// stores[PlayerId::SECOND] = 7;
/// assert_eq!(stores[PlayerId::FIRST], 0);
/// assert_eq!(stores[PlayerId::SECOND], 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::FIRST), factory(PlayerId::SECOND)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
