//! Pit identity and per-pit state.
//!
//! The board is a ring of 14 slots. Ids are fixed at creation:
//!
//! ```text
//!        12 11 10  9  8  7
//!   13                      6
//!         0  1  2  3  4  5
//! ```
//!
//! Sowing runs counter-clockwise in id order, wrapping 13 -> 0.

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::player::PlayerId;

/// Total slots on the board (12 playing pits + 2 stores).
pub const PIT_COUNT: usize = 14;

/// Playing pits on each side.
pub const PITS_PER_SIDE: usize = 6;

/// Validated pit identifier in `0..14`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PitId(u8);

impl PitId {
    /// Create a pit ID from a collaborator-supplied index.
    ///
    /// Indices outside `0..14` are a precondition violation and yield
    /// [`EngineError::InvalidArgument`].
    pub fn new(index: usize) -> Result<Self, EngineError> {
        if index < PIT_COUNT {
            Ok(Self(index as u8))
        } else {
            Err(EngineError::InvalidArgument { index })
        }
    }

    /// Internal constructor for ids known to be in range.
    pub(crate) const fn from_raw(id: u8) -> Self {
        debug_assert!((id as usize) < PIT_COUNT);
        Self(id)
    }

    /// Raw id.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Id as a slice index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Every pit in id order.
    pub fn all() -> impl Iterator<Item = PitId> {
        (0..PIT_COUNT as u8).map(PitId)
    }

    /// Whether this slot is a store (6 or 13).
    #[must_use]
    pub const fn is_store(self) -> bool {
        self.0 == 6 || self.0 == 13
    }

    /// Which side of the board the slot sits on.
    #[must_use]
    pub const fn owner(self) -> PlayerId {
        if self.0 <= 6 {
            PlayerId::FIRST
        } else {
            PlayerId::SECOND
        }
    }

    /// Slot classification.
    #[must_use]
    pub const fn kind(self) -> PitKind {
        if self.is_store() {
            PitKind::Store
        } else {
            PitKind::Pit
        }
    }

    /// The playing pit directly across the board (`12 - id`).
    ///
    /// Stores have no opposite.
    #[must_use]
    pub const fn opposite(self) -> Option<PitId> {
        if self.is_store() {
            None
        } else {
            Some(Self(12 - self.0))
        }
    }

    /// The next slot in sowing order, ignoring store skipping.
    #[must_use]
    pub const fn next(self) -> PitId {
        Self((self.0 + 1) % PIT_COUNT as u8)
    }
}

impl TryFrom<u8> for PitId {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value as usize)
    }
}

impl From<PitId> for u8 {
    fn from(pit: PitId) -> Self {
        pit.0
    }
}

impl std::fmt::Display for PitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pit({})", self.0)
    }
}

/// Whether a slot is a playing pit or a store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PitKind {
    /// One of the twelve selectable pits.
    Pit,
    /// A player's scoring store; never selectable.
    Store,
}

/// A single slot on the board.
///
/// `seeds` is game state. The boolean flags are presentation hints and
/// carry no rule meaning.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pit {
    /// Fixed identity.
    pub id: PitId,
    /// Seeds currently in the slot.
    pub seeds: u32,
    /// Marked by an edit-mode click.
    pub selected: bool,
    /// Under the pointer.
    pub hovered: bool,
    /// Selectable by the current player right now.
    pub active: bool,
    /// Excluded from picking and drawing.
    pub hidden: bool,
}

impl Pit {
    /// Create a pit holding `seeds` with all flags cleared.
    #[must_use]
    pub fn new(id: PitId, seeds: u32) -> Self {
        Self {
            id,
            seeds,
            selected: false,
            hovered: false,
            active: false,
            hidden: false,
        }
    }

    /// Whether the slot holds no seeds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seeds == 0
    }
}
