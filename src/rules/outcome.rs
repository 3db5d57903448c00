//! Move and game outcomes.

use serde::{Deserialize, Serialize};

use super::sowing::SowingPath;
use crate::core::{PitId, PlayerId, PlayerMap};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Strictly more seeds in this player's store.
    Winner(PlayerId),
    /// Equal stores.
    Draw,
}

impl GameResult {
    /// Decide the result from final store counts.
    #[must_use]
    pub fn from_scores(scores: &PlayerMap<u32>) -> Self {
        let first = scores[PlayerId::FIRST];
        let second = scores[PlayerId::SECOND];
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::FIRST),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::SECOND),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }
}

/// Effect of the last seed of a move.
///
/// Exactly one applies per move, checked in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Landing {
    /// Landed in the mover's own store; the mover plays again.
    Repeat,
    /// Landed in an empty pit on the mover's side with seeds opposite.
    Capture {
        /// Where the last seed landed.
        pit: PitId,
        /// The opponent pit emptied by the capture.
        opposite: PitId,
        /// Seeds moved to the mover's store (opposite + the landed seed).
        captured: u32,
    },
    /// Nothing special; the turn passes.
    Normal,
}

impl Landing {
    /// Whether the mover keeps the turn.
    #[must_use]
    pub fn is_repeat(&self) -> bool {
        matches!(self, Landing::Repeat)
    }
}

/// A completed move, kept in the engine's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Turn number when the move was made (starts at 1).
    pub turn: u32,
    /// Who moved.
    pub player: PlayerId,
    /// The pit that was emptied.
    pub pit: PitId,
    /// Every slot that received a seed, in order.
    pub path: SowingPath,
    /// Effect of the last seed.
    pub landing: Landing,
}

impl MoveRecord {
    /// Seeds sown by this move.
    #[must_use]
    pub fn seeds(&self) -> usize {
        self.path.len()
    }
}
