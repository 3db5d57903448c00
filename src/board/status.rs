//! Human-readable game status.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// What the status line should say.
///
/// Purely informational: nothing in the rules reads it back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Waiting for this player to pick a pit.
    Turn(PlayerId),
    /// A move is being played out.
    Sowing,
    /// The last seed reached the mover's store.
    PlaysAgain(PlayerId),
    /// Game over with a winner.
    Winner(PlayerId),
    /// Game over with equal stores.
    Draw,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Turn(player) => write!(f, "{player}'s turn"),
            Status::Sowing => write!(f, "Sowing..."),
            Status::PlaysAgain(player) => write!(f, "{player} plays again!"),
            Status::Winner(player) => write!(f, "{player} wins!"),
            Status::Draw => write!(f, "Draw!"),
        }
    }
}
