//! Canonical board state.
//!
//! The `Board` owns the 14 slots, whose turn it is, and whether the game
//! has ended. Anyone may read it; seed counts and the current player only
//! change through the move resolver (`crate::rules::MoveResolver`).

mod state;
mod status;

pub use state::{ActivePits, Board};
pub use status::Status;
