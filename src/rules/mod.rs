//! Kalah rules and the move state machine.
//!
//! - `sowing`: where the seeds of a chosen pit land
//! - `outcome`: landing effects, move records, game results
//! - `resolver`: `MoveResolver`, which validates selections, drives the
//!   animation, applies repeat/capture rules and detects the end of the game
//!
//! The resolver is the only code that changes seed counts or the current
//! player.

pub mod sowing;
pub mod outcome;
pub mod resolver;

pub use sowing::{sowing_path, SowingPath};
pub use outcome::{GameResult, Landing, MoveRecord};
pub use resolver::{AdvanceStatus, EngineState, MoveResolver};
