//! Core engine types: players, pits, configuration, errors, cosmetic RNG.
//!
//! Everything here is rule-agnostic vocabulary shared by the board, the
//! move resolver, the animation sequencer and the input mapper.

pub mod player;
pub mod pit;
pub mod config;
pub mod error;
pub mod rng;

pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use pit::{Pit, PitId, PitKind, PIT_COUNT, PITS_PER_SIDE};
pub use config::{EngineConfig, MAX_SEEDS_PER_PIT};
pub use error::{ConfigError, EngineError, Rejection};
pub use rng::CosmeticRng;
