//! Seed-by-seed move animation.
//!
//! The sequencer turns a sowing path into a strictly sequential series of
//! transitions, one seed in the air at a time. It is stepped cooperatively
//! by the presentation's frame `dt` and owns no game rules: it only reports
//! which pit a seed has just reached, and the move resolver applies it.
//!
//! ## Example Usage
//!
//! ```
//! use mancala_engine::animation::{AnimationSequencer, SequencerStep};
//! use mancala_engine::core::{EngineConfig, PitId};
//!
//! let mut seq = AnimationSequencer::new(&EngineConfig::default().with_move_speed(4.0));
//! let path = [PitId::new(1).unwrap(), PitId::new(2).unwrap()];
//! seq.start(PitId::new(0).unwrap(), &path);
//!
//! assert_eq!(seq.step(0.1), SequencerStep::InFlight);
//! assert_eq!(seq.step(0.2), SequencerStep::Landed(path[0]));
//! assert_eq!(seq.step(0.25), SequencerStep::Exhausted(path[1]));
//! assert_eq!(seq.step(0.25), SequencerStep::Idle);
//! ```

mod sequencer;

pub use sequencer::{AnimationSequencer, SequencerStep, Transition};
