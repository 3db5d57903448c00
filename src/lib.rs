//! # mancala-engine
//!
//! A Kalah-rules Mancala engine with a discrete move/animation protocol for
//! an external presentation layer.
//!
//! ## Design Principles
//!
//! 1. **One owner**: a single `MoveResolver` owns the board and the running
//!    animation. The presentation holds it and threads it through its frame
//!    loop; there are no globals.
//!
//! 2. **Rejection, not mutation**: illegal selections return an error and
//!    leave the board untouched. Out-of-range pit indices are a distinct
//!    caller error.
//!
//! 3. **Frame-stepped**: moves play out one seed per transition, advanced by
//!    wall-clock `dt`. Seed counts change only when a transition completes.
//!
//! ## Frame loop
//!
//! ```
//! use mancala_engine::input::{InputMapper, Ray, SphereLayout};
//! use mancala_engine::rules::MoveResolver;
//!
//! let mut engine = MoveResolver::default();
//! let layout = SphereLayout::standard();
//! let mapper = InputMapper::default();
//!
//! // Camera above pit 3 looking straight down
//! let ray = Ray::new([1.1, 15.0, 1.8], [0.0, -1.0, 0.0]);
//! mapper.hover(&mut engine, &layout, &ray);
//! let played = mapper.click(&mut engine, &layout, &ray).unwrap();
//! assert_eq!(played.map(|p| p.raw()), Some(3));
//!
//! while !engine.is_idle() {
//!     engine.advance_animation(1.0 / 60.0);
//!     let frame = engine.view();
//!     assert_eq!(frame.pits.len(), 14);
//! }
//! ```
//!
//! ## Modules
//!
//! - `core`: players, pits, configuration, errors, cosmetic RNG
//! - `board`: canonical board state and status line
//! - `rules`: sowing, landing rules, the `MoveResolver` state machine
//! - `animation`: the one-seed-at-a-time transition queue
//! - `input`: pick rays, pit layouts, selection policy
//! - `view`: per-frame read model

pub mod core;
pub mod board;
pub mod rules;
pub mod animation;
pub mod input;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    PitId, Pit, PitKind, PIT_COUNT,
    EngineConfig,
    EngineError, Rejection, ConfigError,
};

pub use crate::board::{Board, Status};

pub use crate::rules::{
    sowing_path, SowingPath,
    GameResult, Landing, MoveRecord,
    AdvanceStatus, EngineState, MoveResolver,
};

pub use crate::animation::{AnimationSequencer, SequencerStep, Transition};

pub use crate::input::{InputMapper, InputMode, PitLayout, Ray, SphereLayout};

pub use crate::view::{BoardView, PitView, TransitionView};
