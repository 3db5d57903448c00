//! Per-frame read model for the presentation layer.
//!
//! A `BoardView` is an owned, serializable snapshot: the renderer reads it
//! each frame and looks up 3D positions by pit id on its own side. The
//! engine never tracks coordinates.

mod snapshot;

pub use snapshot::{BoardView, PitView, TransitionView};
