//! Pointer input: turning a pick ray into at most one pit.
//!
//! Geometry lives behind the [`PitLayout`] trait so the presentation can
//! supply whatever hit test matches its meshes. [`SphereLayout`] is the
//! stock layout: one inclusion sphere per slot on the standard board.
//!
//! The [`InputMapper`] owns the selection policy:
//!
//! - **Play mode**: only active pits (current player, non-empty) are
//!   candidates, and only while the engine is idle.
//! - **Edit mode**: every non-hidden pit is a candidate in any engine state;
//!   a click marks the pit as selected instead of playing it.
//! - Hover uses the same nearest-hit pick but only sets a highlight, and is
//!   suppressed while a move animates unless in edit mode.

mod layout;
mod mapper;

pub use layout::{PitAnchor, PitLayout, Ray, SphereLayout, Vec3};
pub use mapper::{InputMapper, InputMode};
