//! Read-model snapshot types.

use serde::{Deserialize, Serialize};

use crate::animation::Transition;
use crate::board::Status;
use crate::core::{Pit, PitId, PitKind, PlayerId};
use crate::rules::{EngineState, MoveResolver};

/// One slot as the renderer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitView {
    pub id: PitId,
    pub kind: PitKind,
    pub seeds: u32,
    pub selected: bool,
    pub hovered: bool,
    pub active: bool,
    pub hidden: bool,
}

impl From<&Pit> for PitView {
    fn from(pit: &Pit) -> Self {
        Self {
            id: pit.id,
            kind: pit.id.kind(),
            seeds: pit.seeds,
            selected: pit.selected,
            hovered: pit.hovered,
            active: pit.active,
            hidden: pit.hidden,
        }
    }
}

/// The seed in the air, by pit id.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionView {
    pub source: PitId,
    pub destination: PitId,
    /// Progress along the arc, clamped to `0.0..=1.0`.
    pub elapsed: f32,
    pub tint: u8,
}

impl From<&Transition> for TransitionView {
    fn from(t: &Transition) -> Self {
        Self {
            source: t.source,
            destination: t.destination,
            elapsed: t.elapsed.clamp(0.0, 1.0),
            tint: t.tint,
        }
    }
}

/// Everything the presentation needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    /// All 14 slots in id order.
    pub pits: Vec<PitView>,
    pub current_player: PlayerId,
    pub game_over: bool,
    pub status: Status,
    pub status_message: String,
    pub state: EngineState,
    pub transition: Option<TransitionView>,
    pub turn_changed: bool,
}

impl BoardView {
    /// Snapshot the engine.
    #[must_use]
    pub fn capture(engine: &MoveResolver) -> Self {
        let board = engine.board();
        Self {
            pits: board.pits().iter().map(PitView::from).collect(),
            current_player: board.current_player(),
            game_over: board.is_game_over(),
            status: board.status(),
            status_message: board.status_message(),
            state: engine.state(),
            transition: engine.transition().map(TransitionView::from),
            turn_changed: board.turn_changed(),
        }
    }

    /// Seeds shown on the board.
    #[must_use]
    pub fn total_seeds(&self) -> u32 {
        self.pits.iter().map(|p| p.seeds).sum()
    }
}
