//! Selection policy for pointer input.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::layout::{PitLayout, Ray};
use crate::core::{EngineError, Pit, PitId};
use crate::rules::MoveResolver;

/// What a click means.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputMode {
    /// Clicks play moves.
    #[default]
    Play,
    /// Clicks mark pits; moves are never started.
    Edit,
}

/// Maps pick rays to pits according to the current input mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputMapper {
    mode: InputMode,
}

impl InputMapper {
    /// Create a mapper in `mode`.
    #[must_use]
    pub fn new(mode: InputMode) -> Self {
        Self { mode }
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Switch mode.
    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    /// Flip between play and edit.
    pub fn toggle_mode(&mut self) -> InputMode {
        self.mode = match self.mode {
            InputMode::Play => InputMode::Edit,
            InputMode::Edit => InputMode::Play,
        };
        self.mode
    }

    fn is_candidate(&self, engine: &MoveResolver, pit: &Pit) -> bool {
        if pit.hidden {
            return false;
        }
        match self.mode {
            InputMode::Edit => true,
            InputMode::Play => {
                pit.active && engine.is_idle() && !engine.board().is_game_over()
            }
        }
    }

    /// Nearest candidate pit hit by `ray`, without side effects.
    ///
    /// On equal distances the lower pit id wins.
    #[must_use]
    pub fn pick(&self, engine: &MoveResolver, layout: &impl PitLayout, ray: &Ray) -> Option<PitId> {
        engine
            .board()
            .pits()
            .iter()
            .filter(|pit| self.is_candidate(engine, pit))
            .filter_map(|pit| layout.hit_distance(pit.id, ray).map(|d| (pit.id, d)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }

    /// Handle a click.
    ///
    /// In play mode the picked pit is played; in edit mode it becomes the
    /// selected pit. Returns the pit acted on, if any.
    pub fn click(
        &self,
        engine: &mut MoveResolver,
        layout: &impl PitLayout,
        ray: &Ray,
    ) -> Result<Option<PitId>, EngineError> {
        let Some(pit) = self.pick(engine, layout, ray) else {
            return Ok(None);
        };

        match self.mode {
            InputMode::Play => engine.select_pit(pit)?,
            InputMode::Edit => {
                debug!(%pit, "edit selection");
                engine.mark_selected(Some(pit));
            }
        }
        Ok(Some(pit))
    }

    /// Update the hover highlight. Returns the hovered pit, if any.
    pub fn hover(&self, engine: &mut MoveResolver, layout: &impl PitLayout, ray: &Ray) -> Option<PitId> {
        let target = if self.mode == InputMode::Play && !engine.is_idle() {
            None
        } else {
            self.pick(engine, layout, ray)
        };
        engine.hover(target);
        target
    }
}
