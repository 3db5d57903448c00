//! The move resolver: the engine's only mutator.
//!
//! ## States
//!
//! - `Idle`: waiting for the current player to pick a pit
//! - `Animating`: a move is being sown one seed per transition
//!
//! `Idle -> Animating` happens only on an accepted `select_pit`.
//! `Animating -> Idle` happens when the sequencer lands the last seed and
//! the landing rules (repeat, capture, game over) have been applied. There
//! is no abort path: a started move always runs to completion.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};

use super::outcome::{GameResult, Landing, MoveRecord};
use super::sowing::{sowing_path, SowingPath};
use crate::animation::{AnimationSequencer, SequencerStep, Transition};
use crate::board::{Board, Status};
use crate::core::{
    ConfigError, EngineConfig, EngineError, PitId, PlayerId, Rejection, MAX_SEEDS_PER_PIT,
};
use crate::view::BoardView;

/// Engine mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// Awaiting a selection.
    Idle,
    /// Playing out a move.
    Animating,
}

/// Status returned by `advance_animation`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceStatus {
    /// No move in progress; nothing happened.
    Idle,
    /// A seed is in the air.
    InFlight,
    /// A seed landed here; more follow.
    Landed(PitId),
    /// The last seed landed and the move was finalized.
    Finished(Landing),
}

/// A move between selection and finalization.
#[derive(Clone, Debug)]
struct PendingMove {
    pit: PitId,
    path: SowingPath,
}

/// Owns the board and the animation, and applies every rule.
///
/// ## Example
///
/// ```
/// use mancala_engine::core::PitId;
/// use mancala_engine::rules::{AdvanceStatus, EngineState, Landing, MoveResolver};
///
/// let mut engine = MoveResolver::default();
/// engine.select_pit(PitId::new(2).unwrap()).unwrap();
/// assert_eq!(engine.state(), EngineState::Animating);
///
/// // Four seeds at one landing per tick: 3, 4, 5, then the store
/// let mut last = AdvanceStatus::Idle;
/// for _ in 0..4 {
///     last = engine.advance_animation(0.25);
/// }
/// assert_eq!(last, AdvanceStatus::Finished(Landing::Repeat));
/// assert_eq!(engine.state(), EngineState::Idle);
/// ```
#[derive(Clone, Debug)]
pub struct MoveResolver {
    config: EngineConfig,
    board: Board,
    sequencer: AnimationSequencer,
    state: EngineState,
    pending: Option<PendingMove>,
    history: Vector<MoveRecord>,
    turn: u32,
    result: Option<GameResult>,
}

impl Default for MoveResolver {
    fn default() -> Self {
        let config = EngineConfig::default();
        let board = Board::new(config.seeds_per_pit);
        Self::assemble(config, board)
    }
}

impl MoveResolver {
    /// Create an engine in the opening position.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.seeds_per_pit);
        Ok(Self::assemble(config, board))
    }

    /// Create an engine that continues from an existing board.
    ///
    /// If either side is already empty the game ends immediately. Boards
    /// holding more seeds than the largest valid config are rejected.
    pub fn with_board(config: EngineConfig, board: Board) -> Result<Self, ConfigError> {
        config.validate()?;
        let limit = EngineConfig::default()
            .with_seeds_per_pit(MAX_SEEDS_PER_PIT)
            .total_seeds();
        if board.total_seeds() > limit {
            return Err(ConfigError::Validation(format!(
                "board holds more than {limit} seeds"
            )));
        }
        let mut engine = Self::assemble(config, board);
        if !engine.board.is_game_over() {
            engine.check_game_over();
        }
        Ok(engine)
    }

    fn assemble(config: EngineConfig, board: Board) -> Self {
        Self {
            sequencer: AnimationSequencer::new(&config),
            config,
            board,
            state: EngineState::Idle,
            pending: None,
            history: Vector::new(),
            turn: 1,
            result: None,
        }
    }

    /// Reset to the opening position and forget all history.
    ///
    /// A started move always runs to completion, so this is refused with
    /// [`Rejection::Animating`] until the engine is idle again.
    pub fn initialize(&mut self) -> Result<(), EngineError> {
        if self.state == EngineState::Animating {
            debug!("initialize refused mid-move");
            return Err(Rejection::Animating.into());
        }

        self.board.initialize(self.config.seeds_per_pit);
        self.sequencer.reset();
        self.state = EngineState::Idle;
        self.pending = None;
        self.history = Vector::new();
        self.turn = 1;
        self.result = None;
        debug!(seeds_per_pit = self.config.seeds_per_pit, "board initialized");
        Ok(())
    }

    // === Commands ===

    /// Start a move from `pit` for the current player.
    ///
    /// Rejected selections leave every piece of state untouched.
    #[instrument(level = "debug", skip(self))]
    pub fn select_pit(&mut self, pit: PitId) -> Result<(), EngineError> {
        if let Err(rejection) = self.check_selection(pit) {
            debug!(%rejection, "selection rejected");
            return Err(rejection.into());
        }

        let player = self.board.current_player();
        let seeds = self.board.take_seeds(pit);
        let path = sowing_path(pit, player, seeds);

        self.board.clear_active();
        self.board.set_status(Status::Sowing);
        self.sequencer.start(pit, &path);
        self.state = EngineState::Animating;
        debug!(%player, seeds, "move started");

        self.pending = Some(PendingMove { pit, path });
        Ok(())
    }

    /// Start a move from a raw pit index supplied by the presentation.
    ///
    /// Indices outside `0..14` are [`EngineError::InvalidArgument`].
    pub fn select_index(&mut self, index: usize) -> Result<(), EngineError> {
        let pit = PitId::new(index)?;
        self.select_pit(pit)
    }

    fn check_selection(&self, pit: PitId) -> Result<(), Rejection> {
        let player = self.board.current_player();
        if self.state != EngineState::Idle {
            return Err(Rejection::Animating);
        }
        if self.board.is_game_over() {
            return Err(Rejection::GameOver);
        }
        if !player.owns(pit) {
            return Err(Rejection::NotOwned { pit, player });
        }
        if self.board.seeds(pit) == 0 {
            return Err(Rejection::EmptyPit(pit));
        }
        Ok(())
    }

    /// Advance the running move by `dt` seconds of wall-clock time.
    ///
    /// Seeds are added to the board only as each transition completes, so
    /// pit counts reflect the whole move only once the queue drains.
    pub fn advance_animation(&mut self, dt: f32) -> AdvanceStatus {
        if self.state != EngineState::Animating {
            return AdvanceStatus::Idle;
        }

        match self.sequencer.step(dt) {
            SequencerStep::Idle => AdvanceStatus::Idle,
            SequencerStep::InFlight => AdvanceStatus::InFlight,
            SequencerStep::Landed(pit) => {
                self.board.add_seed(pit);
                trace!(%pit, "seed landed");
                AdvanceStatus::Landed(pit)
            }
            SequencerStep::Exhausted(pit) => {
                self.board.add_seed(pit);
                trace!(%pit, "last seed landed");
                AdvanceStatus::Finished(self.finalize(pit))
            }
        }
    }

    /// Record which pit, if any, is under the pointer.
    pub fn hover(&mut self, pit: Option<PitId>) {
        self.board.set_hovered(pit);
    }

    /// Edit-mode marker; replaces any previous selection.
    pub fn mark_selected(&mut self, pit: Option<PitId>) {
        self.board.set_selected(pit);
    }

    /// Hide or reveal a pit for picking and drawing.
    pub fn set_hidden(&mut self, pit: PitId, hidden: bool) {
        self.board.set_hidden(pit, hidden);
    }

    /// Consume the turn-changed signal.
    ///
    /// Returns true once after `initialize` and after every change of mover.
    pub fn take_turn_changed(&mut self) -> bool {
        self.board.take_turn_changed()
    }

    // === Landing rules ===

    /// Apply the last seed's effect, then the end-of-game check, then hand
    /// the turn over unless the mover plays again.
    #[instrument(level = "debug", skip(self))]
    fn finalize(&mut self, last: PitId) -> Landing {
        let mover = self.board.current_player();
        let landing = self.landing_effect(mover, last);

        if let Some(pending) = self.pending.take() {
            self.history.push_back(MoveRecord {
                turn: self.turn,
                player: mover,
                pit: pending.pit,
                path: pending.path,
                landing,
            });
        }
        self.state = EngineState::Idle;

        if self.check_game_over() {
            return landing;
        }

        if landing.is_repeat() {
            info!(%mover, "plays again");
            self.board.set_status(Status::PlaysAgain(mover));
        } else {
            self.board.switch_player();
            self.turn += 1;
            self.board.set_status(Status::Turn(self.board.current_player()));
        }
        self.board.refresh_active();
        landing
    }

    fn landing_effect(&mut self, mover: PlayerId, last: PitId) -> Landing {
        if last == mover.store() {
            return Landing::Repeat;
        }
        if !mover.owns(last) || self.board.seeds(last) != 1 {
            return Landing::Normal;
        }

        match last.opposite() {
            Some(opposite) if self.board.seeds(opposite) > 0 => {
                let captured = self.board.capture(last, opposite, mover);
                info!(%mover, pit = %last, %opposite, captured, "capture");
                Landing::Capture {
                    pit: last,
                    opposite,
                    captured,
                }
            }
            _ => Landing::Normal,
        }
    }

    /// End the game if either side is empty: sweep, set the flag, report
    /// the winner through the status line.
    fn check_game_over(&mut self) -> bool {
        if !PlayerId::all().any(|player| self.board.side_is_empty(player)) {
            return false;
        }

        self.board.sweep();
        self.board.set_game_over();
        self.board.clear_active();

        let scores = self.board.scores();
        let result = GameResult::from_scores(&scores);
        self.board.set_status(match result {
            GameResult::Winner(player) => Status::Winner(player),
            GameResult::Draw => Status::Draw,
        });
        info!(
            first = scores[PlayerId::FIRST],
            second = scores[PlayerId::SECOND],
            ?result,
            "game over"
        );
        self.result = Some(result);
        true
    }

    // === Read access ===

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Canonical board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current mode.
    #[must_use]
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Whether a selection could be accepted right now.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.state == EngineState::Idle
    }

    /// The seed currently in the air.
    #[must_use]
    pub fn transition(&self) -> Option<&Transition> {
        self.sequencer.transition()
    }

    /// Seeds picked up but not yet landed.
    ///
    /// `board().total_seeds() + seeds_in_flight()` is constant for a game.
    #[must_use]
    pub fn seeds_in_flight(&self) -> u32 {
        self.sequencer.in_flight() as u32
    }

    /// Completed moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Current turn number (starts at 1, increments when the mover changes).
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Final result once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Per-frame read model for the presentation.
    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView::capture(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pit(id: u8) -> PitId {
        PitId::from_raw(id)
    }

    fn run_move(engine: &mut MoveResolver, id: u8) -> Landing {
        engine.select_pit(pit(id)).unwrap();
        loop {
            if let AdvanceStatus::Finished(landing) = engine.advance_animation(0.25) {
                return landing;
            }
        }
    }

    #[test]
    fn test_select_enters_animating() {
        let mut engine = MoveResolver::default();
        engine.select_pit(pit(0)).unwrap();

        assert_eq!(engine.state(), EngineState::Animating);
        assert_eq!(engine.board().seeds(pit(0)), 0);
        assert_eq!(engine.seeds_in_flight(), 4);
        assert_eq!(engine.board().status(), Status::Sowing);
        assert!(engine.board().pits().iter().all(|p| !p.active));

        let t = engine.transition().unwrap();
        assert_eq!(t.source, pit(0));
        assert_eq!(t.destination, pit(1));
    }

    #[test]
    fn test_seeds_land_one_at_a_time() {
        let mut engine = MoveResolver::default();
        engine.select_pit(pit(0)).unwrap();

        assert_eq!(engine.advance_animation(0.1), AdvanceStatus::InFlight);
        assert_eq!(engine.board().seeds(pit(1)), 4);

        assert_eq!(engine.advance_animation(0.15), AdvanceStatus::Landed(pit(1)));
        assert_eq!(engine.board().seeds(pit(1)), 5);
        assert_eq!(engine.board().seeds(pit(2)), 4);
        assert_eq!(engine.seeds_in_flight(), 3);
    }

    #[test]
    fn test_rejections() {
        let mut engine = MoveResolver::default();

        assert_eq!(
            engine.select_pit(pit(8)),
            Err(EngineError::InvalidSelection(Rejection::NotOwned {
                pit: pit(8),
                player: PlayerId::FIRST
            }))
        );
        assert_eq!(
            engine.select_pit(pit(6)),
            Err(EngineError::InvalidSelection(Rejection::NotOwned {
                pit: pit(6),
                player: PlayerId::FIRST
            }))
        );

        engine.select_pit(pit(0)).unwrap();
        assert_eq!(
            engine.select_pit(pit(1)),
            Err(EngineError::InvalidSelection(Rejection::Animating))
        );
    }

    #[test]
    fn test_empty_pit_rejected() {
        let board = Board::from_seeds([0, 2, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0], PlayerId::FIRST);
        let mut engine = MoveResolver::with_board(EngineConfig::default(), board).unwrap();

        assert_eq!(
            engine.select_pit(pit(0)),
            Err(EngineError::InvalidSelection(Rejection::EmptyPit(pit(0))))
        );
    }

    #[test]
    fn test_select_index_out_of_range() {
        let mut engine = MoveResolver::default();
        let before = engine.board().clone();

        let err = engine.select_index(14).unwrap_err();
        assert_eq!(err, EngineError::InvalidArgument { index: 14 });
        assert!(!err.is_recoverable());
        assert_eq!(engine.board(), &before);
    }

    #[test]
    fn test_repeat_turn_keeps_player() {
        let mut engine = MoveResolver::default();
        engine.take_turn_changed();

        assert_eq!(run_move(&mut engine, 2), Landing::Repeat);
        assert_eq!(engine.board().current_player(), PlayerId::FIRST);
        assert_eq!(engine.board().status(), Status::PlaysAgain(PlayerId::FIRST));
        assert!(!engine.take_turn_changed());
        assert_eq!(engine.turn(), 1);
    }

    #[test]
    fn test_normal_move_passes_turn() {
        let mut engine = MoveResolver::default();
        engine.take_turn_changed();

        assert_eq!(run_move(&mut engine, 0), Landing::Normal);
        assert_eq!(engine.board().current_player(), PlayerId::SECOND);
        assert_eq!(engine.board().status_message(), "Player 2's turn");
        assert!(engine.take_turn_changed());
        assert_eq!(engine.turn(), 2);

        let active: Vec<u8> = engine
            .board()
            .pits()
            .iter()
            .filter(|p| p.active)
            .map(|p| p.id.raw())
            .collect();
        assert_eq!(active, vec![7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_capture() {
        // Pit 1 sows into 2 and the empty pit 3; pit 9 sits opposite
        let board = Board::from_seeds([4, 2, 4, 0, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0], PlayerId::FIRST);
        let mut engine = MoveResolver::with_board(EngineConfig::default(), board).unwrap();

        let landing = run_move(&mut engine, 1);

        assert_eq!(
            landing,
            Landing::Capture {
                pit: pit(3),
                opposite: pit(9),
                captured: 5
            }
        );
        assert_eq!(engine.board().seeds(pit(3)), 0);
        assert_eq!(engine.board().seeds(pit(9)), 0);
        assert_eq!(engine.board().store_seeds(PlayerId::FIRST), 5);
        assert_eq!(engine.board().current_player(), PlayerId::SECOND);
        assert_eq!(engine.board().total_seeds(), 42);
    }

    #[test]
    fn test_no_capture_when_opposite_empty() {
        let board = Board::from_seeds([4, 2, 4, 0, 4, 4, 0, 4, 4, 0, 4, 4, 4, 0], PlayerId::FIRST);
        let mut engine = MoveResolver::with_board(EngineConfig::default(), board).unwrap();

        assert_eq!(run_move(&mut engine, 1), Landing::Normal);
        assert_eq!(engine.board().seeds(pit(3)), 1);
        assert_eq!(engine.board().current_player(), PlayerId::SECOND);
    }

    #[test]
    fn test_no_capture_on_opponent_side() {
        // Player 0 lands a single seed in empty pit 7
        let board = Board::from_seeds([4, 4, 4, 4, 4, 2, 0, 0, 4, 4, 4, 4, 4, 0], PlayerId::FIRST);
        let mut engine = MoveResolver::with_board(EngineConfig::default(), board).unwrap();

        assert_eq!(run_move(&mut engine, 5), Landing::Normal);
        assert_eq!(engine.board().seeds(pit(7)), 1);
        assert_eq!(engine.board().seeds(pit(5)), 0);
    }

    #[test]
    fn test_game_over_sweep() {
        let board = Board::from_seeds([0, 0, 0, 0, 0, 1, 10, 3, 2, 0, 0, 0, 1, 8], PlayerId::FIRST);
        let mut engine = MoveResolver::with_board(EngineConfig::default(), board).unwrap();

        assert_eq!(run_move(&mut engine, 5), Landing::Repeat);

        let board = engine.board();
        assert!(board.is_game_over());
        assert_eq!(board.store_seeds(PlayerId::FIRST), 11);
        assert_eq!(board.store_seeds(PlayerId::SECOND), 14);
        assert!(PlayerId::SECOND.pits().all(|p| board.seeds(p) == 0));
        assert_eq!(board.status(), Status::Winner(PlayerId::SECOND));
        assert_eq!(engine.result(), Some(GameResult::Winner(PlayerId::SECOND)));
        assert!(board.pits().iter().all(|p| !p.active));

        assert_eq!(
            engine.select_pit(pit(7)),
            Err(EngineError::InvalidSelection(Rejection::GameOver))
        );
    }

    #[test]
    fn test_with_board_detects_finished_position() {
        let board = Board::from_seeds([0, 0, 0, 0, 0, 0, 24, 0, 0, 0, 0, 0, 0, 24], PlayerId::FIRST);
        let engine = MoveResolver::with_board(EngineConfig::default(), board).unwrap();

        assert!(engine.board().is_game_over());
        assert_eq!(engine.result(), Some(GameResult::Draw));
        assert_eq!(engine.board().status_message(), "Draw!");
    }

    #[test]
    fn test_history_records_moves() {
        let mut engine = MoveResolver::default();
        run_move(&mut engine, 2);
        run_move(&mut engine, 0);

        let history = engine.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].pit, pit(2));
        assert_eq!(history[0].landing, Landing::Repeat);
        assert_eq!(history[0].turn, 1);
        assert_eq!(history[1].pit, pit(0));
        assert_eq!(history[1].seeds(), 4);
    }

    #[test]
    fn test_initialize_refused_mid_move() {
        let mut engine = MoveResolver::default();
        run_move(&mut engine, 0);
        engine.select_pit(pit(9)).unwrap();
        engine.advance_animation(0.25);

        let before = engine.board().clone();
        let in_flight = engine.seeds_in_flight();

        assert_eq!(
            engine.initialize(),
            Err(EngineError::InvalidSelection(Rejection::Animating))
        );
        assert_eq!(engine.state(), EngineState::Animating);
        assert_eq!(engine.board(), &before);
        assert_eq!(engine.seeds_in_flight(), in_flight);
        assert_eq!(engine.history().len(), 1);

        // The move still finishes normally
        loop {
            if let AdvanceStatus::Finished(_) = engine.advance_animation(0.25) {
                break;
            }
        }
        assert_eq!(engine.board().total_seeds(), 48);
    }

    #[test]
    fn test_initialize_resets_everything() {
        let mut engine = MoveResolver::default();
        run_move(&mut engine, 0);
        run_move(&mut engine, 9);

        engine.initialize().unwrap();

        assert_eq!(engine.state(), EngineState::Idle);
        assert_eq!(engine.board(), &Board::new(4));
        assert!(engine.history().is_empty());
        assert_eq!(engine.seeds_in_flight(), 0);
        assert_eq!(engine.turn(), 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EngineConfig::default().with_move_speed(0.0);
        assert!(MoveResolver::new(config).is_err());

        let config = EngineConfig::default().with_seeds_per_pit(400_000_000);
        assert!(MoveResolver::new(config).is_err());
    }

    #[test]
    fn test_oversized_board_rejected() {
        let mut seeds = [0; 14];
        seeds[0] = u32::MAX;
        seeds[7] = 1;
        let board = Board::from_seeds(seeds, PlayerId::FIRST);

        assert!(matches!(
            MoveResolver::with_board(EngineConfig::default(), board),
            Err(ConfigError::Validation(_))
        ));
    }
}
