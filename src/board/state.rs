//! Board state: pits, turn, game-over flag.

use smallvec::SmallVec;

use super::Status;
use crate::core::{Pit, PitId, PlayerId, PlayerMap, PIT_COUNT};

/// Pits a player may currently select, in id order.
pub type ActivePits = SmallVec<[PitId; 6]>;

/// Canonical game state.
///
/// ## Invariant
///
/// Seeds are never created or destroyed after `initialize`: sowing moves
/// them one at a time, captures and the end-of-game sweep move them into
/// stores.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pits: [Pit; PIT_COUNT],
    current_player: PlayerId,
    game_over: bool,
    status: Status,
    turn_changed: bool,
}

impl Board {
    /// Create a board in the opening position.
    #[must_use]
    pub fn new(seeds_per_pit: u32) -> Self {
        let mut board = Self::empty();
        board.initialize(seeds_per_pit);
        board
    }

    /// Create a board from explicit seed counts (index = pit id).
    ///
    /// Useful for puzzles and tests. The board itself never ends the game;
    /// `MoveResolver::with_board` checks for an empty side on adoption.
    ///
    /// ```
    /// use mancala_engine::board::Board;
    /// use mancala_engine::core::PlayerId;
    ///
    /// let board = Board::from_seeds([1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0], PlayerId::SECOND);
    /// assert_eq!(board.total_seeds(), 2);
    /// assert_eq!(board.active_pits(PlayerId::SECOND).len(), 1);
    /// ```
    #[must_use]
    pub fn from_seeds(seeds: [u32; PIT_COUNT], current_player: PlayerId) -> Self {
        let mut board = Self::empty();
        for (pit, count) in board.pits.iter_mut().zip(seeds) {
            pit.seeds = count;
        }
        board.current_player = current_player;
        board.status = Status::Turn(current_player);
        board.refresh_active();
        board
    }

    fn empty() -> Self {
        Self {
            pits: std::array::from_fn(|i| Pit::new(PitId::from_raw(i as u8), 0)),
            current_player: PlayerId::FIRST,
            game_over: false,
            status: Status::Turn(PlayerId::FIRST),
            turn_changed: true,
        }
    }

    /// Reset to the opening position: every playing pit holds
    /// `seeds_per_pit`, stores are empty, player 0 to move.
    ///
    /// Calling this twice in a row yields identical boards.
    pub fn initialize(&mut self, seeds_per_pit: u32) {
        for pit in &mut self.pits {
            *pit = Pit::new(pit.id, if pit.id.is_store() { 0 } else { seeds_per_pit });
        }
        self.current_player = PlayerId::FIRST;
        self.game_over = false;
        self.status = Status::Turn(PlayerId::FIRST);
        self.turn_changed = true;
        self.refresh_active();
    }

    // === Read access ===

    /// A single slot.
    #[must_use]
    pub fn pit(&self, id: PitId) -> &Pit {
        &self.pits[id.index()]
    }

    /// All 14 slots, index = id.
    #[must_use]
    pub fn pits(&self) -> &[Pit] {
        &self.pits
    }

    /// Seeds in one slot.
    #[must_use]
    pub fn seeds(&self, id: PitId) -> u32 {
        self.pits[id.index()].seeds
    }

    /// Seeds on the board (excludes seeds in hand during a move).
    #[must_use]
    pub fn total_seeds(&self) -> u32 {
        self.pits.iter().fold(0u32, |total, p| total.saturating_add(p.seeds))
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Whether the end-of-game sweep has happened.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Current status line.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Human-readable status line.
    #[must_use]
    pub fn status_message(&self) -> String {
        self.status.to_string()
    }

    /// Whether the turn changed since the presentation last acknowledged it.
    #[must_use]
    pub fn turn_changed(&self) -> bool {
        self.turn_changed
    }

    /// Non-empty playing pits owned by `player`.
    #[must_use]
    pub fn active_pits(&self, player: PlayerId) -> ActivePits {
        player
            .pits()
            .filter(|&id| self.seeds(id) > 0)
            .collect()
    }

    /// Whether all six of `player`'s playing pits are empty.
    #[must_use]
    pub fn side_is_empty(&self, player: PlayerId) -> bool {
        player.pits().all(|id| self.seeds(id) == 0)
    }

    /// Seeds in `player`'s store.
    #[must_use]
    pub fn store_seeds(&self, player: PlayerId) -> u32 {
        self.seeds(player.store())
    }

    /// Store counts for both players.
    #[must_use]
    pub fn scores(&self) -> PlayerMap<u32> {
        PlayerMap::new(|player| self.store_seeds(player))
    }

    // === Mutation (move resolver only) ===

    /// Empty a pit into the mover's hand.
    pub(crate) fn take_seeds(&mut self, id: PitId) -> u32 {
        std::mem::take(&mut self.pits[id.index()].seeds)
    }

    /// Land one seed.
    pub(crate) fn add_seed(&mut self, id: PitId) {
        self.pits[id.index()].seeds += 1;
    }

    /// Move the landed pit and its opposite into `player`'s store.
    ///
    /// Returns the number of seeds captured.
    pub(crate) fn capture(&mut self, landed: PitId, opposite: PitId, player: PlayerId) -> u32 {
        let captured = self.take_seeds(opposite) + self.take_seeds(landed);
        self.pits[player.store().index()].seeds += captured;
        captured
    }

    /// Sweep every side's remaining seeds into that side's own store.
    pub(crate) fn sweep(&mut self) {
        for player in PlayerId::all() {
            let remaining: u32 = player.pits().map(|id| self.take_seeds(id)).sum();
            self.pits[player.store().index()].seeds += remaining;
        }
    }

    pub(crate) fn set_game_over(&mut self) {
        self.game_over = true;
    }

    pub(crate) fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Hand the turn to the other player.
    pub(crate) fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
        self.turn_changed = true;
    }

    pub(crate) fn take_turn_changed(&mut self) -> bool {
        std::mem::take(&mut self.turn_changed)
    }

    /// Mark exactly the current player's non-empty pits as active.
    pub(crate) fn refresh_active(&mut self) {
        let player = self.current_player;
        for pit in &mut self.pits {
            pit.active = player.owns(pit.id) && pit.seeds > 0;
        }
    }

    /// Lock out selection while a move is in progress.
    pub(crate) fn clear_active(&mut self) {
        for pit in &mut self.pits {
            pit.active = false;
        }
    }

    /// Highlight at most one pit.
    pub(crate) fn set_hovered(&mut self, hovered: Option<PitId>) {
        for pit in &mut self.pits {
            pit.hovered = Some(pit.id) == hovered;
        }
    }

    /// Edit-mode marker; at most one pit is selected.
    pub(crate) fn set_selected(&mut self, selected: Option<PitId>) {
        for pit in &mut self.pits {
            pit.selected = Some(pit.id) == selected;
        }
    }

    pub(crate) fn set_hidden(&mut self, id: PitId, hidden: bool) {
        self.pits[id.index()].hidden = hidden;
    }
}
