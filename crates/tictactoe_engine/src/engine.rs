//! The game engine: sole owner of game state.

use super::action::{Placement, SelectError};
use super::contracts::{Contract, SelectContract};
use super::rules::{is_full, winning_line};
use super::{GameState, Outcome, Position};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
///
/// Holds the single [`GameState`] of a game and is the only thing that
/// mutates it. Operations are synchronous and must be called one at a time;
/// callers that can see overlapping input should serialize calls first.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates an engine with a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Selects the cell at `index` (0-8) for the player to move.
    ///
    /// # Errors
    ///
    /// - [`SelectError::OutOfBounds`] if `index` is not 0-8. This is a caller
    ///   bug; state is untouched.
    /// - [`SelectError::GameDecided`] if the game has already been won or drawn.
    /// - [`SelectError::CellOccupied`] if the cell already holds a mark.
    ///
    /// On any error the game is unchanged.
    #[instrument(skip(self))]
    pub fn select_cell(&mut self, index: usize) -> Result<Placement, SelectError> {
        let position = Position::try_from(index).inspect_err(|e| {
            warn!(index, error = %e, "Rejected out-of-range cell index");
        })?;
        self.select(position)
    }

    /// Selects `position` for the player to move.
    ///
    /// Same semantics as [`select_cell`](Self::select_cell) without the bounds check.
    #[instrument(skip(self), fields(to_move = ?self.state.to_move()))]
    pub fn select(&mut self, position: Position) -> Result<Placement, SelectError> {
        if let Err(e) = SelectContract::pre(&self.state, &position) {
            warn!(%position, error = %e, "Selection rejected");
            return Err(e);
        }

        let Some(mover) = *self.state.to_move() else {
            // Unreachable while the outcome/turn invariant holds.
            return Err(SelectError::GameDecided(*self.state.outcome()));
        };

        #[cfg(debug_assertions)]
        let before = self.state.clone();

        self.state.place(position, mover);

        let line = winning_line(self.state.board(), mover);
        let outcome = if line.is_some() {
            Outcome::Won(mover)
        } else if is_full(self.state.board()) {
            Outcome::Draw
        } else {
            Outcome::InProgress
        };
        self.state.settle(outcome, mover);

        #[cfg(debug_assertions)]
        debug_assert!(
            SelectContract::post(&before, &self.state).is_ok(),
            "selection broke a game invariant"
        );

        if outcome.is_terminal() {
            info!(%outcome, "Game decided");
        } else {
            debug!(%position, %mover, next = ?self.state.to_move(), "Mark placed");
        }

        Ok(Placement::new(mover, position, outcome, line))
    }

    /// Discards the current game and starts a fresh one.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(previous = %self.state.outcome(), "Resetting game");
        self.state = GameState::new();
    }

    /// Returns a snapshot of the current game.
    ///
    /// The snapshot is an owned copy: modifying it never affects the engine.
    pub fn status(&self) -> GameState {
        self.state.clone()
    }

    /// Positions the player to move may select. Empty once the game is decided.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.state.outcome().is_terminal() {
            Vec::new()
        } else {
            self.state.board().empty_positions()
        }
    }
}
