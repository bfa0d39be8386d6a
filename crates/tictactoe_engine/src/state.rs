//! Complete game state.

use super::{Board, Mark, Outcome, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Board, player to move, and outcome.
///
/// Values handed out by the engine are owned snapshots; changing one has no
/// effect on the game it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Mark to move next, or `None` once the game is decided.
    to_move: Option<Mark>,
    /// Game outcome.
    outcome: Outcome,
}

impl GameState {
    /// Creates a fresh game: empty board, X to move, in progress.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Some(Mark::X),
            outcome: Outcome::InProgress,
        }
    }

    /// Places `mark` at `pos` (unchecked; the engine validates first).
    pub(crate) fn place(&mut self, pos: Position, mark: Mark) {
        self.board.place(pos, mark);
    }

    /// Records the outcome after a placement by `mover`.
    ///
    /// A terminal outcome clears the player to move. Otherwise the turn passes.
    pub(crate) fn settle(&mut self, outcome: Outcome, mover: Mark) {
        self.outcome = outcome;
        self.to_move = if outcome.is_terminal() {
            None
        } else {
            Some(mover.opponent())
        };
    }

    #[cfg(test)]
    pub(crate) fn from_parts(board: Board, to_move: Option<Mark>, outcome: Outcome) -> Self {
        Self {
            board,
            to_move,
            outcome,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board)?;
        match self.to_move {
            Some(mark) => write!(f, "{} ({} to move)", self.outcome, mark),
            None => write!(f, "{}", self.outcome),
        }
    }
}
