//! Results of selecting a cell.
//!
//! A successful selection yields a [`Placement`] describing what changed.
//! A failed one yields a [`SelectError`], and the game is left exactly as it was.

use super::{Mark, Outcome, Position};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A mark placed on the board, and where it left the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct Placement {
    /// The mark that was placed.
    mark: Mark,
    /// Where it was placed.
    position: Position,
    /// Outcome after the placement.
    outcome: Outcome,
    /// The completed triple, when this placement won the game.
    winning_line: Option<[Position; 3]>,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a selection was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SelectError {
    /// The game is already decided; only a reset accepts input now.
    #[display("The game is over ({}), so no more selections can be made", _0)]
    GameDecided(Outcome),

    /// The cell already holds a mark.
    #[display("The cell {} has already been selected by the {} player", position, occupant)]
    CellOccupied {
        /// The cell that was selected.
        position: Position,
        /// The mark already there.
        occupant: Mark,
    },

    /// The index does not name a cell (must be 0-8).
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),
}

impl SelectError {
    /// True for the two recoverable notices (decided game, occupied cell).
    ///
    /// `OutOfBounds` is a caller bug rather than a game event.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, SelectError::OutOfBounds(_))
    }
}

impl std::error::Error for SelectError {}
