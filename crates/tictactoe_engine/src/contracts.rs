//! Contract-based validation for cell selection.
//!
//! Contracts pair preconditions, checked before every selection, with
//! postconditions that compare the state before and after a selection.
//! The engine checks postconditions in debug builds only.

use super::action::SelectError;
use super::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use super::{Cell, GameState, Position};
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), SelectError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: the game has not been decided.
pub struct GameUndecided;

impl GameUndecided {
    /// Rejects any selection once the outcome is terminal.
    pub fn check(state: &GameState) -> Result<(), SelectError> {
        let outcome = *state.outcome();
        if outcome.is_terminal() {
            Err(SelectError::GameDecided(outcome))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the selected cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects a selection of an occupied cell.
    pub fn check(state: &GameState, position: Position) -> Result<(), SelectError> {
        match state.board().get(position) {
            Cell::Empty => Ok(()),
            Cell::Occupied(occupant) => Err(SelectError::CellOccupied { position, occupant }),
        }
    }
}

/// Postcondition: exactly one cell went from empty to occupied, nothing else changed.
pub struct MonotonicBoard;

impl MonotonicBoard {
    /// Compares boards cell by cell.
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        let mut filled = 0;
        for (old, new) in before.board().cells().iter().zip(after.board().cells()) {
            match (old, new) {
                (a, b) if a == b => {}
                (Cell::Empty, Cell::Occupied(_)) => filled += 1,
                _ => return false,
            }
        }
        filled == 1
    }

    /// Human-readable description.
    pub fn description() -> &'static str {
        "Exactly one empty cell becomes occupied and no cell changes otherwise"
    }
}

/// Contract for selecting a cell.
///
/// Preconditions, in order (the first failure decides the error):
/// 1. The game is undecided.
/// 2. The cell is empty.
///
/// Postconditions:
/// - The board changed monotonically by exactly one cell.
/// - All [`GameInvariants`] hold.
pub struct SelectContract;

impl Contract<GameState, Position> for SelectContract {
    #[instrument(skip(state))]
    fn pre(state: &GameState, position: &Position) -> Result<(), SelectError> {
        GameUndecided::check(state)?;
        CellIsEmpty::check(state, *position)?;
        Ok(())
    }

    #[instrument(skip_all)]
    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = GameInvariants::check_all(after).err().unwrap_or_default();
        if !MonotonicBoard::holds(before, after) {
            violations.push(InvariantViolation::new(MonotonicBoard::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            warn!(?violations, "Selection postcondition failed");
            Err(violations)
        }
    }
}
