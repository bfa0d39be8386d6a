//! Mark balance invariant: X leads O by at most one mark.

use super::Invariant;
use crate::{GameState, Mark};

/// Invariant: `count(X) - count(O)` is 0 or 1.
///
/// X moves first and turns alternate, so O can never be ahead.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Mark::X);
        let o = state.board().count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X leads O by zero or one mark"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Outcome, Position};

    #[test]
    fn test_x_one_ahead_holds() {
        let mut board = Board::new();
        board.place(Position::Center, Mark::X);
        let state = GameState::from_parts(board, Some(Mark::O), Outcome::InProgress);
        assert!(MarkBalanceInvariant::holds(&state));
    }

    #[test]
    fn test_x_two_ahead_violates() {
        let mut board = Board::new();
        board.place(Position::Center, Mark::X);
        board.place(Position::TopLeft, Mark::X);
        let state = GameState::from_parts(board, Some(Mark::O), Outcome::InProgress);
        assert!(!MarkBalanceInvariant::holds(&state));
    }

    #[test]
    fn test_o_ahead_violates() {
        let mut board = Board::new();
        board.place(Position::Center, Mark::O);
        let state = GameState::from_parts(board, Some(Mark::X), Outcome::InProgress);
        assert!(!MarkBalanceInvariant::holds(&state));
    }
}
