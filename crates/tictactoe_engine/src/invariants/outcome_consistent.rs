//! Outcome invariant: the recorded outcome agrees with the board.

use super::Invariant;
use crate::rules::{check_winner, has_won, is_full};
use crate::{GameState, Mark, Outcome};

/// Invariant: the outcome is what the board says it is.
///
/// - `InProgress`: no triple is complete and an empty cell remains.
/// - `Won(m)`: `m` holds a triple, the opponent does not, and `m` moved last.
/// - `Draw`: the board is full and nobody holds a triple.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        match *state.outcome() {
            Outcome::InProgress => check_winner(board).is_none() && !is_full(board),
            Outcome::Won(mark) => {
                let x = board.count(Mark::X);
                let o = board.count(Mark::O);
                let moved_last = match mark {
                    Mark::X => x == o + 1,
                    Mark::O => x == o,
                };
                has_won(board, mark) && !has_won(board, mark.opponent()) && moved_last
            }
            Outcome::Draw => is_full(board) && check_winner(board).is_none(),
        }
    }

    fn description() -> &'static str {
        "Outcome matches the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position};

    #[test]
    fn test_fresh_game_holds() {
        assert!(OutcomeConsistentInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_unrecorded_win_violates() {
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            board.place(pos, Mark::X);
        }
        board.place(Position::Center, Mark::O);
        board.place(Position::BottomLeft, Mark::O);
        let state = GameState::from_parts(board.clone(), Some(Mark::O), Outcome::InProgress);
        assert!(!OutcomeConsistentInvariant::holds(&state));

        let state = GameState::from_parts(board, None, Outcome::Won(Mark::X));
        assert!(OutcomeConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_premature_draw_violates() {
        let state = GameState::from_parts(Board::new(), None, Outcome::Draw);
        assert!(!OutcomeConsistentInvariant::holds(&state));
    }
}
