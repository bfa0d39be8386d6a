//! Turn invariant: the player to move follows from the board and outcome.

use super::Invariant;
use crate::{GameState, Mark};

/// Invariant: while in progress, X moves on equal counts and O otherwise.
/// Once decided, nobody moves.
pub struct TurnConsistentInvariant;

impl Invariant<GameState> for TurnConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        if state.outcome().is_terminal() {
            return state.to_move().is_none();
        }

        let expected = if state.board().count(Mark::X) == state.board().count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        };
        *state.to_move() == Some(expected)
    }

    fn description() -> &'static str {
        "Player to move alternates X, O, ... and is absent once decided"
    }
}
