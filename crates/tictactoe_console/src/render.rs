//! Text and JSON rendering of game snapshots.

use tictactoe_engine::{GameState, Outcome};

/// How snapshots are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// 3x3 grid plus a status line.
    #[default]
    Text,
    /// One JSON object per snapshot.
    Json,
}

impl Format {
    /// Chooses JSON when `json` is set.
    pub fn from_flag(json: bool) -> Self {
        if json { Format::Json } else { Format::Text }
    }

    /// Renders a snapshot in this format.
    pub fn render(self, state: &GameState) -> Result<String, serde_json::Error> {
        match self {
            Format::Text => Ok(render_text(state)),
            Format::Json => serde_json::to_string(state),
        }
    }
}

/// Status line: the next player while in progress, the result once decided.
pub fn status_line(state: &GameState) -> String {
    match (state.outcome(), state.to_move()) {
        (Outcome::Won(mark), _) => format!("Winner: {}", mark),
        (Outcome::Draw, _) => "Winner: Draw!".to_string(),
        (Outcome::InProgress, Some(mark)) => format!("Next Player: {}", mark),
        (Outcome::InProgress, None) => "Next Player: None".to_string(),
    }
}

/// Status line followed by the board grid.
pub fn render_text(state: &GameState) -> String {
    format!("{}\n{}", status_line(state), state.board())
}
