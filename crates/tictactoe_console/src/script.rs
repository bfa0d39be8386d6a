//! Replay scripts: scripted games loaded from TOML.
//!
//! ```toml
//! name = "diagonal win"
//! moves = [0, 1, 4, 2, 8]
//! expect = "x"
//! ```
//!
//! Moves are engine cell indices (0-8, row-major).

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::{Mark, Outcome};
use tracing::{debug, info, instrument};

/// A scripted game.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct ReplayScript {
    /// Name shown when the replay starts.
    #[serde(default = "default_name")]
    name: String,

    /// Cell indices to select, in order.
    moves: Vec<usize>,

    /// Outcome the replay should end in, if checked.
    #[serde(default)]
    expect: Option<ExpectedOutcome>,
}

fn default_name() -> String {
    "unnamed replay".to_string()
}

impl ReplayScript {
    /// Creates a script from a list of moves.
    pub fn new(name: impl Into<String>, moves: Vec<usize>, expect: Option<ExpectedOutcome>) -> Self {
        Self {
            name: name.into(),
            moves,
            expect,
        }
    }

    /// Loads a script from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading replay script");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read replay script: {}", e)))?;

        let script = Self::from_toml(&content)?;
        info!(name = %script.name, moves = script.moves.len(), "Replay script loaded");
        Ok(script)
    }

    /// Parses a script from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse replay script: {}", e)))
    }
}

/// Expected final outcome of a replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedOutcome {
    /// X wins.
    #[display("X wins")]
    X,
    /// O wins.
    #[display("O wins")]
    O,
    /// Draw.
    #[display("draw")]
    Draw,
    /// Still undecided.
    #[display("in progress")]
    InProgress,
}

impl ExpectedOutcome {
    /// Checks an engine outcome against this expectation.
    pub fn matches(self, outcome: Outcome) -> bool {
        matches!(
            (self, outcome),
            (ExpectedOutcome::X, Outcome::Won(Mark::X))
                | (ExpectedOutcome::O, Outcome::Won(Mark::O))
                | (ExpectedOutcome::Draw, Outcome::Draw)
                | (ExpectedOutcome::InProgress, Outcome::InProgress)
        )
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
