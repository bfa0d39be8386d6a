//! Game sessions: the loop between a player's input and the engine.
//!
//! The session forwards selections to the engine and writes the resulting
//! snapshot. It holds no game rules of its own.

use crate::render::Format;
use crate::script::ReplayScript;
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tictactoe_engine::{GameEngine, GameState, SelectError};
use tracing::{debug, info, instrument, warn};

/// One line of interactive input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Select a cell by engine index (0-8).
    Select(usize),
    /// Start over.
    Reset,
    /// Leave the session.
    Quit,
    /// Show usage.
    Help,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Unrecognized input {:?}: type a cell number 1-9, `reset`, or `quit`", _0)]
pub struct InputError(pub String);

impl std::error::Error for InputError {}

impl FromStr for Input {
    type Err = InputError;

    /// Cells are numbered 1-9 as drawn on the board.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "r" | "reset" => Ok(Input::Reset),
            "q" | "quit" | "exit" => Ok(Input::Quit),
            "h" | "help" | "?" => Ok(Input::Help),
            other => other
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .map(Input::Select)
                .ok_or_else(|| InputError(trimmed.to_string())),
        }
    }
}

const HELP: &str = "Type a cell number (1-9) to mark it, `reset` to start over, or `quit` to leave.";

/// Runs an interactive session until `quit` or end of input.
///
/// Rejected selections are reported and play continues.
#[instrument(skip_all, fields(format = ?format))]
pub fn run_interactive<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    input: R,
    output: &mut W,
    format: Format,
) -> Result<()> {
    info!("Starting interactive session");
    writeln!(output, "{}", format.render(&engine.status())?)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Input>() {
            Ok(command) => command,
            Err(e) => {
                debug!(error = %e, "Bad input");
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        match command {
            Input::Quit => break,
            Input::Help => {
                writeln!(output, "{}", HELP)?;
                continue;
            }
            Input::Reset => engine.reset(),
            Input::Select(index) => {
                if let Err(e) = engine.select_cell(index) {
                    writeln!(output, "{}", notice(&e))?;
                    continue;
                }
            }
        }

        writeln!(output, "{}", format.render(&engine.status())?)?;
    }

    info!("Interactive session ended");
    Ok(())
}

/// Plays a replay script on a fresh engine and returns the final snapshot.
///
/// Rejected selections are reported and skipped. An out-of-range index or an
/// unmet expectation is an error.
#[instrument(skip_all, fields(name = %script.name()))]
pub fn run_replay<W: Write>(script: &ReplayScript, output: &mut W, format: Format) -> Result<GameState> {
    let mut engine = GameEngine::new();
    if format == Format::Text {
        writeln!(output, "Replaying {}", script.name())?;
    }

    for (step, index) in script.moves().iter().enumerate() {
        match engine.select_cell(*index) {
            Ok(placement) => {
                debug!(step, %placement, "Replayed move");
                writeln!(output, "{}", format.render(&engine.status())?)?;
            }
            Err(e) if e.is_rejection() => {
                warn!(step, error = %e, "Replay move rejected");
                writeln!(output, "{}", notice(&e))?;
            }
            Err(e) => {
                return Err(anyhow::Error::new(e).context(format!("Replay step {} is invalid", step + 1)));
            }
        }
    }

    let status = engine.status();
    if let Some(expected) = script.expect()
        && !expected.matches(*status.outcome())
    {
        bail!(
            "Replay {:?} ended with {} but expected {}",
            script.name(),
            status.outcome(),
            expected
        );
    }

    info!(outcome = %status.outcome(), "Replay finished");
    Ok(status)
}

fn notice(error: &SelectError) -> String {
    format!("Notice: {}", error)
}
