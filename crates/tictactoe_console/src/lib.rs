//! Terminal presentation layer for the tic-tac-toe engine.
//!
//! Reads cell selections from the user (or a replay script), forwards them to
//! [`tictactoe_engine::GameEngine`], and prints the resulting snapshot.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod render;
mod script;
mod session;

pub use cli::{Cli, Command};
pub use render::{Format, render_text, status_line};
pub use script::{ConfigError, ExpectedOutcome, ReplayScript};
pub use session::{Input, InputError, run_interactive, run_replay};
