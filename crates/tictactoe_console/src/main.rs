//! Tic-tac-toe console entry point.

use anyhow::Result;
use clap::Parser;
use tictactoe_console::{Cli, Command, Format, ReplayScript, run_interactive, run_replay};
use tictactoe_engine::GameEngine;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = Format::from_flag(cli.json);
    let stdout = std::io::stdout();
    let mut output = stdout.lock();

    match cli.command {
        Command::Play => {
            info!("Starting interactive game");
            let mut engine = GameEngine::new();
            run_interactive(&mut engine, std::io::stdin().lock(), &mut output, format)
        }
        Command::Replay { script } => {
            let script = ReplayScript::from_file(&script)?;
            run_replay(&script, &mut output, format)?;
            Ok(())
        }
    }
}
