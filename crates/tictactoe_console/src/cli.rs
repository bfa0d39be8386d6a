//! Command-line interface for the tic-tac-toe console.

use clap::{Parser, Subcommand};

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Print game snapshots as JSON instead of a text grid
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively: type a cell number (1-9), `reset`, or `quit`
    Play,

    /// Replay a scripted game from a TOML file
    Replay {
        /// Path to the replay script
        script: std::path::PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay_with_json() {
        let cli = Cli::parse_from(["tictactoe", "replay", "games/diagonal.toml", "--json"]);
        assert!(cli.json);
        match cli.command {
            Command::Replay { script } => assert_eq!(script.to_str(), Some("games/diagonal.toml")),
            Command::Play => panic!("expected replay"),
        }
    }

    #[test]
    fn test_parse_play() {
        let cli = Cli::parse_from(["tictactoe", "play"]);
        assert!(!cli.json);
        assert!(matches!(cli.command, Command::Play));
    }
}
