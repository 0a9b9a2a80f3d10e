//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tictactoe_core::Difficulty;

/// Tic-tac-toe in the terminal, against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with an unbeatable minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game. Choices not given here or in the config are asked for.
    Play {
        /// Play against another human (local) or the computer
        #[arg(short, long, value_enum)]
        mode: Option<Mode>,

        /// Computer strength (easy or hard)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Path to a TOML config file (defaults to tictactoe.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the outcome, minimax value and best move for X
    Analyze {
        /// Board in row-major notation, e.g. "XO./.X./..O"
        board: String,
    },
}

/// Game mode.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    /// Two humans share the keyboard.
    Local,
    /// The computer plays X and moves first.
    Computer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_flags() {
        let cli = Cli::try_parse_from(["tictactoe", "play", "--mode", "computer", "-d", "easy"])
            .unwrap();
        match cli.command {
            Command::Play {
                mode,
                difficulty,
                config,
            } => {
                assert_eq!(mode, Some(Mode::Computer));
                assert_eq!(difficulty, Some(Difficulty::Easy));
                assert!(config.is_none());
            }
            Command::Analyze { .. } => panic!("expected play"),
        }
    }

    #[test]
    fn test_parse_play_without_flags() {
        let cli = Cli::try_parse_from(["tictactoe", "play"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Play {
                mode: None,
                difficulty: None,
                config: None
            }
        ));
    }

    #[test]
    fn test_rejects_unknown_difficulty() {
        assert!(Cli::try_parse_from(["tictactoe", "play", "-d", "medium"]).is_err());
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from(["tictactoe", "analyze", "XX./OO./..."]).unwrap();
        match cli.command {
            Command::Analyze { board } => assert_eq!(board, "XX./OO./..."),
            Command::Play { .. } => panic!("expected analyze"),
        }
    }
}
