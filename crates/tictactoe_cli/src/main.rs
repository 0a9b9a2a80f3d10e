//! Tic-tac-toe - terminal front end
//!
//! Play locally or against the minimax opponent, or analyze a position.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tictactoe_cli::{analyze, play, Cli, Command, GameConfig, Mode, Settings};
use tictactoe_core::Difficulty;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            mode,
            difficulty,
            config,
        } => run_play(mode, difficulty, config),
        Command::Analyze { board } => {
            let stdout = io::stdout();
            analyze(&board, &mut stdout.lock())
        }
    }
}

/// Run one interactive game on stdin/stdout
#[instrument]
fn run_play(
    mode: Option<Mode>,
    difficulty: Option<Difficulty>,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = GameConfig::load(config.as_deref()).context("Failed to load configuration")?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    writeln!(output, "Welcome to Tic Tac Toe!")?;
    let settings = Settings::resolve(mode, difficulty, &config, &mut input, &mut output)?;
    info!(?settings, "Starting game");

    let outcome = play(&mut input, &mut output, settings.computer())?;
    info!(%outcome, "Game finished");
    Ok(())
}
