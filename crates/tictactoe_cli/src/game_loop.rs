//! Interactive game loop.

use crate::cli::Mode;
use crate::config::GameConfig;
use crate::menu::{prompt_difficulty, prompt_mode, read_line};
use crate::render::render;
use anyhow::Result;
use std::io::{BufRead, Write};
use tictactoe_core::{
    Difficulty, GameInProgress, GameResult, GameSetup, Mark, Move, Outcome, Strategy,
};
use tracing::{info, instrument, warn};

/// Resolved choices for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Local two-player game or against the computer.
    pub mode: Mode,
    /// Computer strength; `None` in local games.
    pub difficulty: Option<Difficulty>,
}

impl Settings {
    /// Combines command-line choices and config, asking for whatever is
    /// still missing. Flags win over the config file.
    ///
    /// # Errors
    ///
    /// Fails when a menu prompt cannot read an answer.
    #[instrument(skip(config, input, output))]
    pub fn resolve<R: BufRead, W: Write>(
        mode: Option<Mode>,
        difficulty: Option<Difficulty>,
        config: &GameConfig,
        input: &mut R,
        output: &mut W,
    ) -> Result<Self> {
        let mode = match mode.or(*config.mode()) {
            Some(mode) => mode,
            None => prompt_mode(input, output)?,
        };

        let difficulty = match mode {
            Mode::Local => None,
            Mode::Computer => Some(match difficulty.or(*config.difficulty()) {
                Some(difficulty) => difficulty,
                None => prompt_difficulty(input, output)?,
            }),
        };

        Ok(Self { mode, difficulty })
    }

    /// Builds the computer opponent, if this is a game against one.
    pub fn computer(&self) -> Option<Box<dyn Strategy>> {
        self.difficulty.map(Difficulty::strategy)
    }
}

/// Plays one game to the end and returns its outcome.
///
/// With a `computer`, it plays X and moves first; otherwise both marks are
/// entered by hand. Human input is a 1-based row then column; anything
/// unparsable, off the board or occupied is rejected and asked again.
///
/// # Errors
///
/// Fails when input closes before the game ends, on I/O errors, or when the
/// computer cannot find a move.
#[instrument(skip_all, fields(vs_computer = computer.is_some()))]
pub fn play<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    mut computer: Option<Box<dyn Strategy>>,
) -> Result<Outcome> {
    let vs_computer = computer.is_some();
    let mut game = GameSetup::new().start();

    loop {
        write!(output, "{}", render(game.board()))?;

        let action = match computer.as_deref_mut() {
            Some(strategy) if game.to_move() == Mark::X => {
                writeln!(output, "Computer's Turn (X):")?;
                let pos = strategy.choose_move(&mut game.scratch_board())?;
                info!(position = %pos, strategy = strategy.name(), "Computer moved");
                Move::new(Mark::X, pos)
            }
            _ => match prompt_move(input, output, &game)? {
                Some(action) => action,
                None => {
                    writeln!(output, "Invalid move! Try again.")?;
                    continue;
                }
            },
        };

        match game.make_move(action)? {
            GameResult::InProgress(next) => game = next,
            GameResult::Finished(done) => {
                write!(output, "{}", render(done.board()))?;
                writeln!(output, "{}", result_message(done.outcome(), vs_computer))?;
                output.flush()?;
                return Ok(*done.outcome());
            }
        }
    }
}

/// Reads a 1-based row and column for the side to move.
///
/// Returns `None` when the input is not a legal move.
fn prompt_move<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    game: &GameInProgress,
) -> Result<Option<Move>> {
    writeln!(output, "Player {}'s Turn:", game.to_move())?;
    write!(output, "Enter row (1-3): ")?;
    output.flush()?;
    let row = read_line(input)?;
    write!(output, "Enter column (1-3): ")?;
    output.flush()?;
    let col = read_line(input)?;

    let action = parse_coordinate(&row)
        .zip(parse_coordinate(&col))
        .and_then(|(row, col)| Move::at(game.to_move(), row, col))
        .filter(|action| game.check(action).is_ok());

    if action.is_none() {
        warn!(%row, %col, "Rejected move input");
    }
    Ok(action)
}

/// Converts 1-based text input to a 0-based index.
fn parse_coordinate(text: &str) -> Option<usize> {
    text.parse::<usize>().ok()?.checked_sub(1)
}

fn result_message(outcome: &Outcome, vs_computer: bool) -> &'static str {
    match outcome {
        Outcome::Winner(Mark::X) if vs_computer => "Computer Wins!",
        Outcome::Winner(Mark::X) => "Player X Wins!",
        Outcome::Winner(Mark::O) => "Player O Wins!",
        Outcome::Draw => "It's a Tie!",
    }
}
