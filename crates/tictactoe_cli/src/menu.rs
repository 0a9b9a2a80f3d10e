//! Start-up menus and line input.

use crate::cli::Mode;
use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};
use tictactoe_core::Difficulty;
use tracing::{debug, instrument, warn};

/// Reads one line and trims it.
///
/// # Errors
///
/// Fails when the input is closed or unreadable.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        bail!("Input closed before the game finished");
    }
    Ok(line.trim().to_string())
}

/// Asks for a numbered menu choice until a number is entered.
fn choose<R: BufRead, W: Write>(input: &mut R, output: &mut W, menu: &str) -> Result<u32> {
    loop {
        write!(output, "{}", menu)?;
        output.flush()?;
        let answer = read_line(input)?;
        match answer.parse::<u32>() {
            Ok(choice) => return Ok(choice),
            Err(_) => {
                warn!(%answer, "Menu input is not a number");
                writeln!(output, "Please enter a number.")?;
            }
        }
    }
}

/// Asks for the game mode. `2` selects the computer, any other number a
/// local two-player game.
///
/// # Errors
///
/// Fails when input or output fails.
#[instrument(skip_all)]
pub fn prompt_mode<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Mode> {
    let choice = choose(
        input,
        output,
        "Choose the mode:\n1. Player vs Player\n2. Player vs Computer\n",
    )?;
    let mode = if choice == 2 { Mode::Computer } else { Mode::Local };
    debug!(%mode, "Mode chosen");
    Ok(mode)
}

/// Asks for the computer's strength. `2` selects hard, any other number
/// easy.
///
/// # Errors
///
/// Fails when input or output fails.
#[instrument(skip_all)]
pub fn prompt_difficulty<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Difficulty> {
    let choice = choose(input, output, "Choose the Computer level:\n1. Easy\n2. Hard\n")?;
    let difficulty = if choice == 2 {
        Difficulty::Hard
    } else {
        Difficulty::Easy
    };
    debug!(%difficulty, "Difficulty chosen");
    Ok(difficulty)
}
