//! One-shot position analysis.

use crate::render::render;
use anyhow::{Context, Result};
use std::io::Write;
use tictactoe_core::{Board, Mark, Minimax};
use tracing::instrument;

/// Prints the board, its outcome and, for an unfinished board, the minimax
/// value with X to move and X's best move (1-based row and column).
///
/// # Errors
///
/// Fails on unparsable notation or output errors.
#[instrument(skip(output))]
pub fn analyze<W: Write>(notation: &str, output: &mut W) -> Result<()> {
    let mut board: Board = notation
        .parse()
        .with_context(|| format!("Invalid board {:?}", notation))?;

    write!(output, "{}", render(&board))?;
    writeln!(output, "Outcome: {}", board.outcome())?;

    if board.outcome().is_terminal() {
        return Ok(());
    }

    if board.count(Mark::X) > board.count(Mark::O) {
        writeln!(output, "Note: X has more marks, but the analysis assumes X to move")?;
    }

    let mut search = Minimax::new();
    let (pos, score) = search.best_move_scored(&mut board)?;
    writeln!(output, "Value for X to move: {}", score)?;
    writeln!(
        output,
        "Best move for X: {} (row {}, column {})",
        pos,
        pos.row() + 1,
        pos.col() + 1
    )?;
    writeln!(output, "Positions searched: {}", search.nodes())?;
    Ok(())
}
