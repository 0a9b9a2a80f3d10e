//! Text rendering of the board.

use tictactoe_core::{Board, Cell, Mark};

const RULE: &str = "-------------";

/// Renders the board as a framed 3x3 grid, one line per text row.
pub fn render(board: &Board) -> String {
    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    for row in board.cells().chunks(3) {
        out.push('|');
        for cell in row {
            let symbol = match cell {
                Cell::Empty => ' ',
                Cell::Occupied(Mark::X) => 'X',
                Cell::Occupied(Mark::O) => 'O',
            };
            out.push(' ');
            out.push(symbol);
            out.push_str(" |");
        }
        out.push('\n');
        out.push_str(RULE);
        out.push('\n');
    }
    out
}
