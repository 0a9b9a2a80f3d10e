//! Scoped hypothetical moves for backtracking search.

use crate::{Board, Mark, Position};
use std::ops::{Deref, DerefMut};

/// A mark placed on a borrowed board for the lifetime of the guard.
///
/// Dropping the probe clears the cell again, so the board is restored on
/// every exit path of the search, early returns and unwinding included.
pub(crate) struct Probe<'a> {
    board: &'a mut Board,
    pos: Position,
}

impl<'a> Probe<'a> {
    /// Places `mark` at `pos`. The cell must be empty.
    pub(crate) fn place(board: &'a mut Board, pos: Position, mark: Mark) -> Self {
        debug_assert!(board.is_empty(pos), "probe on occupied cell {:?}", pos);
        board.set(pos, mark);
        Self { board, pos }
    }
}

impl Deref for Probe<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Probe<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.board.clear(self.pos.row(), self.pos.col());
    }
}
