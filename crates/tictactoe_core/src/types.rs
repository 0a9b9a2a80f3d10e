//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use super::rules;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Mark X (moves first, maximizing side).
    X,
    /// Mark O (moves second, minimizing side).
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Gets the cell at `(row, col)`, or `None` off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        Position::from_coords(row, col).map(|pos| self.get(pos))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Checks if the cell at the given position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Checks that `(row, col)` is on the board and empty.
    pub fn is_move_valid(&self, row: usize, col: usize) -> bool {
        matches!(self.cell(row, col), Some(Cell::Empty))
    }

    /// Places `mark` at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidMove`] if the coordinates are off the
    /// board or the cell is already occupied. The board is left untouched.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), MoveError> {
        match Position::from_coords(row, col) {
            Some(pos) if self.is_empty(pos) => {
                self.set(pos, mark);
                Ok(())
            }
            _ => Err(MoveError::InvalidMove { row, col }),
        }
    }

    /// Places `mark` at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidMove`] if the cell is already occupied.
    pub fn place_at(&mut self, pos: Position, mark: Mark) -> Result<(), MoveError> {
        self.place(pos.row(), pos.col(), mark)
    }

    /// Resets the cell at `(row, col)` to empty.
    ///
    /// Only the search backtracking uses this; games never take moves back.
    pub(crate) fn clear(&mut self, row: usize, col: usize) {
        if let Some(pos) = Position::from_coords(row, col) {
            self.cells[pos.to_index()] = Cell::Empty;
        }
    }

    /// Writes a mark without validation.
    pub(crate) fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.to_index()] = Cell::Occupied(mark);
    }

    /// Checks if no empty cell remains.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Checks if `mark` fills any of the eight lines.
    pub fn winner(&self, mark: Mark) -> bool {
        rules::has_line(self, mark)
    }

    /// Derives the game outcome from the board.
    ///
    /// A completed line wins even when it also fills the board.
    pub fn outcome(&self) -> GameOutcome {
        if self.winner(Mark::X) {
            GameOutcome::Won(Mark::X)
        } else if self.winner(Mark::O) {
            GameOutcome::Won(Mark::O)
        } else if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    /// Counts the cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(mark))
            .count()
    }

    /// Returns the empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::valid_moves(self)
    }
}

/// Outcome of a board, recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// No line and at least one empty cell.
    InProgress,
    /// A player completed a line.
    Won(Mark),
    /// Full board without a line.
    Draw,
}

impl GameOutcome {
    /// Checks if the game is over.
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Won(mark) => write!(f, "Player {} wins", mark),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.cells().iter().all(|c| c.is_empty()));
        assert_eq!(board.outcome(), GameOutcome::InProgress);
    }

    #[test]
    fn test_is_move_valid_bounds() {
        let board = Board::new();
        assert!(board.is_move_valid(0, 0));
        assert!(board.is_move_valid(2, 2));
        assert!(!board.is_move_valid(3, 0));
        assert!(!board.is_move_valid(0, 3));
        assert!(!board.is_move_valid(usize::MAX, 1));
    }

    #[test]
    fn test_place_rejects_occupied() {
        let mut board = Board::new();
        board.place(1, 1, Mark::X).unwrap();
        assert!(!board.is_move_valid(1, 1));
        assert_eq!(
            board.place(1, 1, Mark::O),
            Err(MoveError::InvalidMove { row: 1, col: 1 })
        );
        assert_eq!(board.get(Position::Center), Cell::Occupied(Mark::X));
    }

    #[test]
    fn test_place_rejects_off_board() {
        let mut board = Board::new();
        assert_eq!(
            board.place(0, 5, Mark::X),
            Err(MoveError::InvalidMove { row: 0, col: 5 })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_place_then_clear_restores_board() {
        let mut board = Board::new();
        board.place(0, 0, Mark::X).unwrap();
        board.place(2, 1, Mark::O).unwrap();
        let before = board.clone();

        for pos in board.empty_positions() {
            for mark in [Mark::X, Mark::O] {
                board.place_at(pos, mark).unwrap();
                board.clear(pos.row(), pos.col());
                assert_eq!(board, before);
            }
        }
    }

    #[test]
    fn test_count_marks() {
        let mut board = Board::new();
        board.place(0, 0, Mark::X).unwrap();
        board.place(0, 1, Mark::O).unwrap();
        board.place(0, 2, Mark::X).unwrap();
        assert_eq!(board.count(Mark::X), 2);
        assert_eq!(board.count(Mark::O), 1);
    }

    #[test]
    fn test_full_board_with_line_is_win() {
        // X X X / O O X / X O O
        let mut board = Board::new();
        for (row, col, mark) in [
            (0, 0, Mark::X),
            (0, 1, Mark::X),
            (0, 2, Mark::X),
            (1, 0, Mark::O),
            (1, 1, Mark::O),
            (1, 2, Mark::X),
            (2, 0, Mark::X),
            (2, 1, Mark::O),
            (2, 2, Mark::O),
        ] {
            board.place(row, col, mark).unwrap();
        }
        assert!(board.is_full());
        assert_eq!(board.outcome(), GameOutcome::Won(Mark::X));
    }
}
