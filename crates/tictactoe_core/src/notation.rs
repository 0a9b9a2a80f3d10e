//! Compact text notation for boards.
//!
//! A board is written as nine cells in row-major order: `X`, `O`, and
//! `.` (or `-`, `_`) for empty. Whitespace and `/` are ignored, so
//! `"XO./.X./..O"` and `"XO. .X. ..O"` describe the same board.

use super::{Board, Cell, Mark, Position};
use std::str::FromStr;

/// Error produced when parsing board notation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// The notation does not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),

    /// A character is not a mark or an empty-cell symbol.
    #[display("Unexpected character {:?} in board notation", _0)]
    InvalidChar(char),
}

impl std::error::Error for BoardParseError {}

fn parse_cell(ch: char) -> Result<Cell, BoardParseError> {
    match ch {
        'X' | 'x' => Ok(Cell::Occupied(Mark::X)),
        'O' | 'o' => Ok(Cell::Occupied(Mark::O)),
        '.' | '-' | '_' => Ok(Cell::Empty),
        other => Err(BoardParseError::InvalidChar(other)),
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|ch| !ch.is_whitespace() && *ch != '/')
            .map(parse_cell)
            .collect::<Result<Vec<_>, _>>()?;

        if cells.len() != Position::ALL.len() {
            return Err(BoardParseError::WrongLength(cells.len()));
        }

        let mut board = Board::new();
        for (pos, cell) in Position::ALL.into_iter().zip(cells) {
            if let Cell::Occupied(mark) = cell {
                board.set(pos, mark);
            }
        }
        Ok(board)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, cell) in self.cells().iter().enumerate() {
            if idx > 0 && idx % 3 == 0 {
                write!(f, "/")?;
            }
            let symbol = match cell {
                Cell::Empty => '.',
                Cell::Occupied(Mark::X) => 'X',
                Cell::Occupied(Mark::O) => 'O',
            };
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_separators() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Cell::Occupied(Mark::X));
        assert_eq!(board.get(Position::TopCenter), Cell::Occupied(Mark::O));
        assert_eq!(board.get(Position::Center), Cell::Occupied(Mark::X));
        assert_eq!(board.get(Position::BottomRight), Cell::Occupied(Mark::O));
        assert_eq!(board.count(Mark::X), 2);
        assert_eq!(board.count(Mark::O), 2);
    }

    #[test]
    fn test_display_matches_parse() {
        let text = "XO./.X./..O";
        let board: Board = text.parse().unwrap();
        assert_eq!(board.to_string(), text);
        assert_eq!(Board::new().to_string(), ".../.../...");
    }

    #[test]
    fn test_alternate_empty_symbols_and_case() {
        let board: Board = "x-_ o.. ...".parse().unwrap();
        assert_eq!(board.to_string(), "X../O../...");
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(
            "XO.".parse::<Board>(),
            Err(BoardParseError::WrongLength(3))
        );
        assert_eq!(
            "XXXXXXXXXX".parse::<Board>(),
            Err(BoardParseError::WrongLength(10))
        );
    }

    #[test]
    fn test_invalid_char() {
        assert_eq!(
            "XO.Z.....".parse::<Board>(),
            Err(BoardParseError::InvalidChar('Z'))
        );
    }
}
