//! Exhaustive minimax search.
//!
//! X is always the maximizing side and O the minimizing side. Terminal
//! positions score [`WIN`], [`LOSS`] or [`DRAW`] with no depth discount,
//! so a win three plies away is worth as much as a win on the next move.
//! The search walks the whole remaining game tree without pruning.

mod probe;
mod random;

pub use random::random_move;

use crate::{Board, Mark, MoveError, Position};
use probe::Probe;
use tracing::{debug, instrument, trace};

/// Value of a position from X's point of view.
pub type Score = i32;

/// X has completed a line.
pub const WIN: Score = 10;

/// O has completed a line.
pub const LOSS: Score = -10;

/// Drawn or still undecided.
pub const DRAW: Score = 0;

/// Scores a position by its completed lines only.
///
/// Returns [`DRAW`] for both drawn and unfinished boards; check
/// [`Board::outcome`] to tell them apart.
pub fn evaluate(board: &Board) -> Score {
    if board.winner(Mark::X) {
        WIN
    } else if board.winner(Mark::O) {
        LOSS
    } else {
        DRAW
    }
}

/// Game-theoretic value of `board` with `X` to move when `is_maximizing`.
///
/// The board is borrowed mutably for hypothetical moves and is identical
/// to its input when this returns.
pub fn minimax(board: &mut Board, is_maximizing: bool) -> Score {
    Minimax::new().minimax(board, is_maximizing)
}

/// Optimal move for X.
///
/// # Errors
///
/// Returns [`MoveError::NoLegalMove`] on a full board.
pub fn best_move(board: &mut Board) -> Result<Position, MoveError> {
    Minimax::new().best_move(board)
}

/// Minimax searcher that counts the positions it visits.
#[derive(Debug, Clone, Default)]
pub struct Minimax {
    nodes: u64,
}

impl Minimax {
    /// Creates a searcher with a zero node count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions visited since the last [`Minimax::best_move`] (or creation).
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Recursive value function. See [`minimax`].
    pub fn minimax(&mut self, board: &mut Board, is_maximizing: bool) -> Score {
        self.nodes += 1;

        let score = evaluate(board);
        if score != DRAW {
            return score;
        }
        if board.is_full() {
            return DRAW;
        }

        let mark = if is_maximizing { Mark::X } else { Mark::O };
        let mut best: Option<Score> = None;

        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }

            let score = {
                let mut probe = Probe::place(board, pos, mark);
                self.minimax(&mut probe, !is_maximizing)
            };

            best = Some(match best {
                None => score,
                Some(best) if is_maximizing => best.max(score),
                Some(best) => best.min(score),
            });
        }

        // Not full, so at least one child was scored.
        best.unwrap_or(DRAW)
    }

    /// Optimal move for X. See [`best_move`].
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoLegalMove`] on a full board.
    pub fn best_move(&mut self, board: &mut Board) -> Result<Position, MoveError> {
        self.best_move_scored(board).map(|(pos, _)| pos)
    }

    /// Optimal move for X together with its minimax value.
    ///
    /// Candidates are tried in row-major order and only a strictly better
    /// score replaces the current choice, so ties go to the first cell.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoLegalMove`] on a full board.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn best_move_scored(&mut self, board: &mut Board) -> Result<(Position, Score), MoveError> {
        self.nodes = 0;
        let mut best: Option<(Position, Score)> = None;

        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }

            let score = {
                let mut probe = Probe::place(board, pos, Mark::X);
                self.minimax(&mut probe, false)
            };
            trace!(position = %pos, score, "Scored candidate");

            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }

        let (pos, score) = best.ok_or(MoveError::NoLegalMove)?;
        debug!(position = %pos, score, nodes = self.nodes, "Best move chosen");
        Ok((pos, score))
    }
}
