//! Phase-specific typestate structs for tic-tac-toe.
//!
//! Each phase is its own distinct type with phase-specific fields.
//! A `GameFinished` ALWAYS has an outcome, and only a `GameInProgress`
//! accepts moves, so no move can be issued after a terminal position.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::{Board, GameOutcome, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase - ready to start.
#[derive(Debug, Clone, Default)]
pub struct GameSetup {
    board: Board,
}

impl GameSetup {
    /// Creates a new game in setup phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the (empty) board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the game with X to move.
    #[instrument(skip(self))]
    pub fn start(self) -> GameInProgress {
        info!("Game started");
        GameInProgress {
            board: self.board,
            history: Vec::new(),
            to_move: Mark::X,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - can accept moves.
#[derive(Debug, Clone)]
pub struct GameInProgress {
    pub(super) board: Board,
    pub(super) history: Vec<Move>,
    pub(super) to_move: Mark,
}

impl GameInProgress {
    /// Makes a move, consuming self and transitioning to the next state.
    ///
    /// On error the game is lost with `self`; use [`GameInProgress::check`]
    /// first when the caller needs to keep playing after a rejected move.
    ///
    /// # Errors
    ///
    /// - [`MoveError::WrongPlayer`] if `action.mark` is not to move
    /// - [`MoveError::InvalidMove`] if the cell is occupied
    /// - [`MoveError::InvariantViolation`] if a postcondition fails (debug builds)
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn make_move(self, action: Move) -> Result<GameResult, MoveError> {
        self.check(&action)?;

        let mut game = self;
        game.board.place_at(action.position, action.mark)?;
        game.history.push(action);
        debug!(%action, board = %game.board, "Move applied");

        #[cfg(debug_assertions)]
        MoveContract::post(&game)?;

        match game.board.outcome() {
            GameOutcome::Won(winner) => {
                Ok(GameResult::Finished(game.finish(Outcome::Winner(winner))))
            }
            GameOutcome::Draw => Ok(GameResult::Finished(game.finish(Outcome::Draw))),
            GameOutcome::InProgress => {
                game.to_move = game.to_move.opponent();
                Ok(GameResult::InProgress(game))
            }
        }
    }

    /// Checks a move against the current position without applying it.
    ///
    /// # Errors
    ///
    /// Same as [`GameInProgress::make_move`].
    pub fn check(&self, action: &Move) -> Result<(), MoveError> {
        MoveContract::pre(self, action)
    }

    /// Places the mark of the side to move at zero-based `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidMove`] for off-board coordinates or an
    /// occupied cell.
    pub fn play(self, row: usize, col: usize) -> Result<GameResult, MoveError> {
        let action = Move::at(self.to_move, row, col).ok_or(MoveError::InvalidMove { row, col })?;
        self.make_move(action)
    }

    /// Returns the mark to move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns a mutable copy of the board for searching.
    pub fn scratch_board(&self) -> Board {
        self.board.clone()
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns empty positions in row-major order.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Replays moves from the initial state.
    ///
    /// # Errors
    ///
    /// Returns the first move error encountered.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<GameResult, MoveError> {
        let mut game = GameSetup::new().start();

        for action in moves {
            match game.make_move(*action)? {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) => return Ok(GameResult::Finished(g)),
            }
        }

        Ok(GameResult::InProgress(game))
    }

    fn finish(self, outcome: Outcome) -> GameFinished {
        info!(%outcome, moves = self.history.len(), "Game over");
        GameFinished {
            board: self.board,
            history: self.history,
            outcome,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished - outcome determined.
#[derive(Debug, Clone)]
pub struct GameFinished {
    board: Board,
    history: Vec<Move>,
    outcome: Outcome,
}

impl GameFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Restarts the game (consumes finished, returns setup).
    pub fn restart(self) -> GameSetup {
        GameSetup::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Types
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Winner(Mark),
    /// Full board without a line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(*mark),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "Player {} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
