//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. The board itself only guarantees that a cell is written
//! once; turn order and mark counts are enforced here.

use super::action::{Move, MoveError};
use super::typestate::GameInProgress;
use super::{Board, Cell, Mark};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions on the state after the action.
    fn post(after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the cell at the move's position must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects moves onto an occupied cell.
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if game.board().is_empty(mov.position) {
            Ok(())
        } else {
            let (row, col) = mov.position.coords();
            Err(MoveError::InvalidMove { row, col })
        }
    }
}

/// Precondition: it must be the mark's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects moves by the side not to move.
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if mov.mark != game.to_move() {
            Err(MoveError::WrongPlayer(mov.mark))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: a move is legal if it's the mark's turn and the
/// cell is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        PlayersTurn::check(mov, game)?;
        CellIsEmpty::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Invariants
// ─────────────────────────────────────────────────────────────

/// Invariant: X moved first and the marks alternate, so
/// `count(X) - count(O)` is 0 or 1.
pub struct BoardConsistent;

impl BoardConsistent {
    /// Checks the mark counts on `board`.
    pub fn holds(board: &Board) -> bool {
        let x_count = board.count(Mark::X);
        let o_count = board.count(Mark::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Board consistency violated");
        }
        valid
    }
}

/// Invariant: history length matches occupied cells.
pub struct HistoryComplete;

impl HistoryComplete {
    /// Checks the history against the board.
    pub fn holds(game: &GameInProgress) -> bool {
        let filled = game
            .board()
            .cells()
            .iter()
            .filter(|c| **c != Cell::Empty)
            .count();
        let history_len = game.history().len();

        let valid = filled == history_len;
        if !valid {
            warn!(filled, history_len, "History completeness violated");
        }
        valid
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions: the mark is to move and its cell is empty.
/// Postconditions: mark counts are consistent and history matches the board.
pub struct MoveContract;

impl Contract<GameInProgress, Move> for MoveContract {
    fn pre(game: &GameInProgress, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(after: &GameInProgress) -> Result<(), MoveError> {
        let mut violations = Vec::new();
        if !BoardConsistent::holds(after.board()) {
            violations.push("mark counts out of turn order");
        }
        if !HistoryComplete::holds(after) {
            violations.push("history does not match board");
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: {}",
                violations.join("; ")
            )))
        }
    }
}
