//! Uniform random move selection.

use crate::{Board, MoveError, Position};
use rand::seq::SliceRandom;
use rand::Rng;

/// Picks an empty cell uniformly at random.
///
/// Samples from the set of legal cells directly, so it never retries.
///
/// # Errors
///
/// Returns [`MoveError::NoLegalMove`] on a full board.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<Position, MoveError> {
    board
        .empty_positions()
        .choose(rng)
        .copied()
        .ok_or(MoveError::NoLegalMove)
}
