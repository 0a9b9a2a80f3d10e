//! Computer opponents.

use super::search::{random_move, Minimax};
use super::{Board, MoveError, Position};
use rand::rngs::ThreadRng;
use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Trait for computer players that pick moves for X.
pub trait Strategy {
    /// Chooses a move on `board`.
    ///
    /// The board may be used as scratch space but is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoLegalMove`] on a full board.
    fn choose_move(&mut self, board: &mut Board) -> Result<Position, MoveError>;

    /// Returns the strategy's display name.
    fn name(&self) -> &str;
}

/// Perfect play through exhaustive minimax.
#[derive(Debug, Clone, Default)]
pub struct MinimaxStrategy {
    search: Minimax,
}

impl MinimaxStrategy {
    /// Creates a new minimax strategy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.search.nodes()
    }
}

impl Strategy for MinimaxStrategy {
    fn choose_move(&mut self, board: &mut Board) -> Result<Position, MoveError> {
        self.search.best_move(board)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

/// Uniformly random legal moves.
#[derive(Debug, Clone)]
pub struct RandomStrategy<R = ThreadRng> {
    rng: R,
}

impl RandomStrategy<ThreadRng> {
    /// Creates a random strategy backed by the thread-local generator.
    pub fn new() -> Self {
        Self { rng: thread_rng() }
    }
}

impl Default for RandomStrategy<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomStrategy<R> {
    /// Creates a random strategy with a caller-supplied generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Strategy for RandomStrategy<R> {
    fn choose_move(&mut self, board: &mut Board) -> Result<Position, MoveError> {
        random_move(board, &mut self.rng)
    }

    fn name(&self) -> &str {
        "Random"
    }
}

/// Strength of the computer opponent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Random legal moves.
    Easy,
    /// Optimal moves; never loses.
    #[default]
    Hard,
}

impl Difficulty {
    /// Builds the strategy for this difficulty.
    #[instrument]
    pub fn strategy(self) -> Box<dyn Strategy> {
        let strategy: Box<dyn Strategy> = match self {
            Difficulty::Easy => Box::new(RandomStrategy::new()),
            Difficulty::Hard => Box::new(MinimaxStrategy::new()),
        };
        debug!(strategy = strategy.name(), "Strategy selected");
        strategy
    }
}
