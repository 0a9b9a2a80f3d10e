//! Tic-tac-toe core: board model, rules and computer opponents.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid, move validation and terminal queries
//! - **Rules**: pure win/draw functions over a board
//! - **Session**: typestate game flow (setup, in progress, finished)
//! - **Search**: exhaustive minimax for the hard opponent, uniform
//!   random choice for the easy one
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{best_move, Board, Mark, Position};
//!
//! let mut board: Board = "XX. ... ...".parse().unwrap();
//! assert_eq!(best_move(&mut board).unwrap(), Position::TopRight);
//!
//! board.place(0, 2, Mark::X).unwrap();
//! assert!(board.winner(Mark::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod notation;
mod position;
pub mod rules;
pub mod search;
mod strategy;
mod typestate;
mod types;

pub use action::{Move, MoveError};
pub use notation::BoardParseError;
pub use position::Position;
pub use search::{best_move, evaluate, minimax, random_move, Minimax, Score};
pub use strategy::{Difficulty, MinimaxStrategy, RandomStrategy, Strategy};
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup, Outcome};
pub use types::{Board, Cell, GameOutcome, Mark};
