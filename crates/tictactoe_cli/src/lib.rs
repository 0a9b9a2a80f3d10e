//! Terminal front end for tic-tac-toe.
//!
//! Thin I/O around `tictactoe_core`: command-line parsing, an optional
//! TOML config, board rendering and the interactive game loop. The loop
//! reads from any `BufRead` and writes to any `Write`, so whole games can
//! be scripted in tests.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analyze;
mod cli;
mod config;
mod game_loop;
mod menu;
mod render;

pub use analyze::analyze;
pub use cli::{Cli, Command, Mode};
pub use config::{ConfigError, GameConfig, DEFAULT_CONFIG_PATH};
pub use game_loop::{play, Settings};
pub use menu::{prompt_difficulty, prompt_mode, read_line};
pub use render::render;
