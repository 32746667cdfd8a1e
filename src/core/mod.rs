//! Core game types: players, the board, turns, configuration.
//!
//! These are plain data types with no journal or engine logic. The engine
//! in `crate::engine` composes them.

pub mod board;
pub mod config;
pub mod player;
pub mod turn;

pub use board::{Board, Position, DEFAULT_ROWS};
pub use config::{NimConfig, DEFAULT_JOURNAL_PATH, MAX_ROWS, MIN_ROWS};
pub use player::Player;
pub use turn::{Turn, TurnLog};
