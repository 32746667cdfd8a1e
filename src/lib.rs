//! # nim-engine
//!
//! Game state engine for two-player Nim on a triangular board.
//!
//! ## Rules
//!
//! The standard board has four rows holding 1, 3, 5 and 7 tokens. On each
//! turn a player takes one or more tokens from a single row. Whoever is
//! forced to take the last token loses, so the game ends as soon as a single
//! token is left.
//!
//! ## Architecture
//!
//! - **Caller-owned state**: `Nim` is a plain value. There are no globals,
//!   so independent games can coexist.
//!
//! - **Op-log pause/resume**: every accepted call is appended to a
//!   `Journal`. Resuming replays the journal against a full board.
//!
//! - **Best-effort durability**: journal I/O failures are logged through
//!   `log` and never interrupt play.
//!
//! ## Modules
//!
//! - `core`: players, board, turns, configuration
//! - `journal`: journal records and storage backends
//! - `engine`: the `Nim` engine
//! - `error`: journal and configuration errors

pub mod core;
pub mod engine;
pub mod error;
pub mod journal;

// Re-export commonly used types
pub use crate::core::{Board, NimConfig, Player, Position, Turn, TurnLog};

pub use crate::engine::{GameSnapshot, MoveError, Nim};

pub use crate::error::{ConfigError, JournalError};

pub use crate::journal::{FileJournal, Journal, JournalRecord, MemoryJournal};
