//! The Nim game state engine.
//!
//! `Nim` owns the board, the turn log, and the move journal. Callers drive
//! it through `make_move`, `turn_done`, `undo`, `pause`, and `unpause`,
//! and read its state back through the observers after every call.
//!
//! ## Example
//!
//! ```
//! use nim_engine::{Nim, Player};
//!
//! let mut game = Nim::in_memory();
//!
//! // Player 1 takes two tokens from row 1.
//! game.make_move(1, 0).unwrap();
//! game.make_move(1, 1).unwrap();
//! game.turn_done().unwrap();
//!
//! assert_eq!(game.tokens_left(), 14);
//! assert_eq!(game.current_player(), Player::Two);
//!
//! // Taking from a second row in the same turn is rejected.
//! game.make_move(3, 0).unwrap();
//! assert!(game.make_move(2, 0).is_err());
//! ```

mod nim;
mod snapshot;

pub use nim::Nim;
pub use snapshot::GameSnapshot;

/// Reasons a move, turn end, or undo is rejected.
///
/// A rejected call never changes engine state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("({row}, {col}) is not on the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("no token at ({row}, {col})")]
    CellEmpty { row: usize, col: usize },

    #[error("this turn is locked to row {expected}, cannot take from row {got}")]
    WrongRow { expected: usize, got: usize },

    #[error("the game is over")]
    GameOver,

    #[error("no token has been taken this turn")]
    TurnNotStarted,

    #[error("no move to undo")]
    NothingToUndo,
}
