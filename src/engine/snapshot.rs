//! Point-in-time copy of the engine's observable state.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Player, TurnLog};

/// Everything an observer can read from a `Nim` engine, captured at once.
///
/// The turn log is an `im::Vector`, so taking a snapshot is cheap.
/// Two snapshots compare equal exactly when the games are
/// indistinguishable to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub tokens_left: usize,
    pub active_row: usize,
    pub current_player: Player,
    pub start_of_turn: bool,
    pub game_over: bool,
    pub turns: TurnLog,
}
