//! Player identification.
//!
//! Nim is strictly two-player, so `Player` is a two-variant enum rather than
//! an index. The first player always opens the game.

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player 1, who opens every game.
    #[default]
    One,
    /// Player 2.
    Two,
}

impl Player {
    /// Get the player's number as written in the journal (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Look up a player by journal number.
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// Get the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// True for the opening player.
    #[must_use]
    pub const fn is_first(self) -> bool {
        matches!(self, Player::One)
    }

    /// The player to move after `completed_turns` full turns.
    ///
    /// Turns alternate starting with `Player::One`, so an even count
    /// means player one is on move.
    #[must_use]
    pub const fn after_turns(completed_turns: usize) -> Self {
        if completed_turns % 2 == 0 {
            Player::One
        } else {
            Player::Two
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}
