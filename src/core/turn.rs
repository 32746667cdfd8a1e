//! Turns: the moves one player makes in a single row.
//!
//! A turn is opened by its first move, which fixes the row. Every later
//! move in the same turn must stay in that row. The turn log is the
//! ordered sequence of turns, with the open turn (if any) at the tail.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::Position;

/// Ordered log of turns, oldest first.
pub type TurnLog = Vector<Turn>;

/// Moves made within a single turn, in the order they were made.
///
/// SmallVec holds a full row of the standard board without heap allocation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    row: usize,
    cols: SmallVec<[usize; 7]>,
}

impl Turn {
    /// Open a turn with its first move.
    #[must_use]
    pub fn open(first: Position) -> Self {
        let mut cols = SmallVec::new();
        cols.push(first.col);
        Self { row: first.row, cols }
    }

    /// Record another move in this turn's row.
    pub fn push(&mut self, col: usize) {
        self.cols.push(col);
    }

    /// The row every move of this turn was made in.
    #[must_use]
    pub fn row(&self) -> usize {
        self.row
    }

    /// Columns taken, in move order.
    #[must_use]
    pub fn cols(&self) -> &[usize] {
        &self.cols
    }

    /// Number of moves in this turn.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cols.len()
    }

    /// Check if this turn has no moves. Always false for an opened turn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cols.is_empty()
    }

    /// Iterate over the positions of this turn's moves.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cols.iter().map(move |&col| Position::new(self.row, col))
    }
}
