//! Triangular board of tokens.
//!
//! Row `r` holds `2r + 1` cells, so a board of `n` rows holds `n²` tokens.
//! The standard game uses four rows (1, 3, 5, 7 tokens).

use serde::{Deserialize, Serialize};

/// Number of rows on the standard board.
pub const DEFAULT_ROWS: usize = 4;

/// A cell coordinate on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Ragged grid of token flags. `true` means a token is present.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: Vec<Vec<bool>>,
}

impl Board {
    /// Create a full board with `rows` rows.
    #[must_use]
    pub fn new(rows: usize) -> Self {
        let cells = (0..rows).map(|r| vec![true; Self::row_width(r)]).collect();
        Self { cells }
    }

    /// Number of cells in row `row`.
    #[must_use]
    pub const fn row_width(row: usize) -> usize {
        2 * row + 1
    }

    /// Number of tokens on a full board of `rows` rows.
    #[must_use]
    pub const fn capacity(rows: usize) -> usize {
        rows * rows
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Check whether `(row, col)` addresses a cell of this board.
    #[must_use]
    pub fn in_board(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < Self::row_width(row)
    }

    /// Get a cell, or `None` when off the board.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Set a cell. Callers check `in_board` first.
    pub(crate) fn set(&mut self, pos: Position, present: bool) {
        self.cells[pos.row][pos.col] = present;
    }

    /// Borrow one row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[bool] {
        &self.cells[row]
    }

    /// Iterate over the rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Count the tokens still on the board.
    #[must_use]
    pub fn count_tokens(&self) -> usize {
        self.cells.iter().flatten().filter(|&&present| present).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS)
    }
}
