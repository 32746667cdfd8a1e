//! Engine configuration.
//!
//! Callers configure the board size and where the move journal lives.
//! Every field has a default, so a partial JSON document is enough.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::board::DEFAULT_ROWS;
use crate::error::ConfigError;

/// Default location of the move journal, relative to the working directory.
pub const DEFAULT_JOURNAL_PATH: &str = "./files/gameasfile.csv";

/// Smallest playable board. A one-row board starts on its last token.
pub const MIN_ROWS: usize = 2;

/// Largest supported board.
pub const MAX_ROWS: usize = 16;

/// Configuration for a Nim engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NimConfig {
    /// Number of board rows (default: 4, giving 16 tokens).
    pub rows: usize,

    /// Path of the file-backed move journal.
    pub journal_path: PathBuf,
}

impl Default for NimConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            journal_path: PathBuf::from(DEFAULT_JOURNAL_PATH),
        }
    }
}

impl NimConfig {
    /// Set the number of rows.
    #[must_use]
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Set the journal path.
    #[must_use]
    pub fn with_journal_path(mut self, path: impl AsRef<Path>) -> Self {
        self.journal_path = path.as_ref().to_path_buf();
        self
    }

    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration describes a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_ROWS..=MAX_ROWS).contains(&self.rows) {
            return Err(ConfigError::Validation(format!(
                "rows must be between {MIN_ROWS} and {MAX_ROWS}, got {}",
                self.rows
            )));
        }
        if self.journal_path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "journal_path must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Total tokens on a full board.
    #[must_use]
    pub fn total_tokens(&self) -> usize {
        self.rows * self.rows
    }
}
