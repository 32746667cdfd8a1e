//! Error types for the journal and configuration.
//!
//! Rule violations live with the engine (`engine::MoveError`); these cover
//! the two external resources the engine touches.

/// Errors from reading, writing, or parsing the move journal.
#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("journal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("improper formatting in journal line {line:?}: {reason}")]
    Format { line: String, reason: String },

    #[error("journal is closed")]
    Closed,
}

impl JournalError {
    pub(crate) fn format(line: &str, reason: impl Into<String>) -> Self {
        JournalError::Format {
            line: line.to_string(),
            reason: reason.into(),
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
