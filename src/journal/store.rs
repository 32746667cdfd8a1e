//! Journal backends.
//!
//! ## FileJournal
//!
//! Line-oriented text file written through a `BufWriter`. Every append is
//! flushed so the file is complete whenever the game is paused.
//!
//! ## MemoryJournal
//!
//! Keeps lines in a `Vec<String>`. Used by tests and by embedders that want
//! pause/resume without touching the filesystem.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::record::{JournalRecord, JOURNAL_HEADER};
use crate::error::JournalError;

/// Append-only storage for journal records.
///
/// The engine owns its journal exclusively and drives it through this
/// trait. All methods are best-effort from the engine's point of view:
/// errors are logged and play continues.
pub trait Journal {
    /// Discard all records and write the header. Reopens a closed journal.
    fn truncate(&mut self) -> Result<(), JournalError>;

    /// Append one record and make it durable.
    fn append(&mut self, record: &JournalRecord) -> Result<(), JournalError>;

    /// Push buffered writes to storage.
    fn flush(&mut self) -> Result<(), JournalError>;

    /// Flush and close. Closing an already closed journal is a no-op.
    fn close(&mut self) -> Result<(), JournalError>;

    /// Check if the journal has been closed.
    fn is_closed(&self) -> bool;

    /// Read back every line, header included, in write order.
    fn read_lines(&self) -> Result<Vec<String>, JournalError>;
}

/// Journal stored in a text file.
#[derive(Debug)]
pub struct FileJournal {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl FileJournal {
    /// Create a journal for `path`. Nothing is opened until `truncate`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            writer: None,
        }
    }

    /// Location of the journal file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn writer(&mut self) -> Result<&mut BufWriter<File>, JournalError> {
        self.writer.as_mut().ok_or(JournalError::Closed)
    }
}

impl Journal for FileJournal {
    fn truncate(&mut self) -> Result<(), JournalError> {
        self.writer = None;
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let mut writer = BufWriter::new(File::create(&self.path)?);
        writeln!(writer, "{JOURNAL_HEADER}")?;
        writer.flush()?;
        self.writer = Some(writer);
        Ok(())
    }

    fn append(&mut self, record: &JournalRecord) -> Result<(), JournalError> {
        let writer = self.writer()?;
        writeln!(writer, "{record}")?;
        writer.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), JournalError> {
        self.writer()?.flush()?;
        Ok(())
    }

    fn close(&mut self) -> Result<(), JournalError> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
        }
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.writer.is_none()
    }

    fn read_lines(&self) -> Result<Vec<String>, JournalError> {
        let contents = fs::read_to_string(&self.path)?;
        Ok(contents.lines().map(str::to_string).collect())
    }
}

/// Journal kept in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryJournal {
    lines: Vec<String>,
    open: bool,
}

impl MemoryJournal {
    /// Create an empty, unopened journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written so far, header included.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Append a raw line, bypassing the record encoder.
    ///
    /// Lets tests inject malformed lines ahead of a replay.
    pub fn push_raw(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}

impl Journal for MemoryJournal {
    fn truncate(&mut self) -> Result<(), JournalError> {
        self.lines.clear();
        self.lines.push(JOURNAL_HEADER.to_string());
        self.open = true;
        Ok(())
    }

    fn append(&mut self, record: &JournalRecord) -> Result<(), JournalError> {
        if !self.open {
            return Err(JournalError::Closed);
        }
        self.lines.push(record.to_string());
        Ok(())
    }

    fn flush(&mut self) -> Result<(), JournalError> {
        if !self.open {
            return Err(JournalError::Closed);
        }
        Ok(())
    }

    fn close(&mut self) -> Result<(), JournalError> {
        self.open = false;
        Ok(())
    }

    fn is_closed(&self) -> bool {
        !self.open
    }

    fn read_lines(&self) -> Result<Vec<String>, JournalError> {
        Ok(self.lines.clone())
    }
}
