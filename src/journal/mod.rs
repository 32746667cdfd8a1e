//! Move journal: the op-log behind pause/resume.
//!
//! Every mutating engine call is appended as one record while the game is
//! not paused. Resuming replays the whole log against a fresh board, which
//! reconstructs the exact state at the moment of pausing.
//!
//! - `record`: the record type and its `tag,player,...` line format
//! - `store`: the `Journal` trait with file and in-memory backends

pub mod record;
pub mod store;

pub use record::{JournalRecord, JOURNAL_HEADER};
pub use store::{FileJournal, Journal, MemoryJournal};
