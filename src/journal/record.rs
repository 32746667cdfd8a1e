//! Journal records and their line encoding.
//!
//! Each mutating engine call is written as one comma-separated line:
//!
//! ```text
//! start
//! move,1,3,0
//! move,1,3,1
//! done,1
//! undo,1,3,0,1
//! ```
//!
//! The first field is the tag, the second the player number. `Display`
//! encodes a record and `FromStr` decodes one; the `start` header is not a
//! record and is handled by the journal backends.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Player, Position};
use crate::error::JournalError;

/// Header written as the first line of every journal.
pub const JOURNAL_HEADER: &str = "start";

/// One recorded engine operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JournalRecord {
    /// A token was taken.
    Move { player: Player, pos: Position },

    /// The player ended their turn.
    Done { player: Player },

    /// A whole turn was taken back. `player` is the one restored to move.
    Undo {
        player: Player,
        row: usize,
        cols: SmallVec<[usize; 7]>,
    },
}

impl JournalRecord {
    /// The line tag for this record.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            JournalRecord::Move { .. } => "move",
            JournalRecord::Done { .. } => "done",
            JournalRecord::Undo { .. } => "undo",
        }
    }

    /// The player named by this record.
    #[must_use]
    pub fn player(&self) -> Player {
        match self {
            JournalRecord::Move { player, .. }
            | JournalRecord::Done { player }
            | JournalRecord::Undo { player, .. } => *player,
        }
    }
}

impl std::fmt::Display for JournalRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.tag(), self.player().number())?;
        match self {
            JournalRecord::Move { pos, .. } => write!(f, ",{},{}", pos.row, pos.col),
            JournalRecord::Done { .. } => Ok(()),
            JournalRecord::Undo { row, cols, .. } => {
                write!(f, ",{row}")?;
                for col in cols {
                    write!(f, ",{col}")?;
                }
                Ok(())
            }
        }
    }
}

impl FromStr for JournalRecord {
    type Err = JournalError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let mut fields = line.split(',');
        let tag = fields.next().unwrap_or_default();

        let mut next_num = |what: &str| -> Result<usize, JournalError> {
            let field = fields
                .next()
                .ok_or_else(|| JournalError::format(line, format!("missing {what}")))?;
            field
                .trim()
                .parse()
                .map_err(|_| JournalError::format(line, format!("bad {what} {field:?}")))
        };

        let parse_player = |number: usize| {
            u8::try_from(number)
                .ok()
                .and_then(Player::from_number)
                .ok_or_else(|| JournalError::format(line, format!("bad player {number}")))
        };

        let record = match tag {
            "move" => {
                let player = parse_player(next_num("player")?)?;
                let row = next_num("row")?;
                let col = next_num("column")?;
                JournalRecord::Move {
                    player,
                    pos: Position::new(row, col),
                }
            }
            "done" => JournalRecord::Done {
                player: parse_player(next_num("player")?)?,
            },
            "undo" => {
                let player = parse_player(next_num("player")?)?;
                let row = next_num("row")?;
                let mut cols: SmallVec<[usize; 7]> = SmallVec::new();
                for field in fields.by_ref() {
                    let col: usize = field
                        .trim()
                        .parse()
                        .map_err(|_| JournalError::format(line, format!("bad column {field:?}")))?;
                    cols.push(col);
                }
                if cols.is_empty() {
                    return Err(JournalError::format(line, "undo lists no columns"));
                }
                return Ok(JournalRecord::Undo { player, row, cols });
            }
            other => {
                return Err(JournalError::format(line, format!("unknown tag {other:?}")));
            }
        };

        if fields.next().is_some() {
            return Err(JournalError::format(line, "trailing fields"));
        }
        Ok(record)
    }
}
