use log::{debug, info, warn};
use smallvec::SmallVec;

use super::{GameSnapshot, MoveError};
use crate::core::{Board, NimConfig, Player, Position, Turn, TurnLog};
use crate::error::ConfigError;
use crate::journal::{FileJournal, Journal, JournalRecord, MemoryJournal, JOURNAL_HEADER};

/// Nim game state engine.
///
/// ## Turns
///
/// A turn is one or more `make_move` calls in a single row, closed by
/// `turn_done`. `undo` takes back the most recent turn as a whole, whether
/// it was closed or still open.
///
/// ## Ending
///
/// The player forced to take the last token loses, so the game ends as soon
/// as one token is left. The player who made that final move wins.
///
/// ## Pause / resume
///
/// While not paused, every accepted mutating call is appended to the
/// journal. `unpause` rebuilds the state by replaying the journal from a
/// full board. Calls made while paused are not journaled and are discarded
/// by the replay.
pub struct Nim<J: Journal = FileJournal> {
    rows: usize,
    total: usize,
    board: Board,
    tokens_left: usize,
    active_row: usize,
    current_player: Player,
    start_of_turn: bool,
    game_over: bool,
    paused: bool,
    turns: TurnLog,
    journal: J,
}

impl Nim<FileJournal> {
    /// Create an engine journaling to `config.journal_path`.
    ///
    /// The journal file is truncated; an earlier game's journal at the
    /// same path is lost.
    pub fn new(config: NimConfig) -> Result<Self, ConfigError> {
        let journal = FileJournal::new(&config.journal_path);
        Self::with_journal(config, journal)
    }
}

impl Nim<MemoryJournal> {
    /// Create a standard four-row engine with an in-memory journal.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::build(NimConfig::default(), MemoryJournal::new())
    }
}

impl<J: Journal> Nim<J> {
    /// Create an engine over any journal backend.
    ///
    /// Sets up a full board and truncates the journal.
    pub fn with_journal(config: NimConfig, journal: J) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, journal))
    }

    fn build(config: NimConfig, journal: J) -> Self {
        let total = config.total_tokens();
        let mut game = Self {
            rows: config.rows,
            total,
            board: Board::new(config.rows),
            tokens_left: total,
            active_row: 0,
            current_player: Player::One,
            start_of_turn: true,
            game_over: false,
            paused: false,
            turns: TurnLog::new(),
            journal,
        };
        game.reset_file();
        game
    }

    // === Board Geometry ===

    /// Check whether `(row, col)` addresses a cell of the board.
    #[must_use]
    pub fn in_board(&self, row: usize, col: usize) -> bool {
        self.board.in_board(row, col)
    }

    // === Operations ===

    /// Take the token at `(row, col)`.
    ///
    /// The first move of a turn picks the row; later moves in the same turn
    /// must stay in it. Ends the game when exactly one token is left.
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }
        if !self.in_board(row, col) {
            return Err(MoveError::OutOfBounds { row, col });
        }
        if self.board.get(row, col) != Some(true) {
            return Err(MoveError::CellEmpty { row, col });
        }
        if !self.start_of_turn && row != self.active_row {
            return Err(MoveError::WrongRow {
                expected: self.active_row,
                got: row,
            });
        }

        let pos = Position::new(row, col);
        let player = self.current_player;
        self.record(JournalRecord::Move { player, pos });

        self.board.set(pos, false);
        self.tokens_left -= 1;

        if self.start_of_turn {
            self.active_row = row;
            self.turns.push_back(Turn::open(pos));
        } else if let Some(turn) = self.turns.back_mut() {
            turn.push(col);
        }
        self.start_of_turn = false;
        debug!("{player} took {pos}, {} left", self.tokens_left);

        if self.tokens_left == 1 {
            self.game_over = true;
            info!("game over: {player} wins");
            self.finalize_journal();
        }
        Ok(())
    }

    /// End the current player's turn.
    ///
    /// Rejected at the start of a turn, so a repeated call is harmless.
    pub fn turn_done(&mut self) -> Result<(), MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }
        if self.start_of_turn {
            return Err(MoveError::TurnNotStarted);
        }

        let player = self.current_player;
        self.record(JournalRecord::Done { player });

        self.current_player = player.opponent();
        self.start_of_turn = true;
        debug!("{player} ended turn {}", self.turns.len());
        Ok(())
    }

    /// Take back the most recent turn, open or completed.
    pub fn undo(&mut self) -> Result<(), MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }
        if self.tokens_left == self.total {
            return Err(MoveError::NothingToUndo);
        }
        let Some(turn) = self.turns.pop_back() else {
            return Err(MoveError::NothingToUndo);
        };

        // A completed turn belonged to the previous player.
        let restored = if self.start_of_turn {
            self.current_player.opponent()
        } else {
            self.current_player
        };

        for pos in turn.positions() {
            self.board.set(pos, true);
            self.tokens_left += 1;
        }
        self.record(JournalRecord::Undo {
            player: restored,
            row: turn.row(),
            cols: SmallVec::from_slice(turn.cols()),
        });

        self.current_player = Player::after_turns(self.turns.len());
        self.start_of_turn = true;
        debug!(
            "undid {} move(s) in row {}, {} to move",
            turn.len(),
            turn.row(),
            self.current_player
        );
        Ok(())
    }

    /// Get the winner, or `None` while the game is running.
    ///
    /// The winner is the player who left a single token on the board, which
    /// is the current player because the final turn is never closed.
    #[must_use]
    pub fn check_winner(&self) -> Option<Player> {
        self.game_over.then_some(self.current_player)
    }

    /// Suspend journaling until `unpause`.
    ///
    /// Ignored before the first move and after the game has ended.
    pub fn pause(&mut self) {
        if self.tokens_left == self.total || self.game_over {
            return;
        }
        if let Err(e) = self.journal.flush() {
            warn!("failed to flush journal before pausing: {e}");
        }
        self.paused = true;
        info!("game paused");
    }

    /// Resume a paused game by replaying the journal.
    ///
    /// The board is rebuilt from scratch and every journaled call is
    /// re-applied in order. Malformed lines are logged and skipped. If the
    /// journal cannot be read, the in-memory state is kept as is.
    pub fn unpause(&mut self) {
        if !self.paused {
            return;
        }

        let lines = match self.journal.read_lines() {
            Ok(lines) => lines,
            Err(e) => {
                warn!("cannot replay journal, resuming from memory: {e}");
                self.paused = false;
                return;
            }
        };

        self.reset_board();
        let body = match lines.first() {
            Some(first) if first.trim() == JOURNAL_HEADER => &lines[1..],
            _ => &lines[..],
        };
        let mut replayed = 0usize;
        for line in body.iter().filter(|line| !line.trim().is_empty()) {
            match line.parse::<JournalRecord>() {
                Ok(record) => {
                    self.replay(&record);
                    replayed += 1;
                }
                Err(e) => warn!("skipping journal line: {e}"),
            }
        }

        self.paused = false;
        info!("game resumed after replaying {replayed} record(s)");
    }

    /// Restore the full board and a fresh turn state. The journal is untouched.
    pub fn reset_board(&mut self) {
        self.board = Board::new(self.rows);
        self.tokens_left = self.total;
        self.active_row = 0;
        self.current_player = Player::One;
        self.start_of_turn = true;
        self.game_over = false;
        self.turns = TurnLog::new();
        debug!("board reset to {} tokens", self.total);
    }

    /// Start a new journal, discarding every recorded call.
    pub fn reset_file(&mut self) {
        match self.journal.truncate() {
            Ok(()) => info!("journal started"),
            Err(e) => warn!("failed to start journal, pause/resume unavailable: {e}"),
        }
    }

    // === Observers ===

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whether a token sits at `(row, col)`. `None` when off the board.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<bool> {
        self.board.get(row, col)
    }

    /// Tokens still on the board.
    #[must_use]
    pub fn tokens_left(&self) -> usize {
        self.tokens_left
    }

    /// Tokens on a full board.
    #[must_use]
    pub fn total_tokens(&self) -> usize {
        self.total
    }

    /// Row the current turn is locked to. Meaningful only mid-turn.
    #[must_use]
    pub fn active_row(&self) -> usize {
        self.active_row
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// True when no token has been taken in the current turn yet.
    #[must_use]
    pub fn is_start_of_turn(&self) -> bool {
        self.start_of_turn
    }

    /// True once a single token is left.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// True between `pause` and `unpause`.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Every turn so far, oldest first, with the open turn last.
    #[must_use]
    pub fn turns(&self) -> &TurnLog {
        &self.turns
    }

    /// The journal backend.
    #[must_use]
    pub fn journal(&self) -> &J {
        &self.journal
    }

    /// Mutable access to the journal backend.
    pub fn journal_mut(&mut self) -> &mut J {
        &mut self.journal
    }

    /// 1-based count of the current player's turns, the current one included.
    #[must_use]
    pub fn turn_number(&self) -> usize {
        let len = self.turns.len();
        if len == 0 {
            return 1;
        }
        let base = len / 2 + len % 2;
        if self.start_of_turn && len % 2 == 0 {
            base + 1
        } else {
            base
        }
    }

    /// Tokens taken so far in the current turn.
    #[must_use]
    pub fn moves_this_turn(&self) -> usize {
        if self.start_of_turn {
            0
        } else {
            self.turns.back().map_or(0, Turn::len)
        }
    }

    /// Capture the observable state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            tokens_left: self.tokens_left,
            active_row: self.active_row,
            current_player: self.current_player,
            start_of_turn: self.start_of_turn,
            game_over: self.game_over,
            turns: self.turns.clone(),
        }
    }

    // === Journal Plumbing ===

    fn record(&mut self, record: JournalRecord) {
        if self.paused {
            return;
        }
        if let Err(e) = self.journal.append(&record) {
            warn!("failed to journal \"{record}\": {e}");
        }
    }

    fn replay(&mut self, record: &JournalRecord) {
        let result = match record {
            JournalRecord::Move { pos, .. } => self.make_move(pos.row, pos.col),
            JournalRecord::Done { .. } => self.turn_done(),
            JournalRecord::Undo { .. } => self.undo(),
        };
        if let Err(e) = result {
            warn!("journal record \"{record}\" rejected on replay: {e}");
        }
    }

    /// Close the journal once the game has ended. Idempotent.
    fn finalize_journal(&mut self) {
        if self.paused || self.journal.is_closed() {
            return;
        }
        if let Err(e) = self.journal.close() {
            warn!("failed to close journal: {e}");
        }
    }
}

impl<J: Journal> std::fmt::Display for Nim<J> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} Turn {} Move {}:",
            self.current_player,
            self.turn_number(),
            self.moves_this_turn()
        )?;
        for (r, row) in self.board.iter_rows().enumerate() {
            if r > 0 {
                writeln!(f, "---------")?;
            }
            let cells: Vec<&str> = row
                .iter()
                .map(|&present| if present { "I" } else { "." })
                .collect();
            writeln!(f, "{}", cells.join(" | "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_engine() {
        let game = Nim::in_memory();

        assert_eq!(game.tokens_left(), 16);
        assert_eq!(game.total_tokens(), 16);
        assert_eq!(game.active_row(), 0);
        assert_eq!(game.current_player(), Player::One);
        assert!(game.is_start_of_turn());
        assert!(!game.is_game_over());
        assert!(!game.is_paused());
        assert!(game.turns().is_empty());
        assert_eq!(game.check_winner(), None);
        assert_eq!(game.journal().lines(), &["start".to_string()]);
    }

    #[test]
    fn test_move_rejections_leave_state_unchanged() {
        let mut game = Nim::in_memory();
        game.make_move(1, 0).unwrap();
        let before = game.snapshot();

        assert_eq!(
            game.make_move(0, 3),
            Err(MoveError::OutOfBounds { row: 0, col: 3 })
        );
        assert_eq!(
            game.make_move(1, 0),
            Err(MoveError::CellEmpty { row: 1, col: 0 })
        );
        assert_eq!(
            game.make_move(2, 0),
            Err(MoveError::WrongRow { expected: 1, got: 2 })
        );
        assert_eq!(game.snapshot(), before);
        assert_eq!(game.journal().lines().len(), 2);
    }

    #[test]
    fn test_move_journals_player_row_col() {
        let mut game = Nim::in_memory();
        game.make_move(3, 5).unwrap();
        game.turn_done().unwrap();
        game.make_move(2, 1).unwrap();

        assert_eq!(
            game.journal().lines(),
            &["start", "move,1,3,5", "done,1", "move,2,2,1"]
        );
    }

    #[test]
    fn test_undo_journal_names_restored_player() {
        let mut game = Nim::in_memory();
        game.make_move(2, 0).unwrap();
        game.make_move(2, 1).unwrap();
        game.turn_done().unwrap();
        // Completed turn: player 1 gets the move back.
        game.undo().unwrap();
        // Open turn: the current player keeps the move.
        game.make_move(0, 0).unwrap();
        game.undo().unwrap();

        let lines = game.journal().lines();
        assert_eq!(lines[4], "undo,1,2,0,1");
        assert_eq!(lines[6], "undo,1,0,0");
    }

    #[test]
    fn test_turn_number_and_moves_this_turn() {
        let mut game = Nim::in_memory();
        assert_eq!((game.turn_number(), game.moves_this_turn()), (1, 0));

        game.make_move(3, 0).unwrap();
        game.make_move(3, 1).unwrap();
        assert_eq!((game.turn_number(), game.moves_this_turn()), (1, 2));

        game.turn_done().unwrap();
        assert_eq!((game.turn_number(), game.moves_this_turn()), (1, 0));

        game.make_move(2, 0).unwrap();
        assert_eq!((game.turn_number(), game.moves_this_turn()), (1, 1));

        game.turn_done().unwrap();
        assert_eq!((game.turn_number(), game.moves_this_turn()), (2, 0));
    }

    #[test]
    fn test_display() {
        let mut game = Nim::in_memory();
        game.make_move(1, 1).unwrap();

        let expected = "Player 1 Turn 1 Move 1:\n\
                        I\n\
                        ---------\n\
                        I | . | I\n\
                        ---------\n\
                        I | I | I | I | I\n\
                        ---------\n\
                        I | I | I | I | I | I | I\n";
        assert_eq!(game.to_string(), expected);
    }

    #[test]
    fn test_custom_rows() {
        let config = NimConfig::default().with_rows(2);
        let mut game = Nim::with_journal(config, MemoryJournal::new()).unwrap();

        assert_eq!(game.total_tokens(), 4);
        assert!(!game.in_board(2, 0));

        game.make_move(1, 0).unwrap();
        game.make_move(1, 1).unwrap();
        game.make_move(1, 2).unwrap();

        assert!(game.is_game_over());
        assert_eq!(game.check_winner(), Some(Player::One));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = NimConfig::default().with_rows(0);
        assert!(Nim::with_journal(config, MemoryJournal::new()).is_err());
    }
}
