//! Session state: the move history, the cursor, and move application.

use crate::rules::{self, Outcome};
use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One entry in the session history: a board snapshot paired with the
/// position whose play produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    board: Board,
    position: Option<Position>,
}

impl MoveRecord {
    /// The initial record: empty board, no originating move.
    fn initial() -> Self {
        Self {
            board: Board::new(),
            position: None,
        }
    }

    fn played(board: Board, position: Position) -> Self {
        Self {
            board,
            position: Some(position),
        }
    }

    /// The board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The position whose play produced this snapshot; `None` only for
    /// the initial record.
    pub fn position(&self) -> Option<Position> {
        self.position
    }
}

/// Errors rejecting a [`Session::play`] call.
///
/// A rejection is a pure no-op: history and cursor are untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlayError {
    /// The cell is already occupied.
    #[display("cell {} is already occupied", _0)]
    SquareOccupied(Position),
    /// The game has already concluded.
    #[display("the game is already over")]
    GameOver,
}

impl std::error::Error for PlayError {}

/// Error rejecting an out-of-range [`Session::jump_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("history index {index} out of range for length {len}")]
pub struct JumpError {
    /// The requested index.
    pub index: usize,
    /// The history length at the time of the call.
    pub len: usize,
}

impl std::error::Error for JumpError {}

/// The game state manager.
///
/// Owns the ordered history of board snapshots and the cursor into it.
/// The turn owner is derived from cursor parity rather than stored, so
/// strict alternation holds by construction. Playing from an earlier
/// record truncates everything after it (branch-and-discard).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    history: Vec<MoveRecord>,
    cursor: usize,
}

impl Session {
    /// Creates a session holding only the initial empty record.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![MoveRecord::initial()],
            cursor: 0,
        }
    }

    /// Builds a session by folding [`Session::play`] over `moves`.
    pub fn replay(moves: &[Position]) -> Result<Self, PlayError> {
        let mut session = Self::new();
        for &pos in moves {
            session.play(pos)?;
        }
        Ok(session)
    }

    /// The board at the cursor.
    pub fn current_board(&self) -> &Board {
        &self.history[self.cursor].board
    }

    /// The player to move: X when the cursor is even, O when odd.
    pub fn to_move(&self) -> Player {
        if self.cursor.is_multiple_of(2) {
            Player::X
        } else {
            Player::O
        }
    }

    /// Evaluates the board at the cursor.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(self.current_board())
    }

    /// All history records, index 0 being the initial empty board.
    pub fn records(&self) -> &[MoveRecord] {
        &self.history
    }

    /// The cursor into the history.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Plays the turn owner's mark at `pos`.
    ///
    /// On success the history is truncated to `[0, cursor]` before the
    /// new record is appended, so moves made after an earlier jump
    /// discard the abandoned continuation.
    ///
    /// # Errors
    ///
    /// - [`PlayError::GameOver`] when the board at the cursor already
    ///   has a concluded outcome.
    /// - [`PlayError::SquareOccupied`] when the cell is taken.
    #[instrument(skip(self), fields(cursor = self.cursor, player = %self.to_move()))]
    pub fn play(&mut self, pos: Position) -> Result<(), PlayError> {
        if !self.outcome().is_ongoing() {
            return Err(PlayError::GameOver);
        }
        if !self.current_board().is_empty(pos) {
            return Err(PlayError::SquareOccupied(pos));
        }

        let mark = Square::Occupied(self.to_move());
        let next = self.current_board().with(pos, mark);
        self.history.truncate(self.cursor + 1);
        self.history.push(MoveRecord::played(next, pos));
        self.cursor = self.history.len() - 1;
        debug!(cursor = self.cursor, "move applied");
        Ok(())
    }

    /// Moves the cursor to `index` without touching the history.
    ///
    /// Later records stay in place and remain reachable until the next
    /// successful [`Session::play`] discards them.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError`] when `index` is outside the history, with
    /// the session left unchanged.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), JumpError> {
        if index >= self.history.len() {
            return Err(JumpError {
                index,
                len: self.history.len(),
            });
        }
        self.cursor = index;
        debug!(cursor = self.cursor, "cursor moved");
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
