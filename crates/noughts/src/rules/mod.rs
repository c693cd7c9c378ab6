//! Outcome evaluation over a board snapshot.
//!
//! [`evaluate`] is a total pure function: any well-formed board maps
//! to exactly one [`Outcome`], with no state and no failure modes.

mod draw;
mod win;

use crate::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Terminal classification of a board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The game continues.
    Ongoing,
    /// A player completed a line.
    Won {
        /// The player who completed the line.
        winner: Player,
        /// The completed line, for display highlighting.
        line: [Position; 3],
    },
    /// The board is full with no completed line.
    Draw,
}

impl Outcome {
    /// Whether the board can still accept moves.
    pub fn is_ongoing(&self) -> bool {
        matches!(self, Outcome::Ongoing)
    }
}

/// Evaluates a board snapshot.
///
/// Lines are checked in a fixed order: rows top-to-bottom, columns
/// left-to-right, then the two diagonals. The first match is reported,
/// which fixes the tie-break when a single move completes two lines at
/// once (a center move finishing both its row and a diagonal reports
/// the row). If no line is complete: any empty cell means [`Outcome::Ongoing`],
/// a full board means [`Outcome::Draw`].
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((winner, line)) = win::winning_line(board) {
        return Outcome::Won { winner, line };
    }
    if draw::is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
