//! Board fullness for draw detection.

use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no completed line is a draw.
#[instrument]
pub(crate) fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};
    use strum::IntoEnumIterator;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new().with(Position::Center, Square::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let board = Position::iter().fold(Board::new(), |board, pos| {
            board.with(pos, Square::Occupied(Player::X))
        });
        assert!(is_full(&board));
    }
}
