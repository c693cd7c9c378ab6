//! Winning-line detection.

use crate::{Board, Player, Position, Square};
use tracing::instrument;

/// The eight lines in their fixed evaluation order: rows top-to-bottom,
/// columns left-to-right, then the two diagonals.
pub(crate) const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Finds the first completed line on the board.
///
/// Returns the owning player and the line itself, or `None` when no
/// line is uniformly occupied.
#[instrument]
pub(crate) fn winning_line(board: &Board) -> Option<(Player, [Position; 3])> {
    for line in LINES {
        let [a, b, c] = line;
        if let Square::Occupied(player) = board.get(a)
            && board.get(b) == Square::Occupied(player)
            && board.get(c) == Square::Occupied(player)
        {
            return Some((player, line));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(positions: &[Position], player: Player) -> Board {
        positions
            .iter()
            .fold(Board::new(), |board, &pos| {
                board.with(pos, Square::Occupied(player))
            })
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winning_line(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = filled(
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
            Player::X,
        );
        assert_eq!(
            winning_line(&board),
            Some((
                Player::X,
                [Position::TopLeft, Position::TopCenter, Position::TopRight]
            ))
        );
    }

    #[test]
    fn test_winner_diagonal() {
        let board = filled(
            &[Position::TopLeft, Position::Center, Position::BottomRight],
            Player::O,
        );
        assert_eq!(
            winning_line(&board),
            Some((
                Player::O,
                [Position::TopLeft, Position::Center, Position::BottomRight]
            ))
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = filled(&[Position::TopLeft, Position::TopCenter], Player::X);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::new()
            .with(Position::TopLeft, Square::Occupied(Player::X))
            .with(Position::TopCenter, Square::Occupied(Player::O))
            .with(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(winning_line(&board), None);
    }
}
