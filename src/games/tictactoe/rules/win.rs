//! Win detection logic for tic-tac-toe.

use super::super::position::Position;
use super::super::types::{Board, Player, Square};
use tracing::instrument;

/// The 8 lines that decide a game: 3 rows, 3 columns, 2 diagonals.
const LINES: [[Position; 3]; 8] = [
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

/// Checks if there is a winner on the board.
///
/// Scans all 8 lines unconditionally and returns the player holding
/// a full line, or `None`. At most one line can be completed by a
/// legal move, so the first hit is the winner.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return sq.player();
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupied(player: Player) -> Square {
        Square::Occupied(player)
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_each_row() {
        for row in 0..3 {
            let mut board = Board::new();
            for col in 0..3 {
                board.set(Position::from_row_col(row, col).unwrap(), occupied(Player::X));
            }
            assert_eq!(check_winner(&board), Some(Player::X), "row {row}");
        }
    }

    #[test]
    fn test_winner_each_column() {
        for col in 0..3 {
            let mut board = Board::new();
            for row in 0..3 {
                board.set(Position::from_row_col(row, col).unwrap(), occupied(Player::O));
            }
            assert_eq!(check_winner(&board), Some(Player::O), "column {col}");
        }
    }

    #[test]
    fn test_winner_main_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopLeft, occupied(Player::X));
        board.set(Position::Center, occupied(Player::X));
        board.set(Position::BottomRight, occupied(Player::X));
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopRight, occupied(Player::O));
        board.set(Position::Center, occupied(Player::O));
        board.set(Position::BottomLeft, occupied(Player::O));
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let mut board = Board::new();
        board.set(Position::TopLeft, occupied(Player::X));
        board.set(Position::TopCenter, occupied(Player::O));
        board.set(Position::TopRight, occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let mut board = Board::new();
        board.set(Position::TopLeft, occupied(Player::X));
        board.set(Position::TopCenter, occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }
}
