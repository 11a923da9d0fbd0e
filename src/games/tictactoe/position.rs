//! Board positions addressed by row and column.

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the 3x3 board.
///
/// The enum is the proof-of-validity type used past the model
/// boundary: raw row/column indices are validated once, in
/// [`Position::from_row_col`], and everything downstream works with
/// positions that are in bounds by construction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Row 0, column 0.
    TopLeft,
    /// Row 0, column 1.
    TopCenter,
    /// Row 0, column 2.
    TopRight,
    /// Row 1, column 0.
    MiddleLeft,
    /// Row 1, column 1.
    Center,
    /// Row 1, column 2.
    MiddleRight,
    /// Row 2, column 0.
    BottomLeft,
    /// Row 2, column 1.
    BottomCenter,
    /// Row 2, column 2.
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Creates a position from 0-based row and column indices.
    ///
    /// Returns `None` when either index falls outside the board,
    /// including negative values.
    #[instrument]
    pub fn from_row_col(row: i32, col: i32) -> Option<Self> {
        if !(0..3).contains(&row) || !(0..3).contains(&col) {
            return None;
        }
        Self::from_index((row * 3 + col) as usize)
    }

    /// Creates a position from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Converts the position to a row-major board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// 0-based row of this position.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// 0-based column of this position.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Returns the positions of all empty squares on the board.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        <Position as strum::IntoEnumIterator>::iter()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}
