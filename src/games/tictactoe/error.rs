//! Error types for the tic-tac-toe model and console controller.

use derive_more::{Display, Error, From};

/// Errors raised by the game model when a move is rejected.
///
/// `OutOfBounds` and `Occupied` are argument errors the caller can
/// correct and retry. `GameOver` is a state error: the game has
/// reached a terminal state and accepts no further moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Row or column falls outside the 3x3 board.
    #[display("position ({}, {}) is out of bounds", row, col)]
    OutOfBounds {
        /// 0-based row index as supplied by the caller.
        row: i32,
        /// 0-based column index as supplied by the caller.
        col: i32,
    },
    /// The target square already holds a mark.
    #[display("square at ({}, {}) is already occupied", row, col)]
    Occupied {
        /// 0-based row index as supplied by the caller.
        row: i32,
        /// 0-based column index as supplied by the caller.
        col: i32,
    },
    /// A move was attempted after the game ended.
    #[display("game is already over")]
    GameOver,
}

impl MoveError {
    /// True for argument errors the controller reports and retries.
    ///
    /// State errors (`GameOver`) are fatal for the session and must
    /// propagate instead.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            MoveError::OutOfBounds { .. } | MoveError::Occupied { .. }
        )
    }
}

/// Fatal errors raised by the console controller.
///
/// Per-move argument errors are handled inside the game loop; every
/// variant here ends the session.
#[derive(Debug, Display, Error, From)]
pub enum ControllerError {
    /// The input stream ended before a quit token or game over.
    #[display("ran out of input")]
    InputExhausted,
    /// The output sink rejected a write.
    #[display("failed to transmit output: {}", _0)]
    #[from]
    Io(std::io::Error),
    /// The model rejected a move in a non-recoverable way.
    #[display("model rejected move: {}", _0)]
    #[from]
    Model(MoveError),
}
