//! Two-player console tic-tac-toe.
//!
//! The crate splits into a rule-enforcing game model and a thin
//! console controller consuming it through the [`TicTacToe`] trait.
//!
//! # Architecture
//!
//! - **Model**: owns the board, turn, and status; enforces move
//!   legality, win/draw detection, and turn alternation.
//! - **Rules**: pure functions over the board (win and draw checks).
//! - **Controller**: text loop reading moves and writing the board.
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameStatus, Player, TicTacToe, TicTacToeModel};
//!
//! let mut game = TicTacToeModel::new();
//! assert_eq!(game.turn(), Player::X);
//!
//! game.make_move(1, 1)?;
//! assert_eq!(game.turn(), Player::O);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok::<(), tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod games;

pub use games::tictactoe::{
    Board, ConsoleController, ControllerError, GameStatus, Mark, MoveError, Player, Position,
    Square, TicTacToe, TicTacToeModel, check_winner, is_draw, is_full,
};
