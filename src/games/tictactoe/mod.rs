//! Tic-tac-toe: game model, rules, and console controller.

mod controller;
mod error;
mod model;
mod position;
mod rules;
mod types;

pub use controller::ConsoleController;
pub use error::{ControllerError, MoveError};
pub use model::{TicTacToe, TicTacToeModel};
pub use position::Position;
pub use rules::{check_winner, is_draw, is_full};
pub use types::{Board, GameStatus, Player, Square};

/// Alias for clarity when talking about marks on the board.
pub type Mark = Player;
