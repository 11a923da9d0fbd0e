//! Rule-enforcing game model for tic-tac-toe.

use super::error::MoveError;
use super::position::Position;
use super::rules;
use super::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Operations of a tic-tac-toe game.
///
/// This is the narrow interface the console controller consumes.
/// `Display` is part of the contract: the rendering format is fixed
/// (see [`TicTacToeModel`]) and collaborators rely on it verbatim.
pub trait TicTacToe: std::fmt::Display {
    /// Places the current player's mark at the given 0-based cell.
    ///
    /// Checks run in order: bounds, game over, occupancy. On success
    /// the win condition is evaluated over all 8 lines; a win or a
    /// full board ends the game, otherwise the turn flips.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if either index is outside `0..3`.
    /// - [`MoveError::GameOver`] if the game already ended.
    /// - [`MoveError::Occupied`] if the cell holds a mark.
    ///
    /// A rejected move leaves the board, turn, and status unchanged.
    fn make_move(&mut self, row: i32, col: i32) -> Result<(), MoveError>;

    /// Returns the player whose turn it is.
    ///
    /// Valid at any time. After a terminal move this keeps returning
    /// the last player to move, though no further move may use it.
    fn turn(&self) -> Player;

    /// Returns true once the game reached a terminal state.
    fn is_game_over(&self) -> bool;

    /// Returns the winner, or `None` while in progress or on a draw.
    fn winner(&self) -> Option<Player>;

    /// Returns the current game status.
    fn status(&self) -> GameStatus;

    /// Returns an independent copy of the board as a row-major grid.
    ///
    /// Mutating the returned grid never affects the model.
    fn board(&self) -> [[Square; 3]; 3];

    /// Returns the square at the given 0-based cell.
    ///
    /// Bounds-checked regardless of game-over state.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] if either index is outside `0..3`.
    fn mark_at(&self, row: i32, col: i32) -> Result<Square, MoveError>;
}

/// A game of tic-tac-toe.
///
/// Owns the sole copy of the board and enforces the rules atomically
/// per move: strict turn alternation starting with X, no overwrites,
/// and no moves after a win or draw. One instance per game session;
/// external synchronization is the caller's concern if shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeModel {
    /// The board. Never aliased; reads go out by value.
    board: Board,
    /// Player to move next. Frozen once the game ends.
    current_turn: Player,
    /// In progress, won, or drawn.
    status: GameStatus,
}

impl TicTacToeModel {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_turn: Player::X,
            status: GameStatus::InProgress,
        }
    }
}

impl Default for TicTacToeModel {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToe for TicTacToeModel {
    #[instrument(skip(self), fields(player = %self.current_turn))]
    fn make_move(&mut self, row: i32, col: i32) -> Result<(), MoveError> {
        let pos =
            Position::from_row_col(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied { row, col });
        }

        self.board.set(pos, Square::Occupied(self.current_turn));

        if let Some(winner) = rules::check_winner(&self.board) {
            debug!(%winner, "game won");
            self.status = GameStatus::Won(winner);
        } else if rules::is_full(&self.board) {
            debug!("board full, game drawn");
            self.status = GameStatus::Draw;
        } else {
            self.current_turn = self.current_turn.opponent();
        }
        Ok(())
    }

    fn turn(&self) -> Player {
        self.current_turn
    }

    fn is_game_over(&self) -> bool {
        self.status.is_over()
    }

    fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn board(&self) -> [[Square; 3]; 3] {
        self.board.grid()
    }

    fn mark_at(&self, row: i32, col: i32) -> Result<Square, MoveError> {
        let pos =
            Position::from_row_col(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        Ok(self.board.get(pos))
    }
}

impl std::fmt::Display for TicTacToeModel {
    /// Renders the board for the console: each row is a leading space
    /// followed by the cells joined with `" | "` (empty cell = one
    /// space), rows separated by a line of eleven dashes.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows: Vec<String> = self
            .board
            .grid()
            .iter()
            .map(|row| {
                let cells: Vec<&str> = row
                    .iter()
                    .map(|sq| match sq {
                        Square::Empty => " ",
                        Square::Occupied(player) => player.label(),
                    })
                    .collect();
                format!(" {}", cells.join(" | "))
            })
            .collect();
        write!(f, "{}", rows.join("\n-----------\n"))
    }
}
