//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating board state. Rules are separated from
//! board storage so the model stays a thin state machine over them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;
