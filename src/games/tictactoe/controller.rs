//! Console controller for tic-tac-toe.
//!
//! A thin text loop over the [`TicTacToe`] interface: reads
//! whitespace-delimited commands, drives the model, and writes the
//! board and status messages. All game rules live in the model.

use super::error::ControllerError;
use super::model::TicTacToe;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Whitespace-delimited token reader over a buffered input stream.
///
/// Tokens may span lines arbitrarily: "1 1\n" and "1\n1\n" read the
/// same way.
#[derive(Debug)]
struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or `None` once the stream is exhausted.
    fn next(&mut self) -> Result<Option<String>, std::io::Error> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

/// Console controller driving one game over a text stream pair.
///
/// Input is typically stdin and output stdout, but any
/// `BufRead`/`Write` pair works, which is how the controller tests
/// run against in-memory buffers.
#[derive(Debug)]
pub struct ConsoleController<R, W> {
    tokens: Tokens<R>,
    out: W,
}

impl<R: BufRead, W: Write> ConsoleController<R, W> {
    /// Creates a controller over the given input and output streams.
    pub fn new(input: R, output: W) -> Self {
        Self {
            tokens: Tokens::new(input),
            out: output,
        }
    }

    /// Plays a single game to completion or quit.
    ///
    /// Each turn prints the board and a prompt, then expects either a
    /// case-insensitive `q` or two integer tokens giving a 1-based
    /// row and column. Argument errors (non-numeric tokens, illegal
    /// moves) are reported and retried. Returns normally on quit and
    /// on natural game end.
    ///
    /// # Errors
    ///
    /// - [`ControllerError::InputExhausted`] if the input stream ends
    ///   before a quit token or game over.
    /// - [`ControllerError::Io`] if the output sink rejects a write.
    /// - [`ControllerError::Model`] if the model rejects a move with
    ///   a state error.
    #[instrument(skip_all)]
    pub fn play_game<M: TicTacToe>(&mut self, model: &mut M) -> Result<(), ControllerError> {
        while !model.is_game_over() {
            writeln!(self.out, "{model}")?;
            writeln!(self.out, "Enter a move for {}:", model.turn())?;

            let Some(token) = self.tokens.next()? else {
                return Err(ControllerError::InputExhausted);
            };
            if token.eq_ignore_ascii_case("q") {
                return self.quit(model);
            }
            let Ok(row) = token.parse::<i32>() else {
                writeln!(self.out, "Please enter numbers for position.")?;
                continue;
            };

            let Some(token) = self.tokens.next()? else {
                return Err(ControllerError::InputExhausted);
            };
            if token.eq_ignore_ascii_case("q") {
                return self.quit(model);
            }
            let Ok(col) = token.parse::<i32>() else {
                writeln!(self.out, "Please enter numbers for position.")?;
                continue;
            };

            // Players enter 1-based coordinates; the model is 0-based.
            match model.make_move(row - 1, col - 1) {
                Ok(()) => {}
                Err(err) if err.is_invalid_argument() => {
                    debug!(%err, "rejected move");
                    writeln!(self.out, "Invalid move. Try again.")?;
                }
                Err(err) => return Err(ControllerError::Model(err)),
            }
        }

        writeln!(self.out, "{model}")?;
        write!(self.out, "Game is over! ")?;
        match model.winner() {
            Some(winner) => writeln!(self.out, "{winner} wins.")?,
            None => writeln!(self.out, "Tie game.")?,
        }
        Ok(())
    }

    fn quit<M: TicTacToe>(&mut self, model: &M) -> Result<(), ControllerError> {
        debug!("player quit");
        writeln!(self.out, "Game quit! Ending game state:")?;
        writeln!(self.out, "{model}")?;
        Ok(())
    }
}
