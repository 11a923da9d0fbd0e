//! Console tic-tac-toe binary.
//!
//! Plays one interactive game on stdin/stdout. Logs go to stderr so
//! the game transcript stays clean.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tictactoe::{ConsoleController, TicTacToeModel};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match &cli.log {
        Some(spec) => EnvFilter::new(spec),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("starting console tic-tac-toe");

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let mut controller = ConsoleController::new(stdin, stdout);
    let mut model = TicTacToeModel::new();
    controller.play_game(&mut model)?;

    Ok(())
}
