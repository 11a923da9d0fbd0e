//! Command-line interface for the console game.

use clap::Parser;

/// Two-player console tic-tac-toe.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player console tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Tracing filter, e.g. "debug" or "tictactoe=trace" (overrides RUST_LOG).
    #[arg(long)]
    pub log: Option<String>,
}
