//! Command-line interface for super_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Super Tic-Tac-Toe - nine boards, one game
#[derive(Parser, Debug)]
#[command(name = "super_tictactoe")]
#[command(about = "Play super tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the display config (TOML). Defaults apply if it doesn't exist.
    #[arg(short, long, global = true, default_value = "super_tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a two-player game on stdin/stdout
    Play,

    /// Apply a list of moves and print the resulting board
    Replay {
        /// Moves as `board,cell` pairs (0-8 each), e.g. `4,4 4,0`
        #[arg(required = true)]
        moves: Vec<String>,

        /// Print the final state as JSON instead of a board
        #[arg(long)]
        json: bool,
    },
}
