//! Terminal front-end for the super tic-tac-toe engine.
//!
//! Parses typed moves, keeps one [`GameEngine`](super_tictactoe::GameEngine)
//! per session and prints the board after every change.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod input;
pub mod replay;
pub mod session;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DisplayConfig};
pub use input::{Input, InputError, parse_move};
pub use replay::{ReplayFormat, replay};
pub use session::{Session, status_line};
