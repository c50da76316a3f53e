//! Super tic-tac-toe rule engine.
//!
//! Nine tic-tac-toe boards arranged as a tic-tac-toe board. The cell you
//! play decides which board your opponent must play next, unless that board
//! is already decided. Win three boards in a row to win the game.
//!
//! # Architecture
//!
//! - **State**: immutable [`GameState`] snapshots; [`GameState::apply`]
//!   returns a new one
//! - **Rules**: one line check over any 3×3 [`Grid`], used for sub-boards
//!   and for the derived meta board
//! - **Contracts**: each legality rule is its own precondition, with
//!   invariants re-checked after every move in debug builds
//! - **Engine**: [`GameEngine`] owns the current snapshot for a front-end
//!
//! # Example
//!
//! ```
//! use super_tictactoe::{GameEngine, Move, Player, Position};
//!
//! let mut engine = GameEngine::new();
//! let state = engine.apply_move(Move::new(Position::Center, Position::Center)).unwrap();
//! assert_eq!(state.current_player(), Player::Two);
//! assert_eq!(state.forced_board(), Some(Position::Center));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod contracts;
pub mod invariants;
pub mod rules;

mod action;
mod display;
mod engine;
mod position;
mod state;
mod types;

pub use action::{IllegalMoveError, IllegalMoveReason, Move};
pub use display::{Symbols, render};
pub use engine::{
    GameEngine, apply_move, check_move, is_legal, meta_outcome, reset, sub_board_outcome,
};
pub use position::Position;
pub use rules::Grid;
pub use state::GameState;
pub use types::{Cell, MetaBoard, Outcome, Player, SubBoard};
