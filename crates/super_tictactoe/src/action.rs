//! First-class move and error types.
//!
//! A move names a sub-board and a cell inside it. It carries no player:
//! the mark always belongs to whoever is to move.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// A move: a sub-board and a cell within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The sub-board being played.
    pub board: Position,
    /// The cell inside that sub-board.
    pub cell: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(board: Position, cell: Position) -> Self {
        Self { board, cell }
    }

    /// Creates a move from raw indices, rejecting anything outside 0-8.
    pub fn from_indices(board: usize, cell: usize) -> Option<Self> {
        Some(Self::new(
            Position::from_index(board)?,
            Position::from_index(cell)?,
        ))
    }

    /// Returns the sub-board of this move.
    pub fn board(&self) -> Position {
        self.board
    }

    /// Returns the cell of this move.
    pub fn cell(&self) -> Position {
        self.cell
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.board, self.cell)
    }
}

/// Which legality rule a rejected move broke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum IllegalMoveReason {
    /// The game has already concluded.
    #[display("the game is already over")]
    GameOver,

    /// The targeted cell already holds a mark.
    #[display("the cell is already occupied")]
    CellOccupied,

    /// The targeted sub-board is already won or drawn.
    #[display("that board is already decided")]
    BoardConcluded,

    /// The forced-board rule sends play elsewhere.
    #[display("the move must be played on board {}", required)]
    WrongBoard {
        /// The board the move had to target.
        required: Position,
    },

    /// A post-condition failed after the move was applied.
    #[display("invariant violation: {}", _0)]
    InvariantViolation(String),
}

/// A move the engine refused. Nothing was applied.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Illegal move {}: {}", mov, reason)]
pub struct IllegalMoveError {
    /// The rejected move.
    pub mov: Move,
    /// The rule it broke.
    pub reason: IllegalMoveReason,
}

impl IllegalMoveError {
    /// Creates a new error for the given move.
    pub fn new(mov: Move, reason: IllegalMoveReason) -> Self {
        Self { mov, reason }
    }

    /// Returns the rejected move.
    pub fn mov(&self) -> Move {
        self.mov
    }

    /// Returns the broken rule.
    pub fn reason(&self) -> &IllegalMoveReason {
        &self.reason
    }
}
