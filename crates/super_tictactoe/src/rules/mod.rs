//! Board evaluation rules.
//!
//! Pure functions over any 9-cell grid. The same line check scores a
//! single sub-board and the derived meta board.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::is_full;
pub use outcome::{board_outcomes, derived_board, meta_board_outcome, sub_board_outcome};
pub use win::{check_winner, has_line};

use crate::position::Position;
use crate::types::{Cell, SubBoard};

/// Anything that can be read as a 3×3 grid of cells.
pub trait Grid {
    /// Returns the cell at the given position.
    fn cell(&self, pos: Position) -> Cell;
}

impl Grid for SubBoard {
    fn cell(&self, pos: Position) -> Cell {
        self.get(pos)
    }
}

impl Grid for [Cell; 9] {
    fn cell(&self, pos: Position) -> Cell {
        self[pos.to_index()]
    }
}
