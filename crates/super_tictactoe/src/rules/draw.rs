//! Fullness check for a 3×3 grid.

use super::Grid;
use crate::position::Position;
use crate::types::Cell;

/// Checks if every cell of the grid is occupied.
///
/// A full grid with no winner is a draw.
pub fn is_full<G: Grid + ?Sized>(grid: &G) -> bool {
    Position::ALL.iter().all(|pos| grid.cell(*pos) != Cell::Empty)
}
