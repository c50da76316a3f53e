//! Win detection on a 3×3 grid.

use super::Grid;
use crate::position::Position;
use crate::types::{Cell, Player};

/// The eight winning lines: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns true if `player` holds all three cells of any line.
pub fn has_line<G: Grid + ?Sized>(grid: &G, player: Player) -> bool {
    let mark = Cell::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| grid.cell(*pos) == mark))
}

/// Checks if there is a winner on the grid.
///
/// Player one's lines are checked first, so a grid where both players
/// hold a line reports player one.
pub fn check_winner<G: Grid + ?Sized>(grid: &G) -> Option<Player> {
    [Player::One, Player::Two]
        .into_iter()
        .find(|player| has_line(grid, *player))
}
