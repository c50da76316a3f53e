//! Core domain types for super tic-tac-toe.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player one (goes first).
    One,
    /// Player two (goes second).
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player one"),
            Player::Two => write!(f, "Player two"),
        }
    }
}

/// A single cell on a sub-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// One of the nine inner 3×3 boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SubBoard {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl SubBoard {
    /// Creates a new empty sub-board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sub-board from raw cells.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Sets the cell at the given position.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns a copy with every mark swapped to the other player.
    pub fn swapped(&self) -> Self {
        let mut cells = self.cells;
        for cell in &mut cells {
            if let Cell::Occupied(player) = *cell {
                *cell = Cell::Occupied(player.opponent());
            }
        }
        Self { cells }
    }
}

/// The 3×3 arrangement of sub-boards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MetaBoard {
    /// Sub-boards in row-major order (0-8).
    boards: [SubBoard; 9],
}

impl MetaBoard {
    /// Creates a meta-board of nine empty sub-boards.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a meta-board from raw sub-boards.
    pub fn from_boards(boards: [SubBoard; 9]) -> Self {
        Self { boards }
    }

    /// Gets the sub-board at the given position.
    pub fn board(&self, pos: Position) -> &SubBoard {
        &self.boards[pos.to_index()]
    }

    /// Gets a single cell.
    pub fn cell(&self, board: Position, cell: Position) -> Cell {
        self.board(board).get(cell)
    }

    /// Writes a single cell.
    pub(crate) fn set(&mut self, board: Position, cell: Position, value: Cell) {
        self.boards[board.to_index()].set(cell, value);
    }

    /// Returns all sub-boards.
    pub fn boards(&self) -> &[SubBoard; 9] {
        &self.boards
    }

    /// Counts occupied cells across all sub-boards.
    pub fn occupied(&self) -> usize {
        self.boards
            .iter()
            .flat_map(|b| b.cells().iter())
            .filter(|c| **c != Cell::Empty)
            .count()
    }

    /// Counts cells marked by the given player.
    pub fn marks(&self, player: Player) -> usize {
        self.boards
            .iter()
            .flat_map(|b| b.cells().iter())
            .filter(|c| **c == Cell::Occupied(player))
            .count()
    }
}

/// Resolved status of a board: a sub-board or the whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Still open.
    InProgress,
    /// Three in a row for a player.
    Won(Player),
    /// Nothing left to play and nobody won.
    Draw,
}

impl Outcome {
    /// Returns true once the board is won or drawn.
    pub fn is_concluded(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Cell this outcome contributes to the derived meta board.
    ///
    /// A drawn board contributes nothing toward a meta line.
    pub fn as_cell(&self) -> Cell {
        self.winner().map_or(Cell::Empty, Cell::Occupied)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
