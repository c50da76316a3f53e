//! Write-once invariant: cells never change once marked.

use super::{Invariant, Transition};
use crate::position::Position;
use crate::types::Cell;

/// Invariant: An accepted move marks exactly one empty cell.
///
/// The moved-to cell goes from Empty to the mover's mark. Every other of
/// the 81 cells is identical before and after.
pub struct WriteOnceInvariant;

impl<'a> Invariant<Transition<'a>> for WriteOnceInvariant {
    fn holds(t: &Transition<'a>) -> bool {
        let mover = t.before.current_player();

        Position::ALL.iter().all(|board| {
            Position::ALL.iter().all(|cell| {
                let was = t.before.boards().cell(*board, *cell);
                let now = t.after.boards().cell(*board, *cell);
                if *board == t.mov.board && *cell == t.mov.cell {
                    was == Cell::Empty && now == Cell::Occupied(mover)
                } else {
                    was == now
                }
            })
        })
    }

    fn description() -> &'static str {
        "Exactly one empty cell is marked per move (no overwrites)"
    }
}
