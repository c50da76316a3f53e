//! Last-move invariant: the recorded move agrees with the board.

use super::Invariant;
use crate::state::GameState;
use crate::types::Cell;

/// Invariant: `last_move` is empty only on an empty board.
///
/// When set, its cell holds the mark of the player who just moved.
pub struct LastMoveInvariant;

impl Invariant<GameState> for LastMoveInvariant {
    fn holds(state: &GameState) -> bool {
        match state.last_move() {
            None => state.boards().occupied() == 0,
            Some(mov) => {
                state.boards().cell(mov.board, mov.cell)
                    == Cell::Occupied(state.current_player().opponent())
            }
        }
    }

    fn description() -> &'static str {
        "Last move is unset only before the first move and holds the previous mover's mark"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;

    #[test]
    fn test_new_game_holds() {
        assert!(LastMoveInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_after_move_holds() {
        let mov = Move::from_indices(5, 2).expect("index in range");
        let state = GameState::new().apply(mov).expect("opening move");
        assert!(LastMoveInvariant::holds(&state));
    }

    #[test]
    fn test_cleared_last_move_violates() {
        let mov = Move::from_indices(5, 2).expect("index in range");
        let mut state = GameState::new().apply(mov).expect("opening move");
        state.last_move = None;
        assert!(!LastMoveInvariant::holds(&state));
    }
}
