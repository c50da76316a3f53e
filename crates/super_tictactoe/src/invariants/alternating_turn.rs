//! Alternating turn invariants: player one, player two, player one, ...

use super::{Invariant, Transition};
use crate::state::GameState;
use crate::types::Player;

/// Invariant: Turn order matches the marks on the board.
///
/// Player one moves first, so with equal mark counts player one is to
/// move and with one extra player-one mark player two is.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let ones = state.boards().marks(Player::One);
        let twos = state.boards().marks(Player::Two);

        match ones.checked_sub(twos) {
            Some(0) => state.current_player() == Player::One,
            Some(1) => state.current_player() == Player::Two,
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns starting with player one"
    }
}

/// Invariant: An accepted move passes the turn and becomes the last move.
pub struct TurnPassedInvariant;

impl<'a> Invariant<Transition<'a>> for TurnPassedInvariant {
    fn holds(t: &Transition<'a>) -> bool {
        t.after.current_player() == t.before.current_player().opponent()
            && t.after.last_move() == Some(t.mov)
    }

    fn description() -> &'static str {
        "Accepted move passes the turn and is recorded as the last move"
    }
}
