//! Game-over invariant: the flag tracks the meta-board outcome.

use super::Invariant;
use crate::state::GameState;

/// Invariant: `game_over` is set exactly when the meta-board is decided.
pub struct GameOverInvariant;

impl Invariant<GameState> for GameOverInvariant {
    fn holds(state: &GameState) -> bool {
        state.is_game_over() == state.outcome().is_concluded()
    }

    fn description() -> &'static str {
        "Game-over flag matches the meta-board outcome"
    }
}
