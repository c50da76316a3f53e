//! Game engine operations.
//!
//! Every operation takes a snapshot and returns a value or a new snapshot.
//! [`GameEngine`] holds the one mutable slot a front-end needs.

use crate::action::{IllegalMoveError, Move};
use crate::contracts::{Contract, LegalMove, MoveContract};
use crate::rules;
use crate::state::GameState;
use crate::types::{Outcome, SubBoard};
use tracing::{debug, info, instrument};

/// Returns true if the move satisfies the placement rules.
///
/// Ignores whether the game is over; [`apply_move`] checks that too.
pub fn is_legal(mov: Move, state: &GameState) -> bool {
    LegalMove::check(&mov, state).is_ok()
}

/// Like [`is_legal`] plus the game-over check, naming the broken rule.
///
/// # Errors
///
/// Returns the error [`apply_move`] would return for this move.
pub fn check_move(mov: Move, state: &GameState) -> Result<(), IllegalMoveError> {
    MoveContract::pre(state, &mov)
}

/// Applies a move to a snapshot, returning the next snapshot.
///
/// # Errors
///
/// Returns [`IllegalMoveError`] when the game is over or the move is
/// illegal. Nothing is applied in that case.
pub fn apply_move(mov: Move, state: &GameState) -> Result<GameState, IllegalMoveError> {
    state.apply(mov)
}

/// Scores a single sub-board.
pub fn sub_board_outcome(board: &SubBoard) -> Outcome {
    rules::sub_board_outcome(board)
}

/// Scores the whole game from the sub-board outcomes.
pub fn meta_outcome(state: &GameState) -> Outcome {
    state.outcome()
}

/// Returns the initial state.
pub fn reset() -> GameState {
    GameState::new()
}

/// Owns the current snapshot on behalf of a front-end.
///
/// Moves must be applied one at a time per game; wrap the engine in a
/// mutex or actor to share it.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates an engine at the initial state.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a read-only view of the current state.
    pub fn current_state(&self) -> &GameState {
        &self.state
    }

    /// Applies a move and returns the new state.
    ///
    /// # Errors
    ///
    /// On [`IllegalMoveError`] the current state is left as it was.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, mov: Move) -> Result<&GameState, IllegalMoveError> {
        let next = self.state.apply(mov)?;
        self.state = next;
        Ok(&self.state)
    }

    /// Starts a fresh game and returns its state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> &GameState {
        info!(moves_played = self.state.boards().occupied(), "Resetting game");
        self.state = reset();
        &self.state
    }

    /// Moves currently accepted by [`GameEngine::apply_move`].
    pub fn legal_moves(&self) -> Vec<Move> {
        let moves = self.state.legal_moves();
        debug!(count = moves.len(), "Listed legal moves");
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::IllegalMoveReason;
    use crate::position::Position;

    fn mv(board: usize, cell: usize) -> Move {
        Move::from_indices(board, cell).expect("index in range")
    }

    #[test]
    fn test_rejected_move_keeps_state() {
        let mut engine = GameEngine::new();
        engine.apply_move(mv(4, 4)).expect("opening move");
        let before = engine.current_state().clone();

        let err = engine.apply_move(mv(0, 0)).expect_err("forced onto 4");
        assert_eq!(
            err.reason,
            IllegalMoveReason::WrongBoard {
                required: Position::Center
            }
        );
        assert_eq!(engine.current_state(), &before);
    }

    #[test]
    fn test_reset_returns_initial_state() {
        let mut engine = GameEngine::new();
        engine.apply_move(mv(1, 1)).expect("opening move");
        engine.apply_move(mv(1, 2)).expect("forced board");
        assert_eq!(engine.reset(), &GameState::new());
    }

    #[test]
    fn test_is_legal_ignores_game_over() {
        let mut state = GameState::new();
        state.game_over = true;
        assert!(is_legal(mv(0, 0), &state));
        assert!(check_move(mv(0, 0), &state).is_err());
    }

    #[test]
    fn test_last_open_cell_draws_the_game() {
        use crate::types::{Cell, MetaBoard, Player};

        const E: Cell = Cell::Empty;
        const A: Cell = Cell::Occupied(Player::One);
        const B: Cell = Cell::Occupied(Player::Two);

        let one = SubBoard::from_cells([A, A, A, E, E, E, E, E, E]);
        let one_padded = SubBoard::from_cells([A, A, A, B, B, E, E, E, E]);
        let two = SubBoard::from_cells([B, B, B, E, E, E, E, E, E]);
        // A B A / B A A / B _ B: one cell short of a draw.
        let almost = SubBoard::from_cells([A, B, A, B, A, A, B, E, B]);

        // Meta layout 1 2 1 / 1 2 ? / 2 1 1 has no line for anyone.
        let state = GameState {
            boards: MetaBoard::from_boards([
                one_padded, two, one_padded, one_padded, two, almost, two, one, one,
            ]),
            current_player: Player::One,
            // Sends play to board 0, which is decided, so the choice is free.
            last_move: Some(mv(1, 0)),
            game_over: false,
        };
        assert_eq!(meta_outcome(&state), Outcome::InProgress);
        assert_eq!(state.forced_board(), None);

        let last = mv(5, 7);
        assert_eq!(state.legal_moves(), vec![last]);

        let over = apply_move(last, &state).expect("final move");
        assert_eq!(sub_board_outcome(over.boards().board(Position::MiddleRight)), Outcome::Draw);
        assert_eq!(meta_outcome(&over), Outcome::Draw);
        assert!(over.is_game_over());
        assert!(over.legal_moves().is_empty());

        let err = apply_move(mv(0, 5), &over).expect_err("game is over");
        assert_eq!(err.reason, IllegalMoveReason::GameOver);
    }
}
