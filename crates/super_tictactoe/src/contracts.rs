//! Move validation as pre- and postconditions.
//!
//! Each placement rule is its own precondition type so a rejection names
//! exactly one rule. The postcondition re-checks the invariants after a move
//! has been applied.

use crate::action::{IllegalMoveError, IllegalMoveReason, Move};
use crate::invariants::{InvariantSet, StateInvariants, Transition, TransitionInvariants};
use crate::state::GameState;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract
// ─────────────────────────────────────────────────────────────

/// Conditions around applying `A` to `S`.
///
/// `pre` gates the action; `post` compares the snapshots it produced.
pub trait Contract<S, A> {
    /// Rejects an action that may not be applied to `state`.
    fn pre(state: &S, action: &A) -> Result<(), IllegalMoveError>;

    /// Rejects a transition that broke an invariant.
    fn post(before: &S, action: &A, after: &S) -> Result<(), IllegalMoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Placement rules
// ─────────────────────────────────────────────────────────────

/// Precondition: The game must not be over.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects every move once the game has concluded.
    pub fn check(mov: &Move, state: &GameState) -> Result<(), IllegalMoveError> {
        if state.is_game_over() {
            Err(IllegalMoveError::new(*mov, IllegalMoveReason::GameOver))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The targeted cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects occupied cells.
    pub fn check(mov: &Move, state: &GameState) -> Result<(), IllegalMoveError> {
        if state.boards().board(mov.board).is_empty(mov.cell) {
            Ok(())
        } else {
            Err(IllegalMoveError::new(*mov, IllegalMoveReason::CellOccupied))
        }
    }
}

/// Precondition: The targeted sub-board must still be in progress.
///
/// A won board stays frozen even with empty cells left.
pub struct BoardIsOpen;

impl BoardIsOpen {
    /// Rejects won or drawn sub-boards.
    pub fn check(mov: &Move, state: &GameState) -> Result<(), IllegalMoveError> {
        if state.board_outcome(mov.board).is_concluded() {
            Err(IllegalMoveError::new(*mov, IllegalMoveReason::BoardConcluded))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The move must target the forced board, if any.
///
/// The opening move and moves after a decided target board are free.
pub struct ForcedBoard;

impl ForcedBoard {
    /// Rejects moves away from the board the last move sent play to.
    pub fn check(mov: &Move, state: &GameState) -> Result<(), IllegalMoveError> {
        match state.forced_board() {
            Some(required) if required != mov.board => Err(IllegalMoveError::new(
                *mov,
                IllegalMoveReason::WrongBoard { required },
            )),
            _ => Ok(()),
        }
    }
}

/// Composite precondition: the placement rules, in order.
///
/// Does not look at whether the game is over.
pub struct LegalMove;

impl LegalMove {
    /// Validates placement rules for a move.
    pub fn check(mov: &Move, state: &GameState) -> Result<(), IllegalMoveError> {
        CellIsEmpty::check(mov, state)?;
        BoardIsOpen::check(mov, state)?;
        ForcedBoard::check(mov, state)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move contract
// ─────────────────────────────────────────────────────────────

/// The full check run by [`GameState::apply`].
///
/// Before:
/// - Game is not over
/// - Cell is empty
/// - Sub-board is still open
/// - Forced board is respected
///
/// After (debug builds):
/// - Exactly one empty cell gained the mover's mark
/// - The turn passed and the move was recorded
/// - Turn parity, last move and game-over flag agree with the board
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(state: &GameState, action: &Move) -> Result<(), IllegalMoveError> {
        GameNotOver::check(action, state)?;
        LegalMove::check(action, state)
    }

    #[instrument(skip_all)]
    fn post(before: &GameState, action: &Move, after: &GameState) -> Result<(), IllegalMoveError> {
        let mov = *action;
        let transition = Transition { before, after, mov };
        let mut violations = Vec::new();
        if let Err(found) = TransitionInvariants::check_all(&transition) {
            violations.extend(found);
        }
        if let Err(found) = StateInvariants::check_all(after) {
            violations.extend(found);
        }

        if violations.is_empty() {
            return Ok(());
        }

        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%mov, %descriptions, "Postcondition failed");
        Err(IllegalMoveError::new(
            mov,
            IllegalMoveReason::InvariantViolation(format!("Postcondition failed: {}", descriptions)),
        ))
    }
}
