//! Outcome derivation for sub-boards and the meta-board.
//!
//! Outcomes are derived from cell contents alone, never from move history.

use super::{check_winner, is_full};
use crate::position::Position;
use crate::types::{Cell, MetaBoard, Outcome, SubBoard};

/// Scores a single sub-board.
///
/// A line wins; otherwise a full board is a draw; otherwise the board is
/// still in progress.
pub fn sub_board_outcome(board: &SubBoard) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// Scores every sub-board, in position order.
pub fn board_outcomes(meta: &MetaBoard) -> [Outcome; 9] {
    let mut outcomes = [Outcome::InProgress; 9];
    for pos in Position::ALL {
        outcomes[pos.to_index()] = sub_board_outcome(meta.board(pos));
    }
    outcomes
}

/// Builds the derived 9-cell board of won sub-boards.
pub fn derived_board(outcomes: &[Outcome; 9]) -> [Cell; 9] {
    outcomes.map(|outcome| outcome.as_cell())
}

/// Scores the whole game.
///
/// The derived board of won sub-boards goes through the same line check as
/// a sub-board. Drawn sub-boards count for nobody, so the game is a draw
/// only once every sub-board is concluded and no meta line exists.
pub fn meta_board_outcome(meta: &MetaBoard) -> Outcome {
    let outcomes = board_outcomes(meta);
    if let Some(winner) = check_winner(&derived_board(&outcomes)) {
        Outcome::Won(winner)
    } else if outcomes.iter().all(Outcome::is_concluded) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
