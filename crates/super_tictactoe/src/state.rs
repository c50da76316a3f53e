//! Immutable game-state snapshots.

use crate::action::{IllegalMoveError, Move};
use crate::contracts::{Contract, LegalMove, MoveContract};
use crate::invariants::{InvariantSet, StateInvariants};
use crate::position::Position;
use crate::rules;
use crate::types::{Cell, MetaBoard, Outcome, Player};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info, instrument};

/// Complete game state.
///
/// A snapshot is never changed in place: [`GameState::apply`] returns a
/// new one and leaves `self` untouched.
///
/// Deserializing checks the snapshot against [`StateInvariants`], so a
/// loaded state is one the engine could have produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameState {
    pub(crate) boards: MetaBoard,
    pub(crate) current_player: Player,
    pub(crate) last_move: Option<Move>,
    pub(crate) game_over: bool,
}

impl GameState {
    /// Creates the initial state: empty boards, player one to move.
    pub fn new() -> Self {
        Self {
            boards: MetaBoard::new(),
            current_player: Player::One,
            last_move: None,
            game_over: false,
        }
    }

    /// Returns the meta-board.
    pub fn boards(&self) -> &MetaBoard {
        &self.boards
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the most recently accepted move.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Outcome of the whole game.
    pub fn outcome(&self) -> Outcome {
        rules::meta_board_outcome(&self.boards)
    }

    /// Outcome of every sub-board, in position order.
    pub fn outcomes(&self) -> [Outcome; 9] {
        rules::board_outcomes(&self.boards)
    }

    /// Outcome of a single sub-board.
    pub fn board_outcome(&self, board: Position) -> Outcome {
        rules::sub_board_outcome(self.boards.board(board))
    }

    /// The board the next move is forced onto.
    ///
    /// `None` means free choice: either nothing has been played yet or the
    /// board named by the last move's cell is already decided.
    pub fn forced_board(&self) -> Option<Position> {
        let target = self.last_move?.cell;
        if self.board_outcome(target).is_concluded() {
            None
        } else {
            Some(target)
        }
    }

    /// Every move [`GameState::apply`] would accept, board-major.
    #[instrument(skip(self))]
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.game_over {
            return Vec::new();
        }
        let boards = match self.forced_board() {
            Some(board) => vec![board],
            None => Position::ALL.to_vec(),
        };
        boards
            .into_iter()
            .flat_map(|board| Position::ALL.map(|cell| Move::new(board, cell)))
            .filter(|mov| LegalMove::check(mov, self).is_ok())
            .collect()
    }

    /// Applies a move, returning the next snapshot.
    ///
    /// All-or-nothing: on error no state is produced and `self` is
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMoveError`] if the game is over or the move breaks a
    /// legality rule.
    #[instrument(skip(self, mov), fields(mov = %mov, player = ?self.current_player))]
    pub fn apply(&self, mov: Move) -> Result<GameState, IllegalMoveError> {
        MoveContract::pre(self, &mov).inspect_err(|e| {
            debug!(reason = %e.reason, "Move rejected");
        })?;

        let mut next = self.clone();
        next.boards
            .set(mov.board, mov.cell, Cell::Occupied(self.current_player));
        next.current_player = self.current_player.opponent();
        next.last_move = Some(mov);

        let outcome = next.outcome();
        next.game_over = outcome.is_concluded();

        #[cfg(debug_assertions)]
        MoveContract::post(self, &mov, &next)?;

        debug!(board_outcome = %next.board_outcome(mov.board), "Move applied");
        if next.game_over {
            info!(%outcome, "Game over");
        }

        Ok(next)
    }

    /// Replays moves from the initial state.
    ///
    /// # Errors
    ///
    /// Stops at the first move the engine refuses.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<GameState, IllegalMoveError> {
        moves
            .iter()
            .try_fold(GameState::new(), |state, mov| state.apply(*mov))
    }
}

/// Wire form of [`GameState`], checked before it becomes one.
#[derive(Deserialize)]
struct GameStateRepr {
    boards: MetaBoard,
    current_player: Player,
    last_move: Option<Move>,
    game_over: bool,
}

impl<'de> Deserialize<'de> for GameState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = GameStateRepr::deserialize(deserializer)?;
        let state = GameState {
            boards: repr.boards,
            current_player: repr.current_player,
            last_move: repr.last_move,
            game_over: repr.game_over,
        };

        StateInvariants::check_all(&state).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            debug!(%descriptions, "Rejected snapshot");
            <D::Error as serde::de::Error>::custom(format!(
                "unreachable game state: {}",
                descriptions
            ))
        })?;

        Ok(state)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
