//! Property tests over random legal games.

use proptest::prelude::*;
use super_tictactoe::rules::has_line;
use super_tictactoe::{
    Cell, GameState, Move, Outcome, Player, Position, SubBoard, apply_move, is_legal,
    sub_board_outcome,
};

/// Plays a game picking moves by index into the legal move list.
///
/// Returns every snapshot, starting with the initial state.
fn playout(choices: &[usize]) -> Vec<GameState> {
    let mut states = vec![GameState::new()];
    for choice in choices {
        let current = states.last().expect("at least the initial state");
        let moves = current.legal_moves();
        if moves.is_empty() {
            break;
        }
        let next = apply_move(moves[choice % moves.len()], current).expect("listed move is legal");
        states.push(next);
    }
    states
}

fn cell_strategy() -> impl Strategy<Value = Cell> {
    prop_oneof![
        Just(Cell::Empty),
        Just(Cell::Occupied(Player::One)),
        Just(Cell::Occupied(Player::Two)),
    ]
}

fn swap(outcome: Outcome) -> Outcome {
    match outcome {
        Outcome::Won(player) => Outcome::Won(player.opponent()),
        other => other,
    }
}

proptest! {
    #[test]
    fn prop_cells_are_write_once(choices in prop::collection::vec(any::<usize>(), 0..120)) {
        let states = playout(&choices);
        for pair in states.windows(2) {
            for board in Position::ALL {
                for cell in Position::ALL {
                    let was = pair[0].boards().cell(board, cell);
                    if was != Cell::Empty {
                        prop_assert_eq!(pair[1].boards().cell(board, cell), was);
                    }
                }
            }
            prop_assert_eq!(pair[1].boards().occupied(), pair[0].boards().occupied() + 1);
        }
    }

    #[test]
    fn prop_players_alternate_from_player_one(choices in prop::collection::vec(any::<usize>(), 0..120)) {
        let states = playout(&choices);
        for (i, state) in states.iter().enumerate() {
            let expected = if i % 2 == 0 { Player::One } else { Player::Two };
            prop_assert_eq!(state.current_player(), expected);
        }
    }

    #[test]
    fn prop_game_over_is_monotone_and_matches_outcome(choices in prop::collection::vec(any::<usize>(), 0..120)) {
        let states = playout(&choices);
        for state in &states {
            prop_assert_eq!(state.is_game_over(), state.outcome().is_concluded());
        }
        // Only the last snapshot may be over.
        for state in &states[..states.len() - 1] {
            prop_assert!(!state.is_game_over());
        }
    }

    #[test]
    fn prop_forced_board_is_enforced(
        choices in prop::collection::vec(any::<usize>(), 1..80),
        board in 0usize..9,
        cell in 0usize..9,
    ) {
        let states = playout(&choices);
        let state = states.last().expect("at least the initial state");
        prop_assume!(!state.is_game_over());

        let mov = Move::from_indices(board, cell).expect("index in range");
        let open = !state.board_outcome(mov.board).is_concluded();
        let empty = state.boards().board(mov.board).is_empty(mov.cell);

        match state.forced_board() {
            Some(required) if required != mov.board => {
                prop_assert!(apply_move(mov, state).is_err());
            }
            _ => {
                prop_assert_eq!(is_legal(mov, state), open && empty);
            }
        }
    }

    #[test]
    fn prop_rejected_moves_change_nothing(
        choices in prop::collection::vec(any::<usize>(), 0..80),
        board in 0usize..9,
        cell in 0usize..9,
    ) {
        let states = playout(&choices);
        let state = states.last().expect("at least the initial state");
        let before = state.clone();

        let mov = Move::from_indices(board, cell).expect("index in range");
        if apply_move(mov, state).is_err() {
            prop_assert!(!state.legal_moves().contains(&mov));
        }
        prop_assert_eq!(state, &before);
    }

    #[test]
    fn prop_sub_board_outcome_symmetric_under_swap(cells in prop::array::uniform9(cell_strategy())) {
        let board = SubBoard::from_cells(cells);
        // Boards with lines for both players are unreachable and break ties toward player one.
        prop_assume!(!(has_line(&board, Player::One) && has_line(&board, Player::Two)));

        prop_assert_eq!(sub_board_outcome(&board.swapped()), swap(sub_board_outcome(&board)));
    }
}
