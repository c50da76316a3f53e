//! Plain-text rendering of a game state.

use crate::position::Position;
use crate::state::GameState;
use crate::types::{Cell, Outcome, Player};
use serde::{Deserialize, Serialize};

/// Characters used to draw marks and board results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbols {
    /// Player one's mark.
    pub player_one: char,
    /// Player two's mark.
    pub player_two: char,
    /// A drawn sub-board in the summary.
    pub draw: char,
    /// An empty cell or open sub-board.
    pub empty: char,
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            player_one: 'X',
            player_two: 'O',
            draw: '-',
            empty: '.',
        }
    }
}

impl Symbols {
    /// Symbol for a player.
    pub fn player(&self, player: Player) -> char {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }

    /// Symbol for a cell.
    pub fn cell(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => self.empty,
            Cell::Occupied(player) => self.player(player),
        }
    }

    /// Symbol for a sub-board result.
    pub fn outcome(&self, outcome: Outcome) -> char {
        match outcome {
            Outcome::InProgress => self.empty,
            Outcome::Won(player) => self.player(player),
            Outcome::Draw => self.draw,
        }
    }
}

/// Renders the 9×9 grid followed by the 3×3 summary of sub-board results.
pub fn render(state: &GameState, symbols: &Symbols) -> String {
    let mut out = String::new();

    for board_row in 0..3 {
        if board_row > 0 {
            out.push_str("-------+-------+------\n");
        }
        for cell_row in 0..3 {
            for board in in_row(board_row) {
                if board.col() > 0 {
                    out.push_str(" |");
                }
                for cell in in_row(cell_row) {
                    out.push(' ');
                    out.push(symbols.cell(state.boards().cell(board, cell)));
                }
            }
            out.push('\n');
        }
    }

    out.push_str("\nBoards:\n");
    let outcomes = state.outcomes();
    for board in Position::ALL {
        out.push(' ');
        out.push(symbols.outcome(outcomes[board.to_index()]));
        if board.col() == 2 {
            out.push('\n');
        }
    }

    out
}

/// Positions of one grid row, left to right.
fn in_row(row: usize) -> impl Iterator<Item = Position> {
    Position::ALL.into_iter().filter(move |pos| pos.row() == row)
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", render(self, &Symbols::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;

    #[test]
    fn test_empty_board() {
        let text = GameState::new().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], " . . . | . . . | . . .");
        assert_eq!(lines[3], "-------+-------+------");
        assert_eq!(lines.len(), 11 + 2 + 3);
    }

    #[test]
    fn test_marks_land_in_the_right_spot() {
        // Board 5 (middle-right), cell 7 (bottom-center) is grid row 5, column 7.
        let mov = Move::from_indices(5, 7).expect("index in range");
        let state = GameState::new().apply(mov).expect("opening move");
        let text = state.to_string();
        let row = text.lines().nth(6).expect("grid row");
        assert_eq!(row, " . . . | . . . | . X .");
    }

    #[test]
    fn test_summary_shows_won_board() {
        // Player one takes the top row of board 3 (middle-left).
        let moves = [(3, 0), (0, 3), (3, 1), (1, 3), (3, 2)]
            .map(|(b, c)| Move::from_indices(b, c).expect("index in range"));
        let state = GameState::replay(&moves).expect("legal sequence");
        let text = state.to_string();
        let summary: Vec<&str> = text.lines().skip_while(|l| *l != "Boards:").skip(1).collect();
        assert_eq!(summary, vec![" . . .", " X . .", " . . ."]);
    }

    #[test]
    fn test_custom_symbols() {
        let symbols = Symbols {
            player_one: '1',
            player_two: '2',
            draw: '=',
            empty: '_',
        };
        assert_eq!(symbols.cell(Cell::Occupied(Player::Two)), '2');
        assert_eq!(symbols.outcome(Outcome::Draw), '=');
        assert_eq!(symbols.outcome(Outcome::InProgress), '_');
    }
}
