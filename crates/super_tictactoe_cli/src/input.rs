//! Parsing of typed commands and moves.

use derive_more::{Display, Error};
use super_tictactoe::{Move, Position};

/// Something typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place a mark.
    Move(Move),
    /// Start a new game.
    Reset,
    /// List the legal moves.
    Moves,
    /// Show the command summary.
    Help,
    /// Leave the session.
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Nothing but whitespace.
    #[display("empty input")]
    Empty,
    /// Wrong number of fields for a move.
    #[display("expected `<board> <cell>`, got '{}'", _0)]
    Malformed(#[error(not(source))] String),
    /// A field that is not a position.
    #[display("'{}' is not a position (use 0-8 or a name like top-left)", _0)]
    BadPosition(#[error(not(source))] String),
}

impl Input {
    /// Parses one line of input.
    pub fn parse(line: &str) -> Result<Self, InputError> {
        let trimmed = line.trim();
        match trimmed.to_lowercase().as_str() {
            "" => Err(InputError::Empty),
            "reset" | "new" => Ok(Self::Reset),
            "moves" | "m" => Ok(Self::Moves),
            "help" | "h" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            _ => parse_move(trimmed).map(Self::Move),
        }
    }
}

/// Parses `board cell` or `board,cell`.
pub fn parse_move(text: &str) -> Result<Move, InputError> {
    let fields: Vec<&str> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();

    match fields.as_slice() {
        [board, cell] => Ok(Move::new(parse_position(board)?, parse_position(cell)?)),
        _ => Err(InputError::Malformed(text.to_string())),
    }
}

fn parse_position(field: &str) -> Result<Position, InputError> {
    Position::from_label_or_number(field).ok_or_else(|| InputError::BadPosition(field.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_forms() {
        let expected = Move::new(Position::Center, Position::TopLeft);
        assert_eq!(parse_move("4 0"), Ok(expected));
        assert_eq!(parse_move("4,0"), Ok(expected));
        assert_eq!(parse_move(" 4 , 0 "), Ok(expected));
        assert_eq!(parse_move("center top-left"), Ok(expected));
    }

    #[test]
    fn test_parse_move_errors() {
        assert_eq!(
            parse_move("4"),
            Err(InputError::Malformed("4".to_string()))
        );
        assert_eq!(
            parse_move("4 9"),
            Err(InputError::BadPosition("9".to_string()))
        );
        assert!(matches!(parse_move("1 2 3"), Err(InputError::Malformed(_))));
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Input::parse("QUIT"), Ok(Input::Quit));
        assert_eq!(Input::parse(" reset\n"), Ok(Input::Reset));
        assert_eq!(Input::parse("moves"), Ok(Input::Moves));
        assert_eq!(Input::parse("?"), Ok(Input::Help));
        assert_eq!(Input::parse("   "), Err(InputError::Empty));
    }
}
