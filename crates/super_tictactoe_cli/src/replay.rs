//! Non-interactive replay of a move list.

use crate::input::parse_move;
use crate::session::status_line;
use anyhow::Context;
use super_tictactoe::{GameState, Move, Symbols, render};
use tracing::{info, instrument};

/// Output format for [`replay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayFormat {
    /// Rendered board plus status line.
    Board,
    /// The final snapshot as pretty JSON.
    Json,
}

/// Applies `moves` from the initial state and formats the result.
///
/// # Errors
///
/// Fails on the first move that doesn't parse or isn't legal, naming its
/// position in the list.
#[instrument(skip(moves, symbols), fields(count = moves.len()))]
pub fn replay(
    moves: &[String],
    format: ReplayFormat,
    symbols: &Symbols,
) -> anyhow::Result<String> {
    let parsed = moves
        .iter()
        .enumerate()
        .map(|(i, text)| parse_move(text).with_context(|| format!("move {} ('{}')", i + 1, text)))
        .collect::<anyhow::Result<Vec<Move>>>()?;

    let mut state = GameState::new();
    for (i, mov) in parsed.iter().enumerate() {
        state = state
            .apply(*mov)
            .with_context(|| format!("move {} of {}", i + 1, parsed.len()))?;
    }
    info!(outcome = %state.outcome(), "Replay finished");

    match format {
        ReplayFormat::Json => Ok(serde_json::to_string_pretty(&state)?),
        ReplayFormat::Board => Ok(format!(
            "{}{}",
            render(&state, symbols),
            status_line(&state, symbols)
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super_tictactoe::Player;

    fn strings(moves: &[&str]) -> Vec<String> {
        moves.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_replay_board() {
        let text = replay(&strings(&["4,4", "4,0"]), ReplayFormat::Board, &Symbols::default())
            .expect("legal moves");
        assert!(text.ends_with("Player one (X) to move on board 0."));
    }

    #[test]
    fn test_replay_json() {
        let text = replay(&strings(&["4,4"]), ReplayFormat::Json, &Symbols::default())
            .expect("legal moves");
        let state: GameState = serde_json::from_str(&text).expect("valid snapshot");
        assert_eq!(state.current_player(), Player::Two);
    }

    #[test]
    fn test_replay_reports_failing_move() {
        let err = replay(&strings(&["4,4", "0,0"]), ReplayFormat::Board, &Symbols::default())
            .expect_err("forced board");
        let message = format!("{:#}", err);
        assert!(message.starts_with("move 2 of 2"));
        assert!(message.contains("board 4"));
    }

    #[test]
    fn test_replay_reports_unparsable_move() {
        let err = replay(&strings(&["4,4", "x"]), ReplayFormat::Board, &Symbols::default())
            .expect_err("bad input");
        assert!(format!("{:#}", err).starts_with("move 2 ('x')"));
    }
}
