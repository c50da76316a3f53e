//! Interactive two-player session over any reader and writer.

use crate::config::DisplayConfig;
use crate::input::Input;
use std::io::{BufRead, Write};
use super_tictactoe::{GameEngine, GameState, Outcome, Symbols, render};
use tracing::{debug, info, instrument, warn};

const HELP: &str = "\
Commands:
  <board> <cell>   place your mark (0-8 each, or names like top-left)
  moves            list the legal moves
  reset            start a new game
  help             show this text
  quit             leave
Cells are numbered 0-8 left to right, top to bottom.";

/// Drives a [`GameEngine`] from typed commands.
pub struct Session<'a> {
    engine: GameEngine,
    config: &'a DisplayConfig,
    symbols: Symbols,
}

impl<'a> Session<'a> {
    /// Creates a session with a fresh game.
    pub fn new(config: &'a DisplayConfig) -> Self {
        Self {
            engine: GameEngine::new(),
            symbols: config.symbols(),
            config,
        }
    }

    /// The engine being driven.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Reads commands until `quit` or end of input.
    ///
    /// Bad input and illegal moves are reported and the prompt repeats.
    /// Returns the outcome of the game on screen when the session ends.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> anyhow::Result<Outcome> {
        writeln!(out, "Super tic-tac-toe. Type `help` for commands.")?;
        self.show(&mut out)?;

        let mut lines = input.lines();
        loop {
            write!(out, "{}", self.config.prompt())?;
            out.flush()?;

            let Some(line) = lines.next() else {
                debug!("End of input");
                break;
            };
            let line = line?;

            match Input::parse(&line) {
                Ok(Input::Quit) => break,
                Ok(Input::Help) => writeln!(out, "{}", HELP)?,
                Ok(Input::Moves) => self.list_moves(&mut out)?,
                Ok(Input::Reset) => {
                    self.engine.reset();
                    writeln!(out, "New game.")?;
                    self.show(&mut out)?;
                }
                Ok(Input::Move(mov)) => match self.engine.apply_move(mov) {
                    Ok(_) => self.show(&mut out)?,
                    Err(e) => {
                        warn!(error = %e, "Move rejected");
                        writeln!(out, "{}", e)?;
                    }
                },
                Err(e) => writeln!(out, "{}. Type `help` for commands.", e)?,
            }
        }

        let outcome = self.engine.current_state().outcome();
        info!(%outcome, "Session ended");
        Ok(outcome)
    }

    fn show<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let state = self.engine.current_state();
        write!(out, "{}", render(state, &self.symbols))?;
        writeln!(out, "{}", status_line(state, &self.symbols))
    }

    fn list_moves<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let moves = self.engine.legal_moves();
        if moves.is_empty() {
            return writeln!(out, "No legal moves; the game is over.");
        }
        let listed: Vec<String> = moves.iter().map(ToString::to_string).collect();
        writeln!(out, "{} legal moves: {}", moves.len(), listed.join(" "))
    }
}

/// One line saying what happens next.
pub fn status_line(state: &GameState, symbols: &Symbols) -> String {
    match state.outcome() {
        Outcome::Won(player) => format!("{} ({}) wins!", player, symbols.player(player)),
        Outcome::Draw => "The game is a draw.".to_string(),
        Outcome::InProgress => {
            let player = state.current_player();
            let target = match state.forced_board() {
                Some(board) => format!("board {}", board),
                None => "any open board".to_string(),
            };
            format!("{} ({}) to move on {}.", player, symbols.player(player), target)
        }
    }
}
