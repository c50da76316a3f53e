//! Scripted sessions through the public front-end API.

use std::io::Cursor;
use super_tictactoe::{Outcome, Player};
use super_tictactoe_cli::{DisplayConfig, Session};

fn run(config: &DisplayConfig, script: &str) -> (Outcome, String) {
    let mut session = Session::new(config);
    let mut out = Vec::new();
    let outcome = session
        .run(Cursor::new(script.to_string()), &mut out)
        .expect("session runs");
    (outcome, String::from_utf8(out).expect("utf8 output"))
}

#[test]
fn test_player_one_wins_through_the_prompt() {
    // Player one takes the bottom rows of boards 0, 1 and 2.
    let script = "\
0 6\n6 0\n0 7\n7 0\n0 8\n\
8 1\n1 6\n6 1\n1 7\n7 1\n1 8\n\
8 2\n2 6\n6 2\n2 7\n7 2\n2 8\n\
8 3\nmoves\n";

    let (outcome, text) = run(&DisplayConfig::default(), script);
    assert_eq!(outcome, Outcome::Won(Player::One));
    assert!(text.contains("Player one (X) wins!"));
    assert!(text.contains("the game is already over"));
    assert!(text.contains("No legal moves; the game is over."));
}

#[test]
fn test_custom_prompt_and_symbols() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("display.toml");
    std::fs::write(&path, "player_one = \"#\"\nprompt = \"~ \"\n").expect("write config");
    let config = DisplayConfig::load_or_default(&path).expect("valid config");

    let (_, text) = run(&config, "center center\n");
    assert!(text.contains("~ "));
    assert!(text.contains(" # "));
    assert!(text.contains("Player two (O) to move on board 4."));
}
