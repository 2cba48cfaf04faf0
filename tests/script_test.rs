//! Tests for the headless script adapter.

use tictactoe_bus::{GameConfig, ScriptRunner};
use tictactoe_core::{Event, Phase, Player};

#[test]
fn test_scripted_win_json_lines() {
    let runner = ScriptRunner::new(Player::defaults());
    runner.run(["0", "3", "1", "4", "2"]);

    let lines = runner.json_lines().unwrap();
    assert_eq!(
        lines.first().map(String::as_str),
        Some(r#"{"event":"PlayerChange","payload":{"symbol":"X"}}"#)
    );
    assert_eq!(
        lines[lines.len() - 2],
        r#"{"event":"GameWin","payload":[0,1,2]}"#
    );
    assert_eq!(
        lines[lines.len() - 1],
        r#"{"event":"GameOver","payload":"The winner is X"}"#
    );
}

#[test]
fn test_bad_tokens_are_skipped() {
    let runner = ScriptRunner::new(Player::defaults());
    runner.run(["x", "4", "4", "-1", "oops"]);

    let events = runner.events();
    // Opening turn, then one board update and one turn change.
    assert_eq!(events.len(), 3);
    assert_eq!(events[2], Event::PlayerChange(Player::new("O")));
}

#[test]
fn test_restart_token() {
    let runner = ScriptRunner::new(Player::defaults());
    runner.run(["4", "RESTART", "0"]);

    assert_eq!(runner.controller().board_snapshot().get(4), None);
    assert_eq!(runner.controller().board_snapshot().get(0), Some("X"));
    assert_eq!(runner.controller().phase(), Phase::AwaitingInput);
}

#[test]
fn test_configured_symbols() {
    let config = GameConfig::from_toml(r#"players = ["A", "B"]"#).unwrap();
    let runner = ScriptRunner::new(config.to_players());
    runner.run(["4"]);

    assert_eq!(runner.controller().active_player().symbol(), "B");
    assert_eq!(runner.controller().board_snapshot().get(4), Some("A"));
}
