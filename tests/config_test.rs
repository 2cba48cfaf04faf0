//! Tests for game configuration loading.

use std::io::Write;
use tictactoe_bus::GameConfig;

#[test]
fn test_defaults() {
    let config = GameConfig::default();
    assert_eq!(config.players(), &["X".to_string(), "O".to_string()]);
    let [first, second] = config.to_players();
    assert_eq!(first.symbol(), "X");
    assert_eq!(second.symbol(), "O");
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config = GameConfig::from_toml("").unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r##"
players = ["@", "#"]
log_filter = "warn"
log_file = "game.log"
"##
    )
    .unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config.players(), &["@".to_string(), "#".to_string()]);
    assert_eq!(config.log_filter(), "warn");
    assert_eq!(config.log_file().to_str(), Some("game.log"));
}

#[test]
fn test_load_missing_file_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap();
    assert_eq!(config, GameConfig::default());
    assert_eq!(GameConfig::load(None).unwrap(), GameConfig::default());
}

#[test]
fn test_duplicate_symbols_rejected() {
    let err = GameConfig::from_toml(r#"players = ["X", "X"]"#).unwrap_err();
    assert!(err.message.contains("must differ"));
}

#[test]
fn test_blank_symbol_rejected() {
    let err = GameConfig::from_toml(r#"players = ["X", " "]"#).unwrap_err();
    assert!(err.message.contains("must not be empty"));
}

#[test]
fn test_wrong_player_count_rejected() {
    assert!(GameConfig::from_toml(r#"players = ["X", "O", "Z"]"#).is_err());
}

#[test]
fn test_unreadable_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("nope.toml")).unwrap_err();
    assert!(err.to_string().starts_with("Config error: Failed to read config file"));
}
