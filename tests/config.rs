// JSON configuration loading (default `serde_json` feature).
#![cfg(feature = "serde_json")]

use square_strike::{ConfigError, Game, GameConfig, Position, Size};

#[test]
fn partial_json_falls_back_to_defaults() {
    let cfg = GameConfig::from_json(r#"{ "arena": { "width": 300.0, "height": 200.0 }, "seed": 4 }"#).unwrap();
    assert_eq!(cfg.arena, Size::new(300.0, 200.0));
    assert_eq!(cfg.player_size, Size::square(20.0));
    assert_eq!(cfg.levels.len(), 5);
    assert_eq!(cfg.seed, Some(4));
}

#[test]
fn custom_level_table_drives_the_game() {
    let json = r#"{
        "player_start": { "x": 10.0, "y": 10.0 },
        "levels": [
            { "par": 1, "time": 5, "speed": 2.0 },
            { "par": 2, "time": 4, "speed": 4.0 }
        ],
        "seed": 9
    }"#;
    let mut game = Game::new(GameConfig::from_json(json).unwrap()).unwrap();
    game.start_game();
    assert_eq!(game.goal(), 1);
    assert_eq!(game.time_left(), 5);
    assert_eq!(game.player().position, Position::new(10.0, 10.0));
    assert_eq!(game.levels().final_par(), 2);
}

#[test]
fn invalid_json_reports_parse_error() {
    assert!(matches!(GameConfig::from_json("{ not json"), Err(ConfigError::Parse(_))));
}

#[test]
fn invalid_levels_are_rejected() {
    let err = GameConfig::from_json(r#"{ "levels": [] }"#).unwrap_err();
    assert_eq!(err, ConfigError::EmptyLevelTable);
    assert_eq!(err.to_string(), "level table is empty");
}
