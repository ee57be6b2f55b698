use pixel_legends::core::config::GameConfig;

#[test]
fn shipped_config_parses_and_validates() {
    let cfg = GameConfig::load_from_file("assets/config/game.ron").expect("assets/config/game.ron");
    let warnings = cfg.validate();
    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    assert!(cfg.player.jump_time_min <= cfg.player.jump_time_max);
}

#[test]
fn shipped_config_matches_builtin_defaults() {
    let (cfg, used, errors) = GameConfig::load_layered(["assets/config/game.ron"]);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(used.len(), 1);
    assert_eq!(cfg, GameConfig::default());
}

#[test]
fn missing_layers_fall_back_to_defaults() {
    let (cfg, used, errors) = GameConfig::load_layered(["does/not/exist.ron"]);
    assert!(used.is_empty());
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("read error"));
    assert_eq!(cfg, GameConfig::default());
}
