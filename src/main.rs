use bevy::prelude::*;

use pixel_legends::app::config_hot_reload::{
    reportable_layer_errors, BASE_CONFIG_PATH, LOCAL_CONFIG_PATH,
};
use pixel_legends::app::game::ConfigLoadReport;
use pixel_legends::{GameConfig, GamePlugin};

fn main() {
    // Base config plus optional local overrides; problems are logged at startup.
    let (cfg, used, errors) = GameConfig::load_layered([BASE_CONFIG_PATH, LOCAL_CONFIG_PATH]);
    // A missing local override file is expected.
    let errors = reportable_layer_errors(errors, &[LOCAL_CONFIG_PATH]);
    let report = ConfigLoadReport {
        used,
        errors,
        warnings: cfg.validate(),
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(report)
        .insert_resource(cfg)
        .add_plugins(GamePlugin)
        .run();
}
