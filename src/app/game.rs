use bevy::prelude::*;

use crate::app::config_hot_reload::ConfigHotReloadPlugin;
use crate::app::stage::StagePlugin;
#[cfg(feature = "debug")]
use crate::debug::DebugPlugin;
use crate::effects::DustPlugin;
use crate::player::PlayerPlugin;

/// Outcome of the launcher's config load, logged once the log plugin is up.
#[derive(Resource, Debug, Default, Clone)]
pub struct ConfigLoadReport {
    pub used: Vec<String>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ConfigLoadReport>()
            .add_plugins((
                PlayerPlugin,
                DustPlugin,
                StagePlugin,
                ConfigHotReloadPlugin,
                #[cfg(feature = "debug")]
                DebugPlugin,
            ))
            .add_systems(Startup, log_config_report);
    }
}

fn log_config_report(report: Res<ConfigLoadReport>) {
    if report.used.is_empty() {
        warn!("no config file loaded; running with built-in defaults");
    } else {
        info!(files = ?report.used, "config loaded");
    }
    for e in &report.errors {
        warn!("config error: {e}");
    }
    for w in &report.warnings {
        warn!("config warning: {w}");
    }
}
