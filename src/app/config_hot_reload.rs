use bevy::prelude::*;
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    time::SystemTime,
};

use crate::core::config::GameConfig;
use crate::player::PlayerMotionController;

pub const BASE_CONFIG_PATH: &str = "assets/config/game.ron";
pub const LOCAL_CONFIG_PATH: &str = "assets/config/game.local.ron";

#[derive(Resource, Debug, Clone)]
pub struct ConfigReloadSettings {
    pub paths: Vec<PathBuf>,
    /// Layers that may be absent; a missing one is not reported.
    pub optional_paths: Vec<PathBuf>,
    pub interval_secs: f32,
}
impl Default for ConfigReloadSettings {
    fn default() -> Self {
        Self {
            paths: vec![PathBuf::from(BASE_CONFIG_PATH), PathBuf::from(LOCAL_CONFIG_PATH)],
            optional_paths: vec![PathBuf::from(LOCAL_CONFIG_PATH)],
            interval_secs: 0.5,
        }
    }
}

#[derive(Resource, Debug)]
struct ConfigReloadState {
    last_mod: HashMap<PathBuf, SystemTime>,
    timer: Timer,
}
impl Default for ConfigReloadState {
    fn default() -> Self {
        Self {
            last_mod: HashMap::new(),
            timer: Timer::from_seconds(0.5, TimerMode::Repeating),
        }
    }
}

/// Polls the config files and re-applies player tuning when they change.
pub struct ConfigHotReloadPlugin;

impl Plugin for ConfigHotReloadPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ConfigReloadSettings>()
            .init_resource::<ConfigReloadState>()
            .add_systems(Startup, record_initial_mtimes)
            .add_systems(Update, poll_and_reload_config);
    }
}

/// Drops the read error of an optional layer that does not exist; parse
/// errors and unreadable existing files are kept.
pub fn reportable_layer_errors<P: AsRef<Path>>(
    errors: Vec<String>,
    optional: &[P],
) -> Vec<String> {
    errors
        .into_iter()
        .filter(|e| {
            !optional.iter().any(|p| {
                let p = p.as_ref();
                !p.exists() && e.starts_with(&format!("{}: read error", p.display()))
            })
        })
        .collect()
}

fn scan_changes(settings: &ConfigReloadSettings, state: &mut ConfigReloadState) -> bool {
    let mut dirty = false;
    for path in &settings.paths {
        let Ok(modified) = std::fs::metadata(path).and_then(|m| m.modified()) else {
            continue;
        };
        let entry = state
            .last_mod
            .entry(path.clone())
            .or_insert(SystemTime::UNIX_EPOCH);
        if modified > *entry {
            *entry = modified;
            dirty = true;
        }
    }
    dirty
}

fn record_initial_mtimes(settings: Res<ConfigReloadSettings>, mut state: ResMut<ConfigReloadState>) {
    scan_changes(&settings, &mut state);
}

fn poll_and_reload_config(
    time: Res<Time>,
    settings: Res<ConfigReloadSettings>,
    mut state: ResMut<ConfigReloadState>,
    mut cfg_res: ResMut<GameConfig>,
    mut windows: Query<&mut Window>,
    mut players: Query<&mut PlayerMotionController>,
) {
    let interval = settings.interval_secs.max(0.05);
    if (state.timer.duration().as_secs_f32() - interval).abs() > f32::EPSILON {
        state
            .timer
            .set_duration(std::time::Duration::from_secs_f32(interval));
    }
    if !state.timer.tick(time.delta()).finished() {
        return;
    }
    if !scan_changes(&settings, &mut state) {
        return;
    }
    let (new_cfg, _used, errors) = GameConfig::load_layered(settings.paths.iter());
    let errors = reportable_layer_errors(errors, &settings.optional_paths);
    if !errors.is_empty() {
        // Usually a save caught mid-write; keep the live config until the next change.
        for e in &errors {
            warn!("CONFIG HOT-RELOAD issue: {e}");
        }
        warn!("Config hot-reload skipped; keeping current config");
        return;
    }
    if *cfg_res == new_cfg {
        return;
    }
    for w in new_cfg.validate() {
        warn!("CONFIG HOT-RELOAD warning: {w}");
    }
    if cfg_res.player != new_cfg.player {
        for mut controller in &mut players {
            controller.apply_tuning(&new_cfg.player);
        }
    }
    if let Ok(mut window) = windows.single_mut() {
        if window.title != new_cfg.window.title {
            window.title = new_cfg.window.title.clone();
        }
        if window.width() != new_cfg.window.width || window.height() != new_cfg.window.height {
            window
                .resolution
                .set(new_cfg.window.width, new_cfg.window.height);
        }
    }
    info!("Config hot-reload applied");
    *cfg_res = new_cfg;
}
