use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

use crate::player::state::{JumpTiming, JUMP_TIME_MAX, JUMP_TIME_MIN};

/// `(x: .., y: ..)` pair in RON; converts to a Bevy `Vec2`.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq)]
#[serde(default)]
pub struct AxisPair {
    pub x: f32,
    pub y: f32,
}
impl AxisPair {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
    pub fn vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 680.0,
            height: 420.0,
            title: "pixel legends".into(),
        }
    }
}

/// Physics constants and jump timing for the player body (world units).
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    pub dimension: AxisPair,
    pub terminal_velocity: AxisPair,
    pub friction: AxisPair,
    pub acceleration: AxisPair,
    pub jump_time_min: f32,
    pub jump_time_max: f32,
}
impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            dimension: AxisPair::new(0.6, 1.0),
            terminal_velocity: AxisPair::new(5.5, 4.0),
            friction: AxisPair::new(22.0, 0.0),
            acceleration: AxisPair::new(0.0, -25.0),
            jump_time_min: JUMP_TIME_MIN,
            jump_time_max: JUMP_TIME_MAX,
        }
    }
}
impl PlayerConfig {
    pub fn timing(&self) -> JumpTiming {
        JumpTiming {
            min: self.jump_time_min,
            max: self.jump_time_max,
        }
    }
}

/// Dust puff emitted when the player leaves the ground while running.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DustConfig {
    pub enabled: bool,
    /// Seconds the emitter keeps spawning after a start.
    pub emission_duration: f32,
    pub particles_per_second: f32,
    pub particle_lifetime: f32,
    /// Max initial speed, world units per second.
    pub particle_speed: f32,
    pub particle_size: f32,
}
impl Default for DustConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            emission_duration: 0.15,
            particles_per_second: 60.0,
            particle_lifetime: 0.45,
            particle_speed: 0.8,
            particle_size: 0.08,
        }
    }
}

/// Minimal stage the demo host runs the player on.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StageConfig {
    pub floor_y: f32,
    pub spawn: AxisPair,
    pub pixels_per_unit: f32,
}
impl Default for StageConfig {
    fn default() -> Self {
        Self {
            floor_y: -2.0,
            spawn: AxisPair::new(-0.3, 1.0),
            pixels_per_unit: 64.0,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub player: PlayerConfig,
    pub dust: DustConfig,
    pub stage: StageConfig,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Loads and merges RON files in order; later files override earlier ones
    /// field by field. Returns the config, the paths used, and any errors.
    /// Missing or broken files are skipped and reported.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        match &mut merged {
                            Some(cur) => merge_value(cur, val),
                            None => merged = Some(val),
                        }
                        used.push(path_ref.to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        let Some(val) = merged else {
            return (GameConfig::default(), used, errors);
        };
        match val.into_rust::<GameConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!("failed to deserialize merged config; using defaults: {e}"));
                (GameConfig::default(), used, errors)
            }
        }
    }

    /// Non-fatal sanity checks. Each entry describes one questionable value.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        let p = &self.player;
        if p.dimension.x <= 0.0 || p.dimension.y <= 0.0 {
            w.push(format!(
                "player.dimension ({}, {}) must be > 0",
                p.dimension.x, p.dimension.y
            ));
        }
        if p.terminal_velocity.x <= 0.0 || p.terminal_velocity.y <= 0.0 {
            w.push(format!(
                "player.terminal_velocity ({}, {}) must be > 0; clamping range collapses",
                p.terminal_velocity.x, p.terminal_velocity.y
            ));
        }
        if p.friction.x < 0.0 || p.friction.y < 0.0 {
            w.push("player.friction negative; velocity grows instead of decaying".into());
        }
        if p.acceleration.y > 0.0 {
            w.push(format!(
                "player.acceleration.y is positive ({}); player falls upward",
                p.acceleration.y
            ));
        }
        if p.jump_time_min < 0.0 {
            w.push(format!("player.jump_time_min {} negative", p.jump_time_min));
        }
        if p.jump_time_min > p.jump_time_max {
            w.push(format!(
                "player.jump_time_min ({}) > jump_time_max ({})",
                p.jump_time_min, p.jump_time_max
            ));
        }
        let d = &self.dust;
        if d.enabled {
            if d.particles_per_second <= 0.0 {
                w.push("dust.particles_per_second must be > 0 when dust is enabled".into());
            }
            if d.particle_lifetime <= 0.0 {
                w.push("dust.particle_lifetime must be > 0".into());
            }
            if d.emission_duration < 0.0 {
                w.push("dust.emission_duration negative".into());
            }
        }
        if self.stage.pixels_per_unit <= 0.0 {
            w.push("stage.pixels_per_unit must be > 0".into());
        }
        if self.stage.spawn.y < self.stage.floor_y {
            w.push(format!(
                "stage.spawn.y ({}) below floor_y ({}); player snaps to floor on first frame",
                self.stage.spawn.y, self.stage.floor_y
            ));
        }
        w
    }
}

fn merge_value(base: &mut ron::value::Value, overlay: ron::value::Value) {
    use ron::value::Value;
    match (base, overlay) {
        (Value::Map(bm), Value::Map(om)) => {
            for (k, v) in om.into_iter() {
                let mut incoming = Some(v);
                for (ek, ev) in bm.iter_mut() {
                    if *ek == k {
                        if let Some(val) = incoming.take() {
                            merge_value(ev, val);
                        }
                        break;
                    }
                }
                if let Some(val) = incoming {
                    bm.insert(k, val);
                }
            }
        }
        (b, o) => *b = o,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().expect("temp file");
        f.write_all(contents.as_bytes()).expect("write temp");
        f
    }

    #[test]
    fn defaults_match_reference_tuning() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.player.terminal_velocity, AxisPair::new(5.5, 4.0));
        assert_eq!(cfg.player.friction, AxisPair::new(22.0, 0.0));
        assert_eq!(cfg.player.acceleration, AxisPair::new(0.0, -25.0));
        assert_eq!(cfg.window.title, "pixel legends");
        assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
    }

    #[test]
    fn parse_partial_player_section() {
        let sample = r#"(
            window: (title: "Test"),
            player: (terminal_velocity: (x: 6.0, y: 5.0), jump_time_max: 0.4),
        )"#;
        let f = write_temp(sample);
        let cfg = GameConfig::load_from_file(f.path()).expect("parse config");
        assert_eq!(cfg.window.title, "Test");
        assert_eq!(cfg.window.width, 680.0);
        assert_eq!(cfg.player.terminal_velocity.vec2(), Vec2::new(6.0, 5.0));
        assert_eq!(cfg.player.jump_time_max, 0.4);
        assert_eq!(cfg.player.jump_time_min, JUMP_TIME_MIN);
    }

    #[test]
    fn validate_flags_inverted_jump_window() {
        let mut cfg = GameConfig::default();
        cfg.player.jump_time_min = 0.5;
        cfg.player.acceleration.y = 10.0;
        let joined = cfg.validate().join(" | ");
        assert!(joined.contains("jump_time_min (0.5) > jump_time_max"));
        assert!(joined.contains("acceleration.y is positive"));
    }

    #[test]
    fn load_or_default_missing_file() {
        let (cfg, err) = GameConfig::load_or_default("this/file/does/not/exist.ron");
        assert!(err.is_some());
        assert_eq!(cfg, GameConfig::default());
    }

    #[test]
    fn layered_merge_overrides_nested_fields() {
        let base = r"(
            player: (terminal_velocity: (x: 7.0, y: 4.5)),
            stage: (floor_y: -1.0),
        )";
        let local = r"(
            player: (terminal_velocity: (y: 3.0)),
        )";
        let (a, b) = (write_temp(base), write_temp(local));
        let (cfg, used, errors) = GameConfig::load_layered([a.path(), b.path()]);
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        assert_eq!(used.len(), 2);
        assert_eq!(cfg.player.terminal_velocity, AxisPair::new(7.0, 3.0));
        assert_eq!(cfg.stage.floor_y, -1.0);
        assert_eq!(cfg.stage.pixels_per_unit, StageConfig::default().pixels_per_unit);
    }
}
