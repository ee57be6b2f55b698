//! Demo stage: camera, a flat floor and one player standing on it.

use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::core::system::system_order::PlayerSet;
use crate::player::{resolve_floor_contact, spawn_player, PlayerMotionController};

const FLOOR_COLOR: Color = Color::srgb(0.22, 0.25, 0.32);

#[derive(Component)]
pub struct Floor;

pub struct StagePlugin;

impl Plugin for StagePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_stage)
            .add_systems(Update, floor_contact_system.in_set(PlayerSet::Contact));
    }
}

fn setup_stage(mut commands: Commands, cfg: Res<GameConfig>) {
    commands.spawn(Camera2d);
    let ppu = cfg.stage.pixels_per_unit;
    let floor_top = cfg.stage.floor_y * ppu;
    let thickness = 0.5 * ppu;
    commands.spawn((
        Floor,
        Sprite::from_color(FLOOR_COLOR, Vec2::new(cfg.window.width, thickness)),
        Transform::from_translation(Vec3::new(0.0, floor_top - thickness * 0.5, 0.0)),
    ));
    spawn_player(&mut commands, &cfg);
}

/// Ground signal for the next frame's jump request.
pub fn floor_contact_system(cfg: Res<GameConfig>, mut q: Query<&mut PlayerMotionController>) {
    for mut controller in &mut q {
        resolve_floor_contact(&mut controller, cfg.stage.floor_y);
    }
}
