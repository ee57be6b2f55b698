use bevy::prelude::*;

use super::controller::PlayerMotionController;
use super::effects::PlayerEffectEvent;
use super::motion::BaseMotion;
use crate::core::config::GameConfig;
use crate::effects::dust::DustEmitter;

/// Marker for player-controlled entities.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Player;

const PLAYER_COLOR: Color = Color::srgb(0.95, 0.75, 0.35);

/// Spawns a player at the configured stage spawn point.
pub fn spawn_player(commands: &mut Commands, cfg: &GameConfig) -> Entity {
    let position = cfg.stage.spawn.vec2();
    let controller = PlayerMotionController::from_config(&cfg.player, position);
    let ppu = cfg.stage.pixels_per_unit;
    let size = controller.body().dimension * ppu;
    let center = controller.body().center() * ppu;
    let entity = commands
        .spawn((
            Player,
            controller,
            DustEmitter::default(),
            Sprite::from_color(PLAYER_COLOR, size),
            Transform::from_translation(center.extend(1.0)),
        ))
        .id();
    info!(?entity, x = position.x, y = position.y, "player spawned");
    entity
}

/// Space / ArrowUp jump; A / ArrowLeft and D / ArrowRight run.
pub fn player_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut q: Query<&mut PlayerMotionController, With<Player>>,
) {
    let jump = keys.any_pressed([KeyCode::Space, KeyCode::ArrowUp]);
    let mut axis = 0.0;
    if keys.any_pressed([KeyCode::ArrowLeft, KeyCode::KeyA]) {
        axis -= 1.0;
    }
    if keys.any_pressed([KeyCode::ArrowRight, KeyCode::KeyD]) {
        axis += 1.0;
    }
    for mut controller in &mut q {
        controller.request_run(axis);
        controller.request_jump(jump);
    }
}

pub fn advance_player_motion(
    time: Res<Time>,
    mut q: Query<(Entity, &mut PlayerMotionController)>,
    mut writer: EventWriter<PlayerEffectEvent>,
) {
    let dt = time.delta_secs();
    for (entity, mut controller) in &mut q {
        for effect in controller.update(dt, &BaseMotion) {
            writer.write(PlayerEffectEvent { entity, effect });
        }
    }
}

/// Renderer side: world-unit body -> pixel transform and size, facing -> sprite flip.
pub fn sync_player_presentation(
    cfg: Res<GameConfig>,
    mut q: Query<(&PlayerMotionController, &mut Transform, Option<&mut Sprite>)>,
) {
    let ppu = cfg.stage.pixels_per_unit;
    for (controller, mut tf, sprite) in &mut q {
        let center = controller.body().center() * ppu;
        tf.translation.x = center.x;
        tf.translation.y = center.y;
        if let Some(mut sprite) = sprite {
            let flip = controller.view_direction().is_left();
            if sprite.flip_x != flip {
                sprite.flip_x = flip;
            }
            // dimension can change under hot reload
            let size = Some(controller.body().dimension * ppu);
            if sprite.custom_size != size {
                sprite.custom_size = size;
            }
        }
    }
}
