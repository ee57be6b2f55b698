#[cfg(feature = "debug")]
use super::state::DebugState;
#[cfg(feature = "debug")]
use crate::core::config::GameConfig;
#[cfg(feature = "debug")]
use crate::player::PlayerMotionController;
#[cfg(feature = "debug")]
use bevy::prelude::*;

/// F3 toggles the periodic log; R puts every player back at the spawn point.
#[cfg(feature = "debug")]
pub fn debug_key_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    cfg: Res<GameConfig>,
    mut state: ResMut<DebugState>,
    mut q_players: Query<&mut PlayerMotionController>,
) {
    if keys.just_pressed(KeyCode::F3) {
        state.logging_enabled = !state.logging_enabled;
        info!(
            "DEBUG_LOG enabled={} frame={}",
            state.logging_enabled, state.frame_counter
        );
    }
    if keys.just_pressed(KeyCode::KeyR) {
        let spawn = cfg.stage.spawn.vec2();
        for mut controller in &mut q_players {
            *controller = PlayerMotionController::from_config(&cfg.player, spawn);
        }
        info!("PLAYER_RESET x={} y={} frame={}", spawn.x, spawn.y, state.frame_counter);
    }
}
