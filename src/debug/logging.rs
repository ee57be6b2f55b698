#[cfg(feature = "debug")]
use super::state::{DebugState, DebugStats};
#[cfg(feature = "debug")]
use crate::player::{JumpState, PlayerMotionController};
#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use std::collections::HashMap;

#[cfg(feature = "debug")]
pub fn debug_logging_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    stats: Res<DebugStats>,
    q_players: Query<(Entity, &PlayerMotionController)>,
) {
    if !state.logging_enabled {
        return;
    }
    state.time_accum += time.delta_secs();
    if state.time_accum < state.log_interval {
        return;
    }
    state.time_accum = 0.0;
    for (entity, c) in &q_players {
        info!(
            "SIM frame={} t={:.3}s fps={:.1} ft_ms={:.1} players={} player={:?} state={} t_jump={} vel=({:.2},{:.2}) pos=({:.2},{:.2}) facing={:?} dust={} jumps={}",
            state.frame_counter,
            time.elapsed_secs(),
            stats.fps,
            stats.frame_time_ms,
            stats.player_count,
            entity,
            c.jump_state().label(),
            jump_time_label(c),
            c.velocity().x,
            c.velocity().y,
            c.position().x,
            c.position().y,
            c.view_direction(),
            stats.dust_particles,
            stats.jumps_started
        );
    }
}

/// `time_jumping` is stale outside a jump, so it prints as `-` there.
#[cfg(feature = "debug")]
fn jump_time_label(c: &PlayerMotionController) -> String {
    if c.jump_state().tracks_jump_time() {
        format!("{:.3}", c.time_jumping())
    } else {
        "-".to_string()
    }
}

/// Logs jump-state changes as seen after ground contact, so a standing
/// player reads as `Grounded` every frame.
#[cfg(feature = "debug")]
pub fn log_jump_transitions(
    mut last: Local<HashMap<Entity, JumpState>>,
    mut stats: ResMut<DebugStats>,
    q_players: Query<(Entity, &PlayerMotionController)>,
) {
    for (entity, c) in &q_players {
        let now = c.jump_state();
        let Some(prev) = last.insert(entity, now) else {
            continue;
        };
        if prev == now {
            continue;
        }
        if now == JumpState::JumpRising {
            stats.jumps_started += 1;
        }
        debug!(
            ?entity,
            from = prev.label(),
            to = now.label(),
            t_jump = c.time_jumping(),
            "jump state"
        );
    }
    last.retain(|e, _| q_players.contains(*e));
}
