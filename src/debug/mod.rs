//! Debug module: feature gated runtime stats, logging and key shortcuts.
//! Built only when compiled with `--features debug` (on by default).

#[cfg(feature = "debug")]
pub mod keys; // pub for testing
#[cfg(feature = "debug")]
mod logging;
#[cfg(feature = "debug")]
mod state;
#[cfg(feature = "debug")]
mod stats;

#[cfg(feature = "debug")]
pub use state::*;

#[cfg(feature = "debug")]
use crate::core::system::system_order::PlayerSet;
#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
pub struct DebugPlugin;

#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use keys::debug_key_input_system;
        use logging::{debug_logging_system, log_jump_transitions};
        use stats::debug_stats_collect_system;

        app.init_resource::<DebugState>()
            .init_resource::<DebugStats>()
            .add_systems(Update, debug_key_input_system.before(PlayerSet::Input))
            .add_systems(
                Update,
                (
                    debug_stats_collect_system,
                    log_jump_transitions,
                    debug_logging_system,
                )
                    .chain()
                    .after(PlayerSet::Contact),
            );
    }
}
