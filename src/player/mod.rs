//! Player character: jump-state machine, motion integration and the Bevy
//! systems that feed it input and present its output.

pub mod contact;
pub mod controller;
pub mod effects;
pub mod motion;
pub mod state;
mod systems;

pub use contact::resolve_floor_contact;
pub use controller::PlayerMotionController;
pub use effects::{PlayerEffect, PlayerEffectEvent, PlayerEffects};
pub use motion::{BaseMotion, MotionBody, MotionIntegrator};
pub use state::{JumpState, JumpTiming, ViewDirection, JUMP_TIME_MAX, JUMP_TIME_MIN};
pub use systems::{
    advance_player_motion, player_input_system, spawn_player, sync_player_presentation, Player,
};

use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::core::system::system_order::PlayerSet;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameConfig>()
            .init_resource::<ButtonInput<KeyCode>>()
            .add_event::<PlayerEffectEvent>()
            .configure_sets(
                Update,
                (
                    PlayerSet::Input,
                    PlayerSet::Motion,
                    PlayerSet::Contact,
                    PlayerSet::Present,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    player_input_system.in_set(PlayerSet::Input),
                    advance_player_motion.in_set(PlayerSet::Motion),
                    sync_player_presentation.in_set(PlayerSet::Present),
                ),
            );
    }
}
