use bevy::prelude::*;
use smallvec::SmallVec;

/// Side effects requested by a motion update, consumed by the particle layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerEffect {
    /// Restart the dust effect at `at` (world units, under the player's feet).
    StartDust { at: Vec2 },
    /// Stop emitting new dust; live particles finish on their own.
    AllowDustCompletion,
}

/// Effects from a single update. At most two are produced per frame.
pub type PlayerEffects = SmallVec<[PlayerEffect; 2]>;

/// Effect tagged with the player entity that produced it.
#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerEffectEvent {
    pub entity: Entity,
    pub effect: PlayerEffect,
}
