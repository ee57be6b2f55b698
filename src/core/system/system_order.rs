//! Central system ordering labels to make the player frame explicit.
//! Stages (in `Update`, chained):
//! 1. Input (jump / run requests)
//! 2. Motion (controller update, effect events)
//! 3. Contact (ground contact for the next frame)
//! 4. Present (transform / sprite sync, particles)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum PlayerSet {
    Input,
    Motion,
    Contact,
    Present,
}
