pub mod app;
pub mod core;
pub mod debug;
pub mod effects;
pub mod player;

// Curated re-exports
pub use crate::app::game::GamePlugin;
pub use crate::core::config::{GameConfig, PlayerConfig, WindowConfig};
pub use crate::player::{
    JumpState, MotionIntegrator, PlayerEffect, PlayerMotionController, PlayerPlugin, ViewDirection,
};
