//! Player jump-state machine and per-frame motion update.
//!
//! Frame order expected from the host:
//! 1. `request_jump` / `request_run` from input
//! 2. `update` (horizontal integration, `update_vertical_motion`, position, facing)
//! 3. `set_grounded` from ground contact, which the next frame consumes
//!
//! `Grounded` is a one-frame pass-through: the motion update always moves on to
//! `Falling`, so the host must re-assert contact every frame the player stands.

use bevy::prelude::*;

use super::effects::{PlayerEffect, PlayerEffects};
use super::motion::{MotionBody, MotionIntegrator};
use super::state::{JumpState, JumpTiming, ViewDirection};
use crate::core::config::PlayerConfig;

#[derive(Component, Debug, Clone)]
pub struct PlayerMotionController {
    body: MotionBody,
    jump_state: JumpState,
    time_jumping: f32,
    view_direction: ViewDirection,
    timing: JumpTiming,
}

impl PlayerMotionController {
    /// New controller in the air (`Falling`), facing right.
    pub fn new(body: MotionBody, timing: JumpTiming) -> Self {
        debug_assert!(timing.min <= timing.max, "jump_time_min must not exceed jump_time_max");
        Self {
            body,
            jump_state: JumpState::Falling,
            time_jumping: 0.0,
            view_direction: ViewDirection::Right,
            timing,
        }
    }

    pub fn from_config(cfg: &PlayerConfig, position: Vec2) -> Self {
        let mut body = MotionBody::new(cfg.dimension.vec2()).with_position(position);
        body.terminal_velocity = cfg.terminal_velocity.vec2();
        body.friction = cfg.friction.vec2();
        body.acceleration = cfg.acceleration.vec2();
        Self::new(body, cfg.timing())
    }

    /// Replaces physics constants and jump timing, keeping the kinematic state.
    pub fn apply_tuning(&mut self, cfg: &PlayerConfig) {
        let dimension = cfg.dimension.vec2();
        self.body.terminal_velocity = cfg.terminal_velocity.vec2();
        self.body.friction = cfg.friction.vec2();
        self.body.acceleration = cfg.acceleration.vec2();
        self.body.dimension = dimension;
        self.body.origin = dimension * 0.5;
        self.timing = cfg.timing();
    }

    pub fn jump_state(&self) -> JumpState {
        self.jump_state
    }

    pub fn time_jumping(&self) -> f32 {
        self.time_jumping
    }

    pub fn view_direction(&self) -> ViewDirection {
        self.view_direction
    }

    pub fn timing(&self) -> JumpTiming {
        self.timing
    }

    pub fn body(&self) -> &MotionBody {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut MotionBody {
        &mut self.body
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.body.velocity
    }

    /// Jump input for this frame; `pressed` is true while the key is held.
    pub fn request_jump(&mut self, pressed: bool) {
        match self.jump_state {
            JumpState::Grounded => {
                if pressed {
                    self.time_jumping = 0.0;
                    self.jump_state = JumpState::JumpRising;
                }
            }
            JumpState::JumpRising => {
                if !pressed {
                    self.jump_state = JumpState::JumpFalling;
                }
            }
            JumpState::Falling | JumpState::JumpFalling => {}
        }
    }

    /// Horizontal input axis. Any non-zero axis runs at terminal speed in its
    /// direction; zero leaves the velocity to friction.
    pub fn request_run(&mut self, axis: f32) {
        if axis != 0.0 {
            self.body.velocity.x = axis.signum() * self.body.terminal_velocity.x;
        }
    }

    /// External ground-contact signal.
    pub fn set_grounded(&mut self, grounded: bool) {
        if grounded {
            self.jump_state = JumpState::Grounded;
        }
    }

    /// Advances jump state and vertical velocity by `dt` seconds.
    pub fn update_vertical_motion<I>(&mut self, dt: f32, integrator: &I) -> PlayerEffects
    where
        I: MotionIntegrator + ?Sized,
    {
        debug_assert!(dt >= 0.0, "negative delta time: {dt}");
        let mut effects = PlayerEffects::new();
        match self.jump_state {
            JumpState::Grounded => {
                self.jump_state = JumpState::Falling;
                if self.body.velocity.x != 0.0 {
                    let at = Vec2::new(
                        self.body.position.x + self.body.dimension.x / 2.0,
                        self.body.position.y,
                    );
                    effects.push(PlayerEffect::StartDust { at });
                }
                return effects;
            }
            JumpState::JumpRising => {
                self.time_jumping += dt;
                if self.time_jumping <= self.timing.max {
                    self.body.velocity.y = self.body.terminal_velocity.y;
                }
            }
            JumpState::Falling => {}
            JumpState::JumpFalling => {
                self.time_jumping += dt;
                // minimum jump height for a short tap
                if self.time_jumping > 0.0 && self.time_jumping <= self.timing.min {
                    self.body.velocity.y = self.body.terminal_velocity.y;
                }
            }
        }
        effects.push(PlayerEffect::AllowDustCompletion);
        integrator.integrate_y(&mut self.body, dt);
        effects
    }

    /// Facing from horizontal velocity; zero keeps the previous facing.
    pub fn update_facing(&mut self, velocity_x: f32) {
        self.view_direction = ViewDirection::from_velocity(self.view_direction, velocity_x);
    }

    /// Full frame: horizontal integration, vertical update, position, facing.
    pub fn update<I>(&mut self, dt: f32, integrator: &I) -> PlayerEffects
    where
        I: MotionIntegrator + ?Sized,
    {
        integrator.integrate_x(&mut self.body, dt);
        let effects = self.update_vertical_motion(dt, integrator);
        self.body.advance(dt);
        self.update_facing(self.body.velocity.x);
        effects
    }
}
