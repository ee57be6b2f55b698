//! Generic body integration shared by moving game objects.
//!
//! Positions are in world units with the body's bottom-left corner as the
//! anchor; `origin` is the pivot used when drawing (centre of `dimension`).

use bevy::prelude::*;

/// Kinematic state plus the per-instance physics constants.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionBody {
    pub position: Vec2,
    pub velocity: Vec2,
    pub terminal_velocity: Vec2,
    pub friction: Vec2,
    pub acceleration: Vec2,
    pub dimension: Vec2,
    pub origin: Vec2,
}

impl MotionBody {
    pub fn new(dimension: Vec2) -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            terminal_velocity: Vec2::ONE,
            friction: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            dimension,
            origin: dimension * 0.5,
        }
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    /// Centre of the body in world units.
    pub fn center(&self) -> Vec2 {
        self.position + self.origin
    }

    /// Moves the body along its current velocity.
    pub fn advance(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }
}

/// Integrates velocity from friction, acceleration and terminal velocity.
///
/// The controller parameterises vertical motion (it may force `velocity.y`
/// before calling in) but never implements the integration itself.
pub trait MotionIntegrator {
    fn integrate_x(&self, body: &mut MotionBody, dt: f32);
    fn integrate_y(&self, body: &mut MotionBody, dt: f32);
}

/// Default integration: friction toward rest, then acceleration, then clamp.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseMotion;

impl MotionIntegrator for BaseMotion {
    fn integrate_x(&self, body: &mut MotionBody, dt: f32) {
        body.velocity.x = step_axis(
            body.velocity.x,
            body.friction.x,
            body.acceleration.x,
            body.terminal_velocity.x,
            dt,
        );
    }

    fn integrate_y(&self, body: &mut MotionBody, dt: f32) {
        body.velocity.y = step_axis(
            body.velocity.y,
            body.friction.y,
            body.acceleration.y,
            body.terminal_velocity.y,
            dt,
        );
    }
}

/// One axis of the base integration. Friction never flips the sign.
pub fn step_axis(velocity: f32, friction: f32, acceleration: f32, terminal: f32, dt: f32) -> f32 {
    let mut v = velocity;
    if v > 0.0 {
        v = (v - friction * dt).max(0.0);
    } else if v < 0.0 {
        v = (v + friction * dt).min(0.0);
    }
    v += acceleration * dt;
    v.clamp(-terminal, terminal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn friction_stops_at_zero() {
        let v = step_axis(1.0, 22.0, 0.0, 5.5, 0.1);
        assert_eq!(v, 0.0);
        let v = step_axis(-1.0, 22.0, 0.0, 5.5, 0.1);
        assert_eq!(v, 0.0);
    }

    #[test]
    fn gravity_clamped_to_terminal() {
        let mut v = 0.0;
        for _ in 0..100 {
            v = step_axis(v, 0.0, -25.0, 4.0, 0.1);
        }
        assert_eq!(v, -4.0);
    }

    #[test]
    fn base_motion_leaves_other_axis_alone() {
        let mut body = MotionBody::new(Vec2::new(0.6, 1.0));
        body.velocity = Vec2::new(3.0, 2.0);
        body.terminal_velocity = Vec2::new(5.5, 4.0);
        body.acceleration = Vec2::new(0.0, -25.0);
        BaseMotion.integrate_y(&mut body, 0.1);
        assert_eq!(body.velocity.x, 3.0);
        assert!((body.velocity.y - (-0.5)).abs() < 1e-5);
    }

    #[test]
    fn origin_is_centre_of_dimension() {
        let body = MotionBody::new(Vec2::new(0.6, 1.0)).with_position(Vec2::new(1.0, 2.0));
        assert_eq!(body.origin, Vec2::new(0.3, 0.5));
        assert_eq!(body.center(), Vec2::new(1.3, 2.5));
    }
}
