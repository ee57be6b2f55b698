use std::cell::RefCell;

use bevy::prelude::Vec2;
use pixel_legends::core::config::PlayerConfig;
use pixel_legends::player::{
    BaseMotion, JumpState, MotionBody, MotionIntegrator, PlayerEffect, PlayerMotionController,
    ViewDirection, JUMP_TIME_MAX, JUMP_TIME_MIN,
};

/// Records the vertical velocity handed to integration, then applies the base
/// integration so the run stays physical.
#[derive(Default)]
struct Recording {
    seen_vy: RefCell<Vec<f32>>,
}

impl MotionIntegrator for Recording {
    fn integrate_x(&self, body: &mut MotionBody, dt: f32) {
        BaseMotion.integrate_x(body, dt);
    }
    fn integrate_y(&self, body: &mut MotionBody, dt: f32) {
        self.seen_vy.borrow_mut().push(body.velocity.y);
        BaseMotion.integrate_y(body, dt);
    }
}

fn grounded_player() -> PlayerMotionController {
    let mut c = PlayerMotionController::from_config(&PlayerConfig::default(), Vec2::ZERO);
    c.set_grounded(true);
    c
}

#[test]
fn held_jump_sustains_rise_for_three_ticks_of_a_tenth() {
    let mut c = grounded_player();
    assert_eq!(c.body().terminal_velocity.y, 4.0);
    c.request_jump(true);
    assert_eq!(c.jump_state(), JumpState::JumpRising);
    assert_eq!(c.time_jumping(), 0.0);

    let rec = Recording::default();
    for _ in 0..5 {
        c.request_jump(true);
        c.update_vertical_motion(0.1, &rec);
    }
    let seen = rec.seen_vy.borrow();
    assert_eq!(seen.len(), 5);
    assert_eq!(&seen[..3], &[4.0f32; 3], "ticks at t=0.1, 0.2, 0.3 are forced");
    assert!(seen[3] < 4.0, "tick at t=0.4 follows gravity, saw {}", seen[3]);
    assert!(seen[4] < seen[3]);
    assert_eq!(c.jump_state(), JumpState::JumpRising);
    assert!((c.time_jumping() - 0.5).abs() < 1e-5);
}

#[test]
fn one_tick_tap_still_reaches_minimum_jump() {
    let mut c = grounded_player();
    let rec = Recording::default();

    c.request_jump(true);
    c.update_vertical_motion(0.05, &rec);
    c.request_jump(false);
    assert_eq!(c.jump_state(), JumpState::JumpFalling);
    assert!((c.time_jumping() - 0.05).abs() < 1e-6);

    c.request_jump(false);
    c.update_vertical_motion(0.05, &rec);
    assert!((c.time_jumping() - JUMP_TIME_MIN).abs() < 1e-6);

    c.request_jump(false);
    c.update_vertical_motion(0.05, &rec);
    assert!((c.time_jumping() - 0.15).abs() < 1e-6);

    let seen = rec.seen_vy.borrow();
    assert_eq!(seen[0], 4.0, "rising tick forced");
    assert_eq!(seen[1], 4.0, "t == MIN still forced");
    assert!(seen[2] < 4.0, "t > MIN no longer forced, saw {}", seen[2]);
}

#[test]
fn release_after_max_falls_without_forcing() {
    let mut c = grounded_player();
    let rec = Recording::default();
    c.request_jump(true);
    for _ in 0..4 {
        c.update_vertical_motion(0.1, &rec);
    }
    assert!(c.time_jumping() > JUMP_TIME_MAX);
    c.request_jump(false);
    assert_eq!(c.jump_state(), JumpState::JumpFalling);
    let before = c.velocity().y;
    c.update_vertical_motion(0.1, &rec);
    let seen = rec.seen_vy.borrow();
    assert_eq!(*seen.last().unwrap(), before);
    assert!(c.velocity().y < before);
}

#[test]
fn every_state_and_input_lands_in_a_known_state() {
    let all = [
        JumpState::Grounded,
        JumpState::Falling,
        JumpState::JumpRising,
        JumpState::JumpFalling,
    ];
    for start in all {
        for pressed in [false, true] {
            let mut c = PlayerMotionController::from_config(&PlayerConfig::default(), Vec2::ZERO);
            // reach `start` through the public API
            match start {
                JumpState::Grounded => c.set_grounded(true),
                JumpState::Falling => {}
                JumpState::JumpRising => {
                    c.set_grounded(true);
                    c.request_jump(true);
                }
                JumpState::JumpFalling => {
                    c.set_grounded(true);
                    c.request_jump(true);
                    c.request_jump(false);
                }
            }
            assert_eq!(c.jump_state(), start);
            c.request_jump(pressed);
            c.update_vertical_motion(0.016, &BaseMotion);
            let end = c.jump_state();
            assert!(all.contains(&end));
            assert_ne!(end, JumpState::Grounded, "motion update never stays grounded");
        }
    }
}

#[test]
fn facing_ignores_standstill() {
    let mut c = grounded_player();
    c.request_run(-1.0);
    c.update(0.016, &BaseMotion);
    assert_eq!(c.view_direction(), ViewDirection::Left);
    for _ in 0..120 {
        c.update(0.016, &BaseMotion);
        c.update_facing(0.0);
    }
    assert_eq!(c.velocity().x, 0.0);
    assert_eq!(c.view_direction(), ViewDirection::Left);
}

#[test]
fn dust_starts_once_per_ground_departure() {
    let mut c = grounded_player();
    c.request_run(1.0);
    let mut starts = 0;
    let mut completions = 0;
    for _ in 0..10 {
        for e in c.update(0.016, &BaseMotion) {
            match e {
                PlayerEffect::StartDust { .. } => starts += 1,
                PlayerEffect::AllowDustCompletion => completions += 1,
            }
        }
    }
    assert_eq!(starts, 1, "only the frame leaving the ground starts dust");
    assert_eq!(completions, 9);
}

#[test]
fn standing_still_raises_no_dust() {
    let mut c = grounded_player();
    let effects = c.update(0.016, &BaseMotion);
    assert!(effects.is_empty());
    assert_eq!(c.jump_state(), JumpState::Falling);
}
