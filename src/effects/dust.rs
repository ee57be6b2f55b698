//! Dust particles kicked up when the player runs off the ground.
//!
//! The controller only asks to start the effect or to let it complete; this
//! module owns emission timing, particle motion and fade-out.

use bevy::color::Alpha;
use bevy::prelude::*;
use rand::Rng;

use crate::core::config::GameConfig;
use crate::core::system::system_order::PlayerSet;
use crate::player::{PlayerEffect, PlayerEffectEvent};

const DUST_COLOR: Color = Color::srgba(0.78, 0.74, 0.66, 0.9);

/// Per-entity emitter state.
#[derive(Component, Debug, Default, Clone)]
pub struct DustEmitter {
    anchor: Vec2,
    remaining: f32,
    spawn_accum: f32,
}

impl DustEmitter {
    /// (Re)starts emission at `at` (world units) for `duration` seconds.
    pub fn start(&mut self, at: Vec2, duration: f32) {
        if !self.is_emitting() {
            // first particle appears on the start frame
            self.spawn_accum = 1.0;
        }
        self.anchor = at;
        self.remaining = duration;
    }

    /// Ends emission now; particles already alive finish their lifetime.
    pub fn allow_completion(&mut self) {
        self.remaining = 0.0;
    }

    pub fn is_emitting(&self) -> bool {
        self.remaining > 0.0
    }

    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    /// Advances the emitter and returns how many particles to spawn.
    pub fn tick(&mut self, dt: f32, particles_per_second: f32) -> u32 {
        if !self.is_emitting() {
            return 0;
        }
        let active = dt.min(self.remaining);
        self.remaining = (self.remaining - dt).max(0.0);
        self.spawn_accum += active * particles_per_second;
        let count = self.spawn_accum.floor();
        self.spawn_accum -= count;
        count as u32
    }
}

#[derive(Component, Debug, Clone)]
pub struct DustParticle {
    /// Pixels per second.
    pub velocity: Vec2,
    pub age: f32,
    pub lifetime: f32,
}

pub struct DustPlugin;

impl Plugin for DustPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PlayerEffectEvent>().add_systems(
            Update,
            (apply_dust_effects, emit_dust, update_dust_particles)
                .chain()
                .in_set(PlayerSet::Present),
        );
    }
}

pub fn apply_dust_effects(
    cfg: Res<GameConfig>,
    mut events: EventReader<PlayerEffectEvent>,
    mut q: Query<&mut DustEmitter>,
) {
    for ev in events.read() {
        let Ok(mut emitter) = q.get_mut(ev.entity) else {
            continue;
        };
        match ev.effect {
            PlayerEffect::StartDust { at } => {
                if cfg.dust.enabled {
                    emitter.start(at, cfg.dust.emission_duration);
                }
            }
            PlayerEffect::AllowDustCompletion => emitter.allow_completion(),
        }
    }
}

fn emit_dust(
    mut commands: Commands,
    time: Res<Time>,
    cfg: Res<GameConfig>,
    mut q: Query<&mut DustEmitter>,
) {
    let dt = time.delta_secs();
    let ppu = cfg.stage.pixels_per_unit;
    let dust = &cfg.dust;
    let mut rng = rand::thread_rng();
    for mut emitter in &mut q {
        let count = emitter.tick(dt, dust.particles_per_second);
        let origin = emitter.anchor() * ppu;
        for _ in 0..count {
            let jitter = rng.gen_range(-0.5f32..0.5) * dust.particle_size * 2.0 * ppu;
            let speed = dust.particle_speed.max(0.0) * ppu;
            let velocity = Vec2::new(
                rng.gen_range(-1.0f32..=1.0) * speed,
                rng.gen_range(0.0f32..=0.5) * speed,
            );
            let lifetime = dust.particle_lifetime * rng.gen_range(0.7f32..=1.0);
            commands.spawn((
                DustParticle {
                    velocity,
                    age: 0.0,
                    lifetime,
                },
                Sprite::from_color(DUST_COLOR, Vec2::splat(dust.particle_size * ppu)),
                Transform::from_translation(Vec3::new(origin.x + jitter, origin.y, 0.5)),
            ));
        }
    }
}

pub fn update_dust_particles(
    mut commands: Commands,
    time: Res<Time>,
    mut q: Query<(Entity, &mut DustParticle, &mut Transform, Option<&mut Sprite>)>,
) {
    let dt = time.delta_secs();
    for (entity, mut particle, mut tf, sprite) in &mut q {
        particle.age += dt;
        if particle.age >= particle.lifetime {
            commands.entity(entity).despawn();
            continue;
        }
        tf.translation += (particle.velocity * dt).extend(0.0);
        if let Some(mut sprite) = sprite {
            let life_left = 1.0 - particle.age / particle.lifetime;
            sprite.color.set_alpha(DUST_COLOR.alpha() * life_left);
        }
    }
}
