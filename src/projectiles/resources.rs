//! Projectile domain: tuning and the bow fire cooldown.

use bevy::prelude::*;
use serde::Deserialize;

use crate::timing::Window;

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectileTuning {
    pub launch_speed: f32,
    pub base_damage: f32,
    /// Damage = speed / normalizer * base_damage.
    pub speed_normalizer: f32,
    /// Speed below which the arrow counts as settled.
    pub settle_epsilon: f32,
    /// How long the arrow must stay slow before fading begins.
    pub settle_grace: f32,
    pub fade_time: f32,
    /// Velocity retained on a ground hit.
    pub ground_damping: f32,
    pub fire_cooldown: f32,
    /// Forward probe distance for pre-ignoring corpses in the flight path.
    pub lookahead: f32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            launch_speed: 18.0,
            base_damage: 10.0,
            speed_normalizer: 10.0,
            settle_epsilon: 0.1,
            settle_grace: 0.5,
            fade_time: 1.0,
            ground_damping: 0.8,
            fire_cooldown: 0.4,
            lookahead: 5.0,
        }
    }
}

/// Fire-rate limiter for the bow.
#[derive(Resource, Debug)]
pub struct BowState {
    cooldown: Window,
}

impl BowState {
    pub fn new(tuning: &ProjectileTuning) -> Self {
        Self {
            cooldown: Window::expired(tuning.fire_cooldown),
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.cooldown.tick(dt);
    }

    pub fn try_fire(&mut self) -> bool {
        if self.cooldown.is_open() {
            return false;
        }
        self.cooldown.arm();
        true
    }
}

impl FromWorld for BowState {
    fn from_world(world: &mut World) -> Self {
        Self::new(world.resource::<ProjectileTuning>())
    }
}
