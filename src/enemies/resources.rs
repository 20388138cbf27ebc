//! Enemy domain: archetype tuning.

use bevy::prelude::*;
use serde::Deserialize;

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WalkerTuning {
    pub move_speed: f32,
    /// Delay before the first patrol step after spawning.
    pub start_wait: f32,
    /// Cooldown between facing flips.
    pub turn_around: f32,
    /// Forward/downward probe reach beyond the collider edge.
    pub ground_probe_offset: f32,
    pub attack_damage: f32,
    /// Degrees from straight down within which contact counts as a stomp.
    pub kill_angle: f32,
    /// Knockback impulse on an accepted hit.
    pub rebound: f32,
    pub health: f32,
}

impl Default for WalkerTuning {
    fn default() -> Self {
        Self {
            move_speed: 2.0,
            start_wait: 1.0,
            turn_around: 1.0,
            ground_probe_offset: 0.1,
            attack_damage: 40.0,
            kill_angle: 40.0,
            rebound: 5.0,
            health: 15.0,
        }
    }
}

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FlyerTuning {
    /// Wake/detection radius.
    pub awareness: f32,
    /// The chase target sits this far below the player, so the flyer
    /// dives instead of hovering at eye level.
    pub look_down: f32,
    pub chase_speed: f32,
    pub contact_damage: f32,
    pub health: f32,
    /// How long after line of sight returns before full chase resumes.
    pub blocked_delay: f32,
    pub sweep_period: f32,
    pub sweep_speed: f32,
    pub wander_speed: f32,
    pub wander_period: f32,
    /// Distance band inside which the chase component dominates.
    pub attack_distance: f32,
    /// Radius of the corpse-overlap sweep at death.
    pub death_sweep_radius: f32,
}

impl Default for FlyerTuning {
    fn default() -> Self {
        Self {
            awareness: 4.0,
            look_down: 1.0,
            chase_speed: 2.0,
            contact_damage: 5.0,
            health: 10.0,
            blocked_delay: 1.0,
            sweep_period: 4.0,
            sweep_speed: 1.0,
            wander_speed: 1.0,
            wander_period: 1.5,
            attack_distance: 8.0,
            death_sweep_radius: 1.5,
        }
    }
}
