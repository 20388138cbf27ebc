//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::Deserialize;

/// Locomotion tuning. World units are meters; gravity for the player is
/// applied manually so variable jump height and the terminal clamp stay
/// under this module's control.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    pub move_speed: f32,
    /// Acceleration toward the pressed direction, as a multiple of
    /// `move_speed` per second.
    pub move_acceleration: f32,
    /// Neutral-input drag factor; drag rate = move_speed * move_slowdown.
    pub move_slowdown: f32,
    pub air_control: bool,
    pub climb_speed: f32,
    pub climb_speed_horizontal: f32,
    pub jump_speed: f32,
    /// Jump buffering: how early before landing a press still counts.
    pub jump_early_time: f32,
    /// Coyote time: how late after leaving a ledge a jump still triggers.
    pub jump_late_time: f32,
    /// Mandatory rise before a release can shorten the arc.
    pub jump_min_time: f32,
    pub jump_short_multiplier: f32,
    pub jump_fall_multiplier: f32,
    pub gravity: f32,
    /// Terminal velocity = max_fall_speed * gravity.
    pub max_fall_speed: f32,
    /// Downward ground probe length from the foot anchor.
    pub ground_probe_distance: f32,
    /// Steering/drag suppression right after taking damage.
    pub hurt_lock_time: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 8.0,
            move_acceleration: 6.0,
            move_slowdown: 0.6,
            air_control: true,
            climb_speed: 4.0,
            climb_speed_horizontal: 2.5,
            jump_speed: 14.0,
            jump_early_time: 0.12,
            jump_late_time: 0.12,
            jump_min_time: 0.15,
            jump_short_multiplier: 2.5,
            jump_fall_multiplier: 1.8,
            gravity: 40.0,
            max_fall_speed: 0.5,
            ground_probe_distance: 0.1,
            hurt_lock_time: 0.1,
        }
    }
}

/// Input snapshot for the current fixed tick. Press edges are latched in
/// `Update` and consumed at the start of the next fixed tick so a press
/// between ticks is never lost.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_held: bool,
    /// Edge for this fixed tick.
    pub jump_pressed: bool,
    pub fire_pressed: bool,
    /// Edges latched since the last fixed tick.
    pub(crate) jump_pressed_raw: bool,
    pub(crate) fire_pressed_raw: bool,
}
