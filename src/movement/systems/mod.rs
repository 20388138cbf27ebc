//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::{detect_ground, detect_ladder};
pub(crate) use input::{begin_tick_input, read_input};
pub(crate) use movement::{
    apply_gravity, apply_horizontal_movement, apply_jump, update_animation, update_climb,
    update_facing, update_timers,
};
