//! Movement domain: per-tick locomotion systems for the player.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::Health;
use crate::movement::{AnimationState, MovementInput, MovementState, MovementTuning, Player};

pub(crate) fn update_timers(
    time: Res<Time>,
    mut query: Query<&mut MovementState, With<Player>>,
) {
    let dt = time.delta_secs();
    for mut state in &mut query {
        state.tick(dt);
    }
}

/// Ladder entry/exit and climb-driven velocity. Runs before the jump
/// decision so a drop-jump consumes this tick's press edge first.
pub(crate) fn update_climb(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut MovementState, &Health, &mut LinearVelocity), With<Player>>,
) {
    for (mut state, health, mut velocity) in &mut query {
        // A corpse on a ladder falls off it; input no longer steers.
        if !health.alive {
            if state.climbing || state.jumping {
                state.note_death();
            }
            continue;
        }

        if !state.climbing && state.try_enter_climb(input.axis.y) {
            debug!("Entered climb");
        }

        if state.climbing {
            // Drop-jump: jump while holding down exits the ladder.
            if input.jump_pressed && input.axis.y < -crate::movement::AXIS_DEADZONE {
                velocity.y = state.drop_jump(velocity.y, &tuning);
                debug!("Drop-jump off ladder");
            } else {
                // Gravity stays off while climbing; input drives velocity.
                velocity.y = input.axis.y * tuning.climb_speed;
                velocity.x = input.axis.x * tuning.climb_speed_horizontal;
            }
        }
    }
}

pub(crate) fn apply_jump(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut MovementState, &Health, &mut LinearVelocity), With<Player>>,
) {
    for (mut state, health, mut velocity) in &mut query {
        if input.jump_pressed && health.alive {
            state.press_jump();
        }

        if let Some(vy) = state.try_buffered_jump(velocity.y, health.alive, &tuning) {
            velocity.y = vy;
            debug!(
                "Jump: grounded={}, coyote consumed, vy={:.2}",
                state.grounded, vy
            );
        }
    }
}

pub(crate) fn apply_horizontal_movement(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&MovementState, &Health, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (state, health, mut velocity) in &mut query {
        if state.climbing {
            continue;
        }
        velocity.x = state.horizontal_step(velocity.x, input.axis.x, health.alive, dt, &tuning);
    }
}

/// Manual gravity with variable jump height and the terminal clamp.
pub(crate) fn apply_gravity(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&MovementState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (state, mut velocity) in &mut query {
        if state.climbing {
            continue;
        }
        velocity.y = state.vertical_step(velocity.y, input.jump_held, dt, &tuning);
    }
}

pub(crate) fn update_facing(
    input: Res<MovementInput>,
    mut query: Query<(&mut MovementState, &mut Sprite), With<Player>>,
) {
    for (mut state, mut sprite) in &mut query {
        if input.axis.x > crate::movement::AXIS_DEADZONE {
            state.facing = crate::movement::Facing::Right;
        } else if input.axis.x < -crate::movement::AXIS_DEADZONE {
            state.facing = crate::movement::Facing::Left;
        }
        sprite.flip_x = state.facing == crate::movement::Facing::Left;
    }
}

/// Emit the derived presentation state name.
pub(crate) fn update_animation(
    mut query: Query<(&MovementState, &Health, &LinearVelocity, &mut AnimationState), With<Player>>,
) {
    for (state, health, velocity, mut anim) in &mut query {
        let next = state.anim(velocity.x, velocity.y, health.alive);
        anim.set(next.name());
    }
}
