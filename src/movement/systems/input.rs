//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::MovementInput;

/// Runs in `Update` at render rate: samples the axes and latches press
/// edges so the fixed-step simulation never misses one.
pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Vertical axis carries climb intent.
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    input.axis = Vec2::new(x, y);
    input.jump_held = keyboard.pressed(KeyCode::Space) || keyboard.pressed(KeyCode::KeyK);
    if keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK) {
        input.jump_pressed_raw = true;
    }
    if keyboard.just_pressed(KeyCode::KeyJ) || keyboard.just_pressed(KeyCode::KeyX) {
        input.fire_pressed_raw = true;
    }
}

/// First system of each fixed tick: moves the latched edges into the
/// per-tick snapshot and clears the latches.
pub(crate) fn begin_tick_input(mut input: ResMut<MovementInput>) {
    input.jump_pressed = input.jump_pressed_raw;
    input.fire_pressed = input.fire_pressed_raw;
    input.jump_pressed_raw = false;
    input.fire_pressed_raw = false;
}
