//! Movement & jump controller: fixed-timestep locomotion with jump
//! buffering, coyote time, variable height and ladder climbing.

mod bootstrap;
mod components;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use bootstrap::PLAYER_MAX_HEALTH;
pub use components::{
    AnimationState, Facing, GameLayer, Gear, MovementState, Player, PlayerAnim, AXIS_DEADZONE,
};
pub(crate) use components::drag_step;
pub use resources::{MovementInput, MovementTuning};

use crate::session::SimSet;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(Startup, bootstrap::spawn_player)
            .add_systems(Update, systems::read_input)
            .add_systems(
                FixedUpdate,
                systems::begin_tick_input.in_set(SimSet::Input),
            )
            .add_systems(
                FixedUpdate,
                (
                    systems::update_timers,
                    systems::detect_ground,
                    systems::detect_ladder,
                    systems::update_climb,
                    systems::apply_jump,
                    systems::apply_horizontal_movement,
                    systems::apply_gravity,
                    systems::update_facing,
                    systems::update_animation,
                )
                    .chain()
                    .in_set(SimSet::Movement),
            );
    }
}
