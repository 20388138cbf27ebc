//! World: level fixtures and their interactions.

mod bootstrap;
mod components;
mod systems;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use components::{
    BouncePad, BounceResponse, BowPickup, Checkpoint, Coin, LadderTop, LevelExit, Potion,
};

use crate::session::SimSet;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, bootstrap::spawn_level).add_systems(
            FixedUpdate,
            (
                systems::bounce_pads,
                systems::ladder_tops,
                systems::checkpoints,
                systems::pickups,
                systems::level_exits,
            )
                .chain()
                .in_set(SimSet::Interact),
        );
    }
}
