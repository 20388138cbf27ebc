//! Projectiles: the bow and its arrows.

mod components;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use components::{Arrow, ArrowStep};
pub use resources::{BowState, ProjectileTuning};

use crate::session::SimSet;

pub struct ProjectilesPlugin;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ProjectileTuning>()
            .init_resource::<BowState>()
            .add_systems(
                FixedUpdate,
                (
                    systems::fire_bow,
                    systems::arrow_lookahead,
                    systems::arrow_contacts,
                    systems::arrow_lifecycle,
                )
                    .chain()
                    .in_set(SimSet::Projectiles),
            );
    }
}
