//! Enemies: ground walker and flying pursuer.

mod bootstrap;
mod components;
mod flyer;
mod resources;
mod walker;


use bevy::prelude::*;

pub(crate) use bootstrap::{spawn_flyer, spawn_walker};
pub(crate) use components::is_wall_normal;
pub use components::{Flyer, Walker};
pub use resources::{FlyerTuning, WalkerTuning};

use crate::session::SimSet;

pub struct EnemiesPlugin;

impl Plugin for EnemiesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WalkerTuning>()
            .init_resource::<FlyerTuning>()
            .add_systems(
                FixedUpdate,
                (
                    walker::walker_patrol,
                    walker::corpse_passthrough,
                    walker::walker_dead_drag,
                    flyer::flyer_sleep,
                    flyer::flyer_steer,
                    flyer::flyer_hazard_contacts,
                    walker::walker_deaths,
                    flyer::flyer_deaths,
                )
                    .chain()
                    .in_set(SimSet::Ai),
            );
    }
}
