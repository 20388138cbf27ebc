//! Combat: health, contact damage, stomp classification and removal of
//! dead bodies.

mod components;
mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use components::{
    apply_damage, contact_angle_from_down, ContactZone, DamageOutcome, Hazard, Health,
    Invulnerable, PrevKinematics, Removal, RemovalStep, ZoneKind,
};
pub use events::DeathEvent;
pub use resources::{CombatTuning, CorpseHooks, IgnoredPairs};

use crate::session::SimSet;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CombatTuning>()
            .init_resource::<IgnoredPairs>()
            .add_message::<DeathEvent>()
            .add_systems(
                FixedUpdate,
                (
                    systems::tick_invulnerable,
                    systems::resolve_stomp_or_hit,
                    systems::apply_continuous_zone_damage,
                    systems::resolve_hazard_contacts,
                    systems::advance_removals,
                )
                    .chain()
                    .in_set(SimSet::Combat),
            )
            .add_systems(
                FixedUpdate,
                systems::snapshot_kinematics.in_set(SimSet::Snapshot),
            );
    }
}
