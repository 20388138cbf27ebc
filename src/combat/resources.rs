//! Combat domain: tuning and the collision-pair ignore set.

use avian2d::prelude::*;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CombatTuning {
    /// Invincibility window after accepted damage.
    pub invincible_time: f32,
    /// Speed below which a dead body counts as at rest.
    pub settle_speed: f32,
    /// Grace delay between settling and the fade.
    pub removal_wait: f32,
    /// Linear alpha fade duration before despawn.
    pub fade_time: f32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            invincible_time: 1.0,
            settle_speed: 0.1,
            removal_wait: 0.5,
            fade_time: 1.0,
        }
    }
}

/// Collider pairs whose contacts must never resolve again (corpse
/// pass-through, player vs squished bodies). Set once, read every tick,
/// never cleared.
#[derive(Resource, Debug, Default)]
pub struct IgnoredPairs {
    pairs: HashSet<(Entity, Entity)>,
}

impl IgnoredPairs {
    fn key(a: Entity, b: Entity) -> (Entity, Entity) {
        if a <= b { (a, b) } else { (b, a) }
    }

    pub fn insert(&mut self, a: Entity, b: Entity) {
        self.pairs.insert(Self::key(a, b));
    }

    pub fn contains(&self, a: Entity, b: Entity) -> bool {
        self.pairs.contains(&Self::key(a, b))
    }
}

/// Broad-phase hook dropping contact pairs recorded in [`IgnoredPairs`].
/// Colliders opt in with `ActiveCollisionHooks::FILTER_PAIRS`.
#[derive(SystemParam)]
pub struct CorpseHooks<'w> {
    ignored: Res<'w, IgnoredPairs>,
}

impl CollisionHooks for CorpseHooks<'_> {
    fn filter_pairs(&self, collider1: Entity, collider2: Entity, _commands: &mut Commands) -> bool {
        !self.ignored.contains(collider1, collider2)
    }
}
