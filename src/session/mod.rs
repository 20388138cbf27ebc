//! Session: fixed-tick ordering, lives, checkpoints and tallies.

mod events;
mod resources;
mod state;
mod systems;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use events::{AudioCueEvent, CoinCollectedEvent, EnemyDefeatedEvent, LevelCompleteEvent};
pub use resources::{GameSession, RespawnDecision, SessionConfig, SessionRng};
pub use state::GameState;

/// Fixed-tick phases. Every gameplay system runs in exactly one of these,
/// so a tick always resolves in the same order.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimSet {
    /// Move latched input edges into the per-tick snapshot.
    Input,
    /// Player locomotion, jumping, climbing.
    Movement,
    /// Damage resolution and removal sequences.
    Combat,
    /// World interactions: pads, ladders, pickups, checkpoints.
    Interact,
    /// Enemy behavior.
    Ai,
    /// Projectile lifecycle.
    Projectiles,
    /// Lives, respawn and tallies.
    Session,
    /// End-of-tick kinematics snapshot for next tick's reverts.
    Snapshot,
}

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<SessionConfig>()
            .init_resource::<SessionRng>()
            .init_resource::<GameSession>()
            .add_message::<CoinCollectedEvent>()
            .add_message::<EnemyDefeatedEvent>()
            .add_message::<LevelCompleteEvent>()
            .add_message::<AudioCueEvent>()
            .configure_sets(
                FixedUpdate,
                (
                    SimSet::Input,
                    SimSet::Movement,
                    SimSet::Combat,
                    SimSet::Interact,
                    SimSet::Ai,
                    SimSet::Projectiles,
                    SimSet::Session,
                    SimSet::Snapshot,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(Startup, systems::setup_camera)
            .add_systems(
                FixedUpdate,
                (
                    systems::handle_player_death,
                    systems::tick_respawn,
                    systems::tally_coins,
                    systems::tally_enemy_defeats,
                    systems::handle_level_complete,
                    systems::drain_audio_cues,
                )
                    .chain()
                    .in_set(SimSet::Session),
            )
            .add_systems(Update, systems::follow_player);
    }
}
