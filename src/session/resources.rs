//! Session domain: run configuration, lives and the respawn sequence.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;

use crate::timing::Window;

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub seed: u64,
    pub lives: u32,
    /// Delay between the player's death and the respawn (or game over).
    pub respawn_delay: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
            lives: 3,
            respawn_delay: 1.5,
        }
    }
}

/// Seeded session RNG. Everything random in a session draws from this so a
/// fixed seed replays identically.
#[derive(Resource, Debug)]
pub struct SessionRng(pub ChaCha8Rng);

impl FromWorld for SessionRng {
    fn from_world(world: &mut World) -> Self {
        let seed = world.resource::<SessionConfig>().seed;
        info!("Session RNG seeded with {}", seed);
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RespawnDecision {
    Respawn,
    GameOver,
}

/// Tracks lives, tallies and the pending-respawn window for one session.
#[derive(Resource, Debug)]
pub struct GameSession {
    pub lives: u32,
    pub coins: u32,
    pub enemies_defeated: u32,
    pub checkpoint: Vec2,
    respawn: Window,
    respawn_pending: bool,
}

impl GameSession {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            lives: config.lives,
            coins: 0,
            enemies_defeated: 0,
            checkpoint: Vec2::new(0.0, 2.0),
            respawn: Window::expired(config.respawn_delay),
            respawn_pending: false,
        }
    }

    pub fn set_checkpoint(&mut self, position: Vec2) {
        self.checkpoint = position;
    }

    /// Burn a life and start the respawn delay. A second death report while
    /// the delay runs is a no-op.
    pub fn note_player_death(&mut self) {
        if self.respawn_pending {
            return;
        }
        self.lives = self.lives.saturating_sub(1);
        self.respawn_pending = true;
        self.respawn.arm();
    }

    /// Advance the respawn delay; yields a decision exactly once per death.
    pub fn tick_respawn(&mut self, dt: f32) -> Option<RespawnDecision> {
        if !self.respawn_pending {
            return None;
        }
        self.respawn.tick(dt);
        if self.respawn.is_open() {
            return None;
        }
        self.respawn_pending = false;
        if self.lives > 0 {
            Some(RespawnDecision::Respawn)
        } else {
            Some(RespawnDecision::GameOver)
        }
    }

    pub fn add_coins(&mut self, value: u32) {
        self.coins += value;
    }

    pub fn report_enemy_defeated(&mut self) {
        self.enemies_defeated += 1;
    }
}

impl FromWorld for GameSession {
    fn from_world(world: &mut World) -> Self {
        Self::new(world.resource::<SessionConfig>())
    }
}
