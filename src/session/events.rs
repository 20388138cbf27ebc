//! Session domain: session-level messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// A coin pickup was collected this tick.
#[derive(Debug)]
pub struct CoinCollectedEvent {
    pub value: u32,
}

impl Message for CoinCollectedEvent {}

/// An enemy finished dying; the session tallies it.
#[derive(Debug)]
pub struct EnemyDefeatedEvent {
    pub entity: Entity,
}

impl Message for EnemyDefeatedEvent {}

/// The level exit was reached.
#[derive(Debug)]
pub struct LevelCompleteEvent;

impl Message for LevelCompleteEvent {}

/// Named audio cue; playback is external to the gameplay core.
#[derive(Debug)]
pub struct AudioCueEvent {
    pub cue: &'static str,
}

impl Message for AudioCueEvent {}
