//! Combat domain: combat-related messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// An actor's `alive` flag flipped this tick. Kind-specific death systems
/// (walker, flyer, player) react to this exactly once.
#[derive(Debug)]
pub struct DeathEvent {
    pub entity: Entity,
}

impl Message for DeathEvent {}
