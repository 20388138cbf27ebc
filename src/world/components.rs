//! World domain: interactive fixtures.

use bevy::prelude::*;

use crate::combat::contact_angle_from_down;

/// Launches the player upward on a top contact; side contacts fling the
/// player away instead.
#[derive(Component, Debug)]
pub struct BouncePad {
    pub impulse: f32,
    /// Extra launch height while the jump button is held on contact.
    pub jump_multiplier: f32,
    /// Degrees from straight down within which contact counts as landing
    /// on the pad.
    pub top_angle: f32,
}

impl Default for BouncePad {
    fn default() -> Self {
        Self {
            impulse: 18.0,
            jump_multiplier: 1.4,
            top_angle: 70.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BounceResponse {
    /// Set vertical velocity to this value.
    Launch(f32),
    /// Side contact: fling away and engage the hurt gate.
    Fling(Vec2),
}

impl BouncePad {
    /// Classify a contact. `contact` points from the player toward the pad.
    pub fn respond(&self, contact: Vec2, jump_held: bool) -> BounceResponse {
        if contact_angle_from_down(contact) <= self.top_angle {
            let boost = if jump_held { self.jump_multiplier } else { 1.0 };
            BounceResponse::Launch(self.impulse * boost)
        } else {
            BounceResponse::Fling(-contact.normalize_or_zero() * self.impulse * 0.5)
        }
    }
}

/// The walkable lid of a ladder. Solid while the player is not climbing,
/// disabled while climbing (or falling past after a drop-jump) so the
/// player can pass through the top.
#[derive(Component, Debug)]
pub struct LadderTop;

/// Respawn anchor; activates once.
#[derive(Component, Debug, Default)]
pub struct Checkpoint {
    pub activated: bool,
}

#[derive(Component, Debug)]
pub struct Coin {
    pub value: u32,
}

#[derive(Component, Debug)]
pub struct Potion {
    pub heal: f32,
}

#[derive(Component, Debug)]
pub struct BowPickup;

#[derive(Component, Debug)]
pub struct LevelExit;
