//! Projectile domain: arrow lifecycle state machine.

use bevy::prelude::*;

use crate::projectiles::resources::ProjectileTuning;
use crate::timing::Window;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArrowStep {
    Hold,
    SetAlpha(f32),
    Destroy,
}

/// An arrow in flight. Settles when slow for long enough, with the timer
/// cancelled if the arrow speeds back up (bounces off a wall), then fades
/// and despawns.
#[derive(Component, Debug)]
pub struct Arrow {
    pub base_damage: f32,
    settling: bool,
    settle: Window,
    fading: bool,
    alpha: f32,
}

impl Arrow {
    pub fn new(tuning: &ProjectileTuning) -> Self {
        Self {
            base_damage: tuning.base_damage,
            settling: false,
            settle: Window::expired(tuning.settle_grace),
            fading: false,
            alpha: 1.0,
        }
    }

    /// Damage scales with current speed, so a spent arrow rolling on the
    /// ground barely scratches.
    pub fn damage(&self, speed: f32, tuning: &ProjectileTuning) -> f32 {
        speed / tuning.speed_normalizer * self.base_damage
    }

    /// An arrow that has begun fading can no longer hurt anything.
    pub fn can_damage(&self) -> bool {
        !self.fading
    }

    pub fn is_fading(&self) -> bool {
        self.fading
    }

    /// One lifecycle tick given the current speed.
    pub fn lifecycle_step(&mut self, speed: f32, tuning: &ProjectileTuning, dt: f32) -> ArrowStep {
        if self.fading {
            self.alpha -= dt / tuning.fade_time.max(f32::EPSILON);
            return if self.alpha <= 0.0 {
                ArrowStep::Destroy
            } else {
                ArrowStep::SetAlpha(self.alpha)
            };
        }

        if speed < tuning.settle_epsilon {
            if self.settling {
                self.settle.tick(dt);
                if !self.settle.is_open() {
                    self.fading = true;
                }
            } else {
                self.settling = true;
                self.settle.arm();
            }
        } else {
            // Speed recovered before the grace elapsed: still flying.
            self.settling = false;
        }
        ArrowStep::Hold
    }
}
