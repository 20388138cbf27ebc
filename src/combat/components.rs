//! Combat domain: health, invincibility and the shared removal sequence.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::timing::Window;

/// Health for damageable actors. `alive` flips exactly once, before any
/// death side effects run, so a second death signal in the same tick is a
/// structural no-op.
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: f32,
    pub max: f32,
    pub alive: bool,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self {
            current: max,
            max,
            alive: true,
        }
    }

    /// Instant kill, bypassing the health pool (stomps, hazards).
    /// Returns false if the actor was already dead.
    pub fn kill(&mut self) -> bool {
        if !self.alive {
            return false;
        }
        self.alive = false;
        self.current = 0.0;
        true
    }

    /// Heal toward max. Returns false when already full (or dead), so a
    /// potion pickup can stay in the world.
    pub fn take_health(&mut self, amount: f32) -> bool {
        if !self.alive || self.current >= self.max {
            return false;
        }
        self.current = (self.current + amount).min(self.max);
        true
    }

    pub fn percent(&self) -> f32 {
        self.current / self.max
    }
}

/// Invincibility window, armed whenever damage is accepted.
#[derive(Component, Debug)]
pub struct Invulnerable {
    window: Window,
}

impl Invulnerable {
    pub fn new(duration: f32) -> Self {
        Self {
            window: Window::expired(duration),
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.window.tick(dt);
    }

    pub fn arm(&mut self) {
        self.window.arm();
    }

    pub fn is_active(&self) -> bool {
        self.window.is_open()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Target dead or inside its invincibility window; nothing changed.
    Rejected,
    Applied,
    /// Health reached zero; `alive` has already been flipped.
    Killed,
}

impl DamageOutcome {
    pub fn accepted(self) -> bool {
        self != DamageOutcome::Rejected
    }
}

/// Damage application. Health is clamped at zero at the death transition
/// and never goes negative.
pub fn apply_damage(health: &mut Health, invuln: &mut Invulnerable, amount: f32) -> DamageOutcome {
    if !health.alive || invuln.is_active() {
        return DamageOutcome::Rejected;
    }
    health.current = (health.current - amount).max(0.0);
    invuln.arm();
    if health.current <= 0.0 {
        health.alive = false;
        DamageOutcome::Killed
    } else {
        DamageOutcome::Applied
    }
}

/// Contact-damage zone attached as a sensor child of an enemy body.
#[derive(Component, Debug)]
pub struct ContactZone {
    pub owner: Entity,
    pub kind: ZoneKind,
}

#[derive(Debug, Clone, Copy)]
pub enum ZoneKind {
    /// Walker-style contact: top-down contact inside the kill angle kills
    /// the enemy, anything else damages the player.
    StompOrHit {
        damage: f32,
        /// Degrees from straight down.
        kill_angle: f32,
        /// Knockback impulse magnitude on an accepted hit.
        rebound: f32,
    },
    /// Flyer-style contact: repeated damage on enter and stay, no cooldown
    /// at this layer.
    Continuous { damage: f32 },
}

/// Angle in degrees between the contact vector and straight down.
pub fn contact_angle_from_down(contact: Vec2) -> f32 {
    if contact == Vec2::ZERO {
        return 0.0;
    }
    contact.normalize().angle_to(Vec2::NEG_Y).abs().to_degrees()
}

/// Hazard surfaces; contact damages the player (flyers die outright).
#[derive(Component, Debug)]
pub struct Hazard {
    pub damage: f32,
}

/// Previous-tick kinematics, used to revert a mover that ran into a
/// corpse whose contact should not have resolved.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct PrevKinematics {
    pub position: Vec2,
    pub linvel: Vec2,
    pub angvel: f32,
}

/// Removal sequence after death: wait for the body to come to rest, hold a
/// grace delay, then fade out and despawn. An explicit per-tick state
/// machine, advanced once per fixed tick.
#[derive(Component, Debug)]
pub struct Removal {
    phase: RemovalPhase,
    wait: Window,
    alpha: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RemovalPhase {
    Settling,
    Waiting,
    Fading,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RemovalStep {
    Hold,
    SetAlpha(f32),
    Destroy,
}

impl Removal {
    pub fn new(grace: f32) -> Self {
        Self {
            phase: RemovalPhase::Settling,
            wait: Window::armed(grace),
            alpha: 1.0,
        }
    }

    pub fn tick(&mut self, speed: f32, settle_speed: f32, fade_time: f32, dt: f32) -> RemovalStep {
        match self.phase {
            RemovalPhase::Settling => {
                if speed < settle_speed {
                    self.phase = RemovalPhase::Waiting;
                    self.wait.arm();
                }
                RemovalStep::Hold
            }
            RemovalPhase::Waiting => {
                self.wait.tick(dt);
                if !self.wait.is_open() {
                    self.phase = RemovalPhase::Fading;
                }
                RemovalStep::Hold
            }
            RemovalPhase::Fading => {
                self.alpha -= dt / fade_time.max(f32::EPSILON);
                if self.alpha <= 0.0 {
                    RemovalStep::Destroy
                } else {
                    RemovalStep::SetAlpha(self.alpha)
                }
            }
        }
    }

    pub fn is_fading(&self) -> bool {
        self.phase == RemovalPhase::Fading
    }
}
