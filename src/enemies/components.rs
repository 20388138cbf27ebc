//! Enemy domain: the two archetype state machines.

use bevy::prelude::*;
use rand::Rng;

use crate::enemies::resources::{FlyerTuning, WalkerTuning};
use crate::movement::Facing;
use crate::timing::Window;

/// Ground patroller. Fights on contact from the first tick, so its body
/// never collides with the player; damage goes through its contact zone.
#[derive(Component, Debug)]
pub struct Walker {
    pub facing: Facing,
    /// Probe anchors derive from the collider size, resolved once at spawn.
    pub half_extents: Vec2,
    start_wait: Window,
    turn_cooldown: Window,
}

impl Walker {
    pub fn new(tuning: &WalkerTuning, half_extents: Vec2) -> Self {
        Self {
            facing: Facing::Left,
            half_extents,
            start_wait: Window::armed(tuning.start_wait),
            turn_cooldown: Window::expired(tuning.turn_around),
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.start_wait.tick(dt);
        self.turn_cooldown.tick(dt);
    }

    pub fn is_waiting(&self) -> bool {
        self.start_wait.is_open()
    }

    /// Flip facing unless the turn-around cooldown is still running.
    pub fn try_flip(&mut self) -> bool {
        if self.turn_cooldown.is_open() {
            return false;
        }
        self.facing = self.facing.flipped();
        self.turn_cooldown.arm();
        true
    }

    /// One patrol tick. Returns the horizontal velocity to drive: zero on
    /// the flip tick (and while held at a cliff by the cooldown), full
    /// patrol speed otherwise.
    pub fn patrol_step(&mut self, ground_ahead: bool, wall_ahead: bool, tuning: &WalkerTuning) -> f32 {
        if self.is_waiting() {
            return 0.0;
        }
        if !ground_ahead || wall_ahead {
            if self.try_flip() {
                return 0.0;
            }
            if !ground_ahead {
                // Cooldown still running at a cliff: hold rather than walk off.
                return 0.0;
            }
        }
        self.facing.sign() * tuning.move_speed
    }
}

/// Degrees-from-up band inside which a probe hit counts as a wall.
const WALL_ANGLE_MIN: f32 = 70.0;
const WALL_ANGLE_MAX: f32 = 110.0;

/// Walls have near-horizontal surface normals. A walkable ramp ahead has a
/// near-vertical normal and must not trigger a turn.
pub(crate) fn is_wall_normal(normal: Vec2) -> bool {
    if normal == Vec2::ZERO {
        return false;
    }
    let angle = normal.normalize().angle_to(Vec2::Y).abs().to_degrees();
    angle > WALL_ANGLE_MIN && angle < WALL_ANGLE_MAX
}

/// Steering weights: (chase, sweep, wander).
const GATE_OUT_OF_RANGE: (f32, f32, f32) = (0.2, 1.5, 1.0);
const GATE_BLOCKED: (f32, f32, f32) = (0.2, 1.0, 0.2);
const GATE_CLEAR: (f32, f32, f32) = (1.0, 0.1, 0.1);

/// Flying pursuer. Sleeps until the player comes close, then steers with
/// the sum of a chase, a circular sweep and a random wander component.
#[derive(Component, Debug)]
pub struct Flyer {
    pub awake: bool,
    /// One-tick feedback flag, set when the flyer takes a hit.
    pub hit_flash: bool,
    sweep_period: f32,
    sweep_speed: f32,
    /// Left/right orbit direction, fixed per instance.
    sweep_bias: f32,
    wander_period: f32,
    wander_speed: f32,
    sweep_phase: f32,
    wander_timer: Window,
    wander_dir: Vec2,
    blocked: Window,
}

impl Flyer {
    /// Per-instance parameters are jittered so a group of flyers does not
    /// move in lockstep.
    pub fn new<R: Rng>(tuning: &FlyerTuning, rng: &mut R) -> Self {
        let wander_period = tuning.wander_period * rng.random_range(0.8..1.2);
        Self {
            awake: false,
            hit_flash: false,
            sweep_period: tuning.sweep_period * rng.random_range(0.8..1.2),
            sweep_speed: tuning.sweep_speed * rng.random_range(0.8..1.2),
            sweep_bias: if rng.random_bool(0.5) { 1.0 } else { -1.0 },
            wander_period,
            wander_speed: tuning.wander_speed * rng.random_range(0.8..1.2),
            sweep_phase: 0.0,
            wander_timer: Window::armed(wander_period),
            wander_dir: Vec2::ZERO,
            blocked: Window::expired(tuning.blocked_delay),
        }
    }

    pub fn wake(&mut self) -> bool {
        if self.awake {
            return false;
        }
        self.awake = true;
        true
    }

    /// One steering tick while awake. `to_player` is the vector toward the
    /// (look-down adjusted) target point.
    pub fn steer<R: Rng>(
        &mut self,
        to_player: Vec2,
        in_range: bool,
        los_blocked: bool,
        dt: f32,
        tuning: &FlyerTuning,
        rng: &mut R,
    ) -> Vec2 {
        self.sweep_phase += dt;
        self.wander_timer.tick(dt);
        self.blocked.tick(dt);
        if los_blocked {
            self.blocked.arm();
        }

        if !self.wander_timer.is_open() {
            let angle = rng.random_range(0.0..std::f32::consts::TAU);
            self.wander_dir = Vec2::from_angle(angle);
            self.wander_timer = Window::armed(self.wander_period * rng.random_range(0.8..1.2));
        }

        // The blocked window must fully decay after line of sight returns
        // before full chase speed resumes.
        let (chase_w, sweep_w, wander_w) = if !in_range {
            GATE_OUT_OF_RANGE
        } else if self.blocked.is_open() {
            GATE_BLOCKED
        } else {
            GATE_CLEAR
        };

        let chase = to_player.normalize_or_zero() * tuning.chase_speed * chase_w;
        let theta = self.sweep_phase * std::f32::consts::TAU / self.sweep_period;
        let sweep =
            Vec2::new(self.sweep_bias * theta.cos(), theta.sin()) * self.sweep_speed * sweep_w;
        let wander = self.wander_dir * self.wander_speed * wander_w;

        chase + sweep + wander
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked.is_open()
    }
}
