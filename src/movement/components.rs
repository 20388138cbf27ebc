//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::MovementTuning;
use crate::timing::Window;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms, walls)
    Ground,
    /// Ladder overlap volumes
    Ladder,
    /// Hazard surfaces (spikes, acid pools)
    Hazard,
    /// Player character body
    Player,
    /// Enemy character bodies
    Enemy,
    /// Enemy contact-damage zones (sensors)
    EnemyZone,
    /// Projectiles in flight
    Projectile,
    /// Pickups, checkpoints, triggers - should not block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }
}

/// Presentation state derived each tick from the underlying flags.
/// Only the state name is emitted; clip playback is external.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAnim {
    Idle,
    Running,
    Jumping,
    Falling,
    Climbing,
    Dead,
}

impl PlayerAnim {
    pub fn name(self) -> &'static str {
        match self {
            PlayerAnim::Idle => "PlayerIdle",
            PlayerAnim::Running => "PlayerRunning",
            PlayerAnim::Jumping => "PlayerJumping",
            PlayerAnim::Falling => "PlayerFalling",
            PlayerAnim::Climbing => "PlayerClimbing",
            PlayerAnim::Dead => "PlayerDead",
        }
    }
}

/// Current animation state name for external clip selection.
#[derive(Component, Debug)]
pub struct AnimationState {
    pub current: &'static str,
    /// Frozen playback (death squish keeps the last frame).
    pub frozen: bool,
}

impl AnimationState {
    pub fn new(initial: &'static str) -> Self {
        Self {
            current: initial,
            frozen: false,
        }
    }

    /// Switch states only on change so external playback is not restarted.
    /// Returns true if the state actually changed.
    pub fn set(&mut self, next: &'static str) -> bool {
        if self.frozen || self.current == next {
            return false;
        }
        self.current = next;
        true
    }
}

/// Equipped-weapon flags for the player.
#[derive(Component, Debug, Default)]
pub struct Gear {
    pub has_bow: bool,
}

impl Gear {
    /// Returns false if the bow was already owned (duplicate pickup).
    pub fn acquire_bow(&mut self) -> bool {
        if self.has_bow {
            return false;
        }
        self.has_bow = true;
        true
    }
}

pub const AXIS_DEADZONE: f32 = 0.1;

/// The player's movement state machine: the booleans and windows here are
/// the true state, the presentation enum is derived from them.
#[derive(Component, Debug)]
pub struct MovementState {
    pub grounded: bool,
    pub jumping: bool,
    pub climbing: bool,
    /// Set on a deliberate drop-jump off a ladder; blocks ladder re-entry
    /// (and buffered jumps) until the next grounded tick.
    pub release_lock: bool,
    pub touching_ladder: bool,
    pub facing: Facing,
    /// Late-jump grace window, re-armed every grounded tick.
    pub coyote: Window,
    /// Jump-request window, armed on the press edge.
    pub buffer: Window,
    /// Mandatory rise after a jump begins; blocks short-hop gravity and
    /// the grounded reset while open.
    pub min_jump: Window,
    /// Hurt gate: suppresses steering and drag right after damage so
    /// knockback is not cancelled by input.
    pub hurt: Window,
}

impl MovementState {
    pub fn new(tuning: &MovementTuning) -> Self {
        Self {
            grounded: false,
            jumping: false,
            climbing: false,
            release_lock: false,
            touching_ladder: false,
            facing: Facing::Right,
            coyote: Window::expired(tuning.jump_late_time),
            buffer: Window::expired(tuning.jump_early_time),
            min_jump: Window::expired(tuning.jump_min_time),
            hurt: Window::expired(tuning.hurt_lock_time),
        }
    }

    /// Advance every window by one fixed tick.
    pub fn tick(&mut self, dt: f32) {
        self.coyote.tick(dt);
        self.buffer.tick(dt);
        self.min_jump.tick(dt);
        self.hurt.tick(dt);
    }

    /// Record the ground probe result for this tick.
    pub fn set_grounded(&mut self, grounded: bool) {
        self.grounded = grounded;
        if grounded {
            self.coyote.arm();
            self.release_lock = false;
            // The mandatory-rise window keeps a fresh jump from being
            // cancelled by a probe that still hits the ground.
            if !self.min_jump.is_open() {
                self.jumping = false;
            }
        }
    }

    /// Arm the jump-request window (press edge).
    pub fn press_jump(&mut self) {
        self.buffer.arm();
    }

    pub fn jump_requested(&self) -> bool {
        self.buffer.is_open()
    }

    /// Grounded-equivalent: on the ground or within the coyote grace.
    pub fn jumpable(&self) -> bool {
        self.grounded || self.coyote.is_open()
    }

    /// Begin a jump: returns the new vertical velocity and consumes both
    /// the request and the grace windows so one press yields one jump.
    pub fn begin_jump(&mut self, vy: f32, tuning: &MovementTuning) -> f32 {
        self.jumping = true;
        self.climbing = false;
        self.min_jump.arm();
        self.buffer.expire();
        self.coyote.expire();
        // Never double-count an existing upward velocity.
        tuning.jump_speed.max(tuning.jump_speed + vy)
    }

    /// Buffered jump decision for this tick. Returns the new vertical
    /// velocity if a jump triggered. Corpses do not jump.
    pub fn try_buffered_jump(&mut self, vy: f32, alive: bool, tuning: &MovementTuning) -> Option<f32> {
        if !alive || self.jumping || self.climbing || self.release_lock {
            return None;
        }
        if !self.jump_requested() || !self.jumpable() {
            return None;
        }
        Some(self.begin_jump(vy, tuning))
    }

    /// Ladder entry: requires overlap, not already climbing, deliberate
    /// vertical input, and no pending release lock.
    pub fn try_enter_climb(&mut self, axis_y: f32) -> bool {
        if self.climbing || !self.touching_ladder || self.release_lock {
            return false;
        }
        if axis_y.abs() <= AXIS_DEADZONE {
            return false;
        }
        self.climbing = true;
        self.jumping = false;
        true
    }

    /// Drop-jump off a ladder: exit climbing, begin a jump immediately and
    /// set the release lock so the ladder cannot be re-entered mid-fall.
    pub fn drop_jump(&mut self, vy: f32, tuning: &MovementTuning) -> f32 {
        self.climbing = false;
        self.release_lock = true;
        self.begin_jump(vy, tuning)
    }

    /// Cancel the jumping state (bounce pads need consistent gravity).
    pub fn cancel_jump(&mut self) {
        self.jumping = false;
        self.min_jump.expire();
    }

    /// Engage the hurt gate after accepted damage.
    pub fn note_damaged(&mut self) {
        self.hurt.arm();
    }

    /// Death drops the player off any ladder so gravity resumes, and ends
    /// any jump in progress.
    pub fn note_death(&mut self) {
        self.climbing = false;
        self.jumping = false;
        self.min_jump.expire();
    }

    /// One tick of gravity, variable-height shaping and the terminal
    /// velocity clamp. Not called while climbing.
    pub fn vertical_step(&self, vy: f32, jump_held: bool, dt: f32, tuning: &MovementTuning) -> f32 {
        let mut vy = vy - tuning.gravity * dt;
        if vy < 0.0 {
            // Snappier descent.
            vy -= tuning.gravity * (tuning.jump_fall_multiplier - 1.0) * dt;
        } else if self.jumping && !jump_held && !self.min_jump.is_open() {
            // Released after the mandatory rise: shorten the arc.
            vy -= tuning.gravity * (tuning.jump_short_multiplier - 1.0) * dt;
        }
        // Hard floor, applied after all gravity adjustments, every tick.
        vy.max(-tuning.max_fall_speed * tuning.gravity)
    }

    /// One tick of horizontal control. The pressed direction only ever
    /// speeds the actor up; neutral input (or death) applies exponential
    /// drag instead.
    pub fn horizontal_step(
        &self,
        vx: f32,
        axis_x: f32,
        alive: bool,
        dt: f32,
        tuning: &MovementTuning,
    ) -> f32 {
        if self.hurt.is_open() {
            return vx;
        }
        if !alive {
            return drag_step(vx, tuning.move_speed, dt);
        }

        let can_steer = self.grounded || self.climbing || tuning.air_control;
        if axis_x.abs() > AXIS_DEADZONE && can_steer {
            let target = axis_x * tuning.move_speed;
            let accel = tuning.move_speed * tuning.move_acceleration * dt;
            if axis_x > 0.0 && vx < target {
                return (vx + accel).min(target);
            }
            if axis_x < 0.0 && vx > target {
                return (vx - accel).max(target);
            }
            // Already moving faster in the pressed direction: leave it.
            return vx;
        }

        drag_step(vx, tuning.move_speed * tuning.move_slowdown, dt)
    }

    /// Derived presentation state.
    pub fn anim(&self, vx: f32, vy: f32, alive: bool) -> PlayerAnim {
        if !alive {
            PlayerAnim::Dead
        } else if self.climbing {
            PlayerAnim::Climbing
        } else if !self.grounded && vy > AXIS_DEADZONE {
            PlayerAnim::Jumping
        } else if !self.grounded && vy < -AXIS_DEADZONE {
            PlayerAnim::Falling
        } else if vx.abs() > AXIS_DEADZONE {
            PlayerAnim::Running
        } else {
            PlayerAnim::Idle
        }
    }
}

/// Exponential drag toward zero. The rate is clamped so a large rate in a
/// coarse tick stops the actor instead of reversing it.
pub(crate) fn drag_step(v: f32, rate: f32, dt: f32) -> f32 {
    v - v * (rate * dt).min(1.0)
}
