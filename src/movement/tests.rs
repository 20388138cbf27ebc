use super::*;

const DT: f32 = 1.0 / 60.0;

fn tuning() -> MovementTuning {
    MovementTuning::default()
}

fn grounded_state(tuning: &MovementTuning) -> MovementState {
    let mut state = MovementState::new(tuning);
    state.set_grounded(true);
    state
}

// ---------------------------------------------------------------------------
// jump buffering
// ---------------------------------------------------------------------------

#[test]
fn test_buffered_jump_fires_once_on_landing() {
    let t = tuning();
    let mut state = MovementState::new(&t);

    // Airborne, past any coyote grace.
    for _ in 0..30 {
        state.tick(DT);
    }
    assert!(!state.jumpable());

    // Press 3 ticks before landing: within the buffer window.
    state.press_jump();
    for _ in 0..3 {
        state.tick(DT);
        assert!(state.try_buffered_jump(-5.0, true, &t).is_none());
    }

    state.set_grounded(true);
    let vy = state.try_buffered_jump(-5.0, true, &t);
    assert_eq!(vy, Some(t.jump_speed));
    assert!(state.jumping);

    // Consumed: the same press never fires twice.
    state.tick(DT);
    assert!(state.try_buffered_jump(t.jump_speed, true, &t).is_none());
}

#[test]
fn test_stale_press_does_not_fire() {
    let t = tuning();
    let mut state = MovementState::new(&t);

    state.press_jump();
    // Let the request window run out before landing.
    let ticks = (t.jump_early_time / DT) as usize + 2;
    for _ in 0..ticks {
        state.tick(DT);
    }
    state.set_grounded(true);
    assert!(state.try_buffered_jump(0.0, true, &t).is_none());
}

#[test]
fn test_jump_never_double_counts_upward_velocity() {
    let t = tuning();
    let mut state = grounded_state(&t);

    state.press_jump();
    // Already moving up (bounce pad): keep the larger arc.
    let vy = state.try_buffered_jump(3.0, true, &t).unwrap();
    assert_eq!(vy, t.jump_speed + 3.0);
}

// ---------------------------------------------------------------------------
// coyote time
// ---------------------------------------------------------------------------

#[test]
fn test_coyote_jump_within_grace() {
    let t = tuning();
    let mut state = grounded_state(&t);

    // Walk off the ledge; 4 ticks later is still inside the grace.
    state.set_grounded(false);
    for _ in 0..4 {
        state.tick(DT);
    }
    state.press_jump();
    assert!(state.try_buffered_jump(-1.0, true, &t).is_some());
}

#[test]
fn test_coyote_jump_after_grace_fails() {
    let t = tuning();
    let mut state = grounded_state(&t);

    state.set_grounded(false);
    let ticks = (t.jump_late_time / DT) as usize + 2;
    for _ in 0..ticks {
        state.tick(DT);
    }
    state.press_jump();
    assert!(state.try_buffered_jump(-3.0, true, &t).is_none());
}

#[test]
fn test_no_double_jump_from_coyote() {
    let t = tuning();
    let mut state = grounded_state(&t);

    state.press_jump();
    assert!(state.try_buffered_jump(0.0, true, &t).is_some());

    // Immediately after takeoff the probe may still be in grace range,
    // but both windows were consumed by the first jump.
    state.tick(DT);
    state.press_jump();
    assert!(state.try_buffered_jump(t.jump_speed, true, &t).is_none());
}

#[test]
fn test_min_jump_blocks_grounded_reset() {
    let t = tuning();
    let mut state = grounded_state(&t);

    state.press_jump();
    state.try_buffered_jump(0.0, true, &t).unwrap();

    // The probe still hits the ground on the first tick of the rise.
    state.tick(DT);
    state.set_grounded(true);
    assert!(state.jumping, "fresh jump must survive a lingering probe hit");

    // Once the mandatory rise is over, a grounded tick resets the jump.
    let ticks = (t.jump_min_time / DT) as usize + 2;
    for _ in 0..ticks {
        state.tick(DT);
    }
    state.set_grounded(true);
    assert!(!state.jumping);
}

// ---------------------------------------------------------------------------
// vertical step
// ---------------------------------------------------------------------------

#[test]
fn test_variable_height_release_shortens_arc() {
    let t = tuning();
    let mut held = grounded_state(&t);
    let mut released = grounded_state(&t);

    held.press_jump();
    released.press_jump();
    let mut vy_held = held.try_buffered_jump(0.0, true, &t).unwrap();
    let mut vy_released = released.try_buffered_jump(0.0, true, &t).unwrap();

    // Safely inside the mandatory rise: both arcs track plain gravity.
    for _ in 0..7 {
        held.tick(DT);
        released.tick(DT);
        vy_held = held.vertical_step(vy_held, true, DT, &t);
        vy_released = released.vertical_step(vy_released, false, DT, &t);
    }
    assert_eq!(vy_held, vy_released, "equal while the rise window is open");

    // Safely past it: the released arc decays faster.
    for _ in 0..4 {
        held.tick(DT);
        released.tick(DT);
        vy_held = held.vertical_step(vy_held, true, DT, &t);
        vy_released = released.vertical_step(vy_released, false, DT, &t);
    }
    assert!(vy_released < vy_held);
}

#[test]
fn test_short_multiplier_ignored_during_mandatory_rise() {
    let t = tuning();
    let mut state = grounded_state(&t);

    state.press_jump();
    let vy = state.try_buffered_jump(0.0, true, &t).unwrap();
    state.tick(DT);

    // Released instantly, but the window is still open: plain gravity.
    let stepped = state.vertical_step(vy, false, DT, &t);
    assert!((stepped - (vy - t.gravity * DT)).abs() < 1e-4);
}

#[test]
fn test_terminal_velocity_clamp() {
    let t = tuning();
    let state = MovementState::new(&t);
    let terminal = -t.max_fall_speed * t.gravity;

    let mut vy = 0.0;
    for _ in 0..600 {
        vy = state.vertical_step(vy, false, DT, &t);
        assert!(vy >= terminal - 1e-4);
    }
    assert!((vy - terminal).abs() < 1e-3);
}

// ---------------------------------------------------------------------------
// horizontal step
// ---------------------------------------------------------------------------

#[test]
fn test_pressed_direction_only_speeds_up() {
    let t = tuning();
    let state = grounded_state(&t);

    // Moving right faster than the target: input must not brake it.
    let fast = t.move_speed * 2.0;
    assert_eq!(state.horizontal_step(fast, 1.0, true, DT, &t), fast);

    // Below target: accelerates, never past the target.
    let mut vx = 0.0;
    for _ in 0..600 {
        vx = state.horizontal_step(vx, 1.0, true, DT, &t);
        assert!(vx <= t.move_speed + 1e-4);
    }
    assert!((vx - t.move_speed).abs() < 1e-3);
}

#[test]
fn test_neutral_input_applies_drag() {
    let t = tuning();
    let state = grounded_state(&t);

    let mut vx = t.move_speed;
    for _ in 0..120 {
        let next = state.horizontal_step(vx, 0.0, true, DT, &t);
        assert!(next.abs() < vx.abs());
        assert!(next * vx >= 0.0, "drag must never reverse the sign");
        vx = next;
    }
    assert!(vx.abs() < 1.0);
}

#[test]
fn test_hurt_gate_suppresses_steering() {
    let t = tuning();
    let mut state = grounded_state(&t);

    state.note_damaged();
    // Knockback velocity survives opposing input while the gate is open.
    let vx = -4.0;
    assert_eq!(state.horizontal_step(vx, 1.0, true, DT, &t), vx);

    let ticks = (t.hurt_lock_time / DT) as usize + 2;
    for _ in 0..ticks {
        state.tick(DT);
    }
    assert!(state.horizontal_step(vx, 1.0, true, DT, &t) > vx);
}

#[test]
fn test_dead_player_coasts_under_drag() {
    let t = tuning();
    let state = grounded_state(&t);

    let vx = 6.0;
    let next = state.horizontal_step(vx, 1.0, false, DT, &t);
    assert_eq!(next, drag_step(vx, t.move_speed, DT));
}

// ---------------------------------------------------------------------------
// ladders and the release lock
// ---------------------------------------------------------------------------

#[test]
fn test_climb_entry_requires_deliberate_input() {
    let t = tuning();
    let mut state = MovementState::new(&t);

    state.touching_ladder = true;
    assert!(!state.try_enter_climb(0.05), "deadzone input must not grab");
    assert!(state.try_enter_climb(1.0));
    assert!(state.climbing);
    assert!(!state.try_enter_climb(1.0), "already climbing");
}

#[test]
fn test_drop_jump_sets_release_lock() {
    let t = tuning();
    let mut state = MovementState::new(&t);

    state.touching_ladder = true;
    state.try_enter_climb(-1.0);

    let vy = state.drop_jump(0.0, &t);
    assert_eq!(vy, t.jump_speed);
    assert!(!state.climbing);
    assert!(state.release_lock);

    // Still overlapping the ladder on the way down: re-entry refused.
    assert!(!state.try_enter_climb(-1.0));

    // Buffered jumps are blocked too, even within coyote grace.
    state.press_jump();
    assert!(state.try_buffered_jump(0.0, true, &t).is_none());

    // Landing clears the lock.
    let ticks = (t.jump_min_time / DT) as usize + 2;
    for _ in 0..ticks {
        state.tick(DT);
    }
    state.set_grounded(true);
    assert!(!state.release_lock);
    assert!(state.try_enter_climb(-1.0));
}

// ---------------------------------------------------------------------------
// death gates
// ---------------------------------------------------------------------------

#[test]
fn test_dead_player_cannot_jump() {
    let t = tuning();
    let mut state = grounded_state(&t);

    // Grounded with a fresh press: only the alive flag says no.
    state.press_jump();
    assert!(state.try_buffered_jump(0.0, false, &t).is_none());

    // The same state, alive, would have jumped.
    assert!(state.try_buffered_jump(0.0, true, &t).is_some());
}

#[test]
fn test_death_drops_player_off_ladder() {
    let t = tuning();
    let mut state = MovementState::new(&t);

    state.touching_ladder = true;
    assert!(state.try_enter_climb(1.0));

    state.note_death();
    assert!(!state.climbing);
    assert!(!state.jumping);

    // A corpse coasts; pressed direction no longer accelerates it.
    let vx = state.horizontal_step(2.0, 1.0, false, DT, &t);
    assert_eq!(vx, drag_step(2.0, t.move_speed, DT));
}

#[test]
fn test_death_mid_jump_ends_the_rise() {
    let t = tuning();
    let mut state = grounded_state(&t);

    state.press_jump();
    let vy = state.try_buffered_jump(0.0, true, &t).unwrap();
    assert!(vy > 0.0);

    // Killed during the mandatory rise: the min-jump window closes so the
    // short-hop shaping and the grounded reset behave like a plain fall.
    state.note_death();
    assert!(!state.jumping);
    state.set_grounded(true);
    assert!(!state.jumping);
}

// ---------------------------------------------------------------------------
// presentation
// ---------------------------------------------------------------------------

#[test]
fn test_anim_derivation() {
    let t = tuning();
    let mut state = grounded_state(&t);

    assert_eq!(state.anim(0.0, 0.0, true), PlayerAnim::Idle);
    assert_eq!(state.anim(3.0, 0.0, true), PlayerAnim::Running);

    state.set_grounded(false);
    assert_eq!(state.anim(0.0, 5.0, true), PlayerAnim::Jumping);
    assert_eq!(state.anim(0.0, -5.0, true), PlayerAnim::Falling);

    state.climbing = true;
    assert_eq!(state.anim(0.0, -5.0, true), PlayerAnim::Climbing);

    // Death wins over everything.
    assert_eq!(state.anim(3.0, 5.0, false), PlayerAnim::Dead);
}

#[test]
fn test_animation_state_switches_only_on_change() {
    let mut anim = AnimationState::new(PlayerAnim::Idle.name());

    assert!(anim.set(PlayerAnim::Running.name()));
    assert!(!anim.set(PlayerAnim::Running.name()));

    anim.frozen = true;
    assert!(!anim.set(PlayerAnim::Idle.name()));
    assert_eq!(anim.current, PlayerAnim::Running.name());
}

#[test]
fn test_gear_bow_pickup_is_single_shot() {
    let mut gear = Gear::default();
    assert!(gear.acquire_bow());
    assert!(!gear.acquire_bow());
}
