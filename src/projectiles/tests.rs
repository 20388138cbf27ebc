use super::*;

const DT: f32 = 1.0 / 60.0;

fn tuning() -> ProjectileTuning {
    ProjectileTuning::default()
}

// ---------------------------------------------------------------------------
// lifecycle
// ---------------------------------------------------------------------------

#[test]
fn test_flying_arrow_never_fades() {
    let t = tuning();
    let mut arrow = Arrow::new(&t);

    for _ in 0..600 {
        assert_eq!(arrow.lifecycle_step(12.0, &t, DT), ArrowStep::Hold);
    }
    assert!(arrow.can_damage());
}

#[test]
fn test_settle_then_fade_then_destroy() {
    let t = tuning();
    let mut arrow = Arrow::new(&t);

    // Slow for the full grace period.
    let mut elapsed = 0.0;
    while !arrow.is_fading() {
        assert_eq!(arrow.lifecycle_step(0.02, &t, DT), ArrowStep::Hold);
        elapsed += DT;
        assert!(elapsed < 2.0, "settle grace never elapsed");
    }
    assert!(elapsed >= t.settle_grace - DT);
    assert!(!arrow.can_damage(), "fading arrows are inert");

    // Strictly decreasing alpha, one Destroy, roughly the fade duration.
    let mut last_alpha = 1.0;
    let mut fade_ticks = 0;
    loop {
        match arrow.lifecycle_step(0.0, &t, DT) {
            ArrowStep::SetAlpha(alpha) => {
                assert!(alpha < last_alpha);
                last_alpha = alpha;
                fade_ticks += 1;
            }
            ArrowStep::Destroy => break,
            ArrowStep::Hold => panic!("fade must not stall"),
        }
    }
    assert!((fade_ticks as f32 * DT - t.fade_time).abs() < 3.0 * DT);
}

#[test]
fn test_speed_recovery_cancels_the_settle_timer() {
    let t = tuning();
    let mut arrow = Arrow::new(&t);

    // Slow for most of the grace, then a bounce speeds it back up.
    let almost = (t.settle_grace / DT) as usize - 3;
    for _ in 0..almost {
        arrow.lifecycle_step(0.02, &t, DT);
    }
    arrow.lifecycle_step(6.0, &t, DT);
    assert!(!arrow.is_fading());

    // The timer restarted from zero: another near-full grace is needed.
    for _ in 0..almost {
        arrow.lifecycle_step(0.02, &t, DT);
    }
    assert!(!arrow.is_fading());
    for _ in 0..6 {
        arrow.lifecycle_step(0.02, &t, DT);
    }
    assert!(arrow.is_fading());
}

// ---------------------------------------------------------------------------
// damage scaling
// ---------------------------------------------------------------------------

#[test]
fn test_damage_scales_with_speed() {
    let t = tuning();
    let arrow = Arrow::new(&t);

    assert_eq!(arrow.damage(t.launch_speed, &t), 18.0);
    assert_eq!(arrow.damage(5.0, &t), 5.0);
    assert_eq!(arrow.damage(0.0, &t), 0.0);
}

#[test]
fn test_fire_cooldown_limits_rate() {
    let t = tuning();
    let mut bow = BowState::new(&t);

    assert!(bow.try_fire());
    assert!(!bow.try_fire());

    let ticks = (t.fire_cooldown / DT) as usize + 2;
    for _ in 0..ticks {
        bow.tick(DT);
    }
    assert!(bow.try_fire());
}
