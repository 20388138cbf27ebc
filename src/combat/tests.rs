use super::*;
use bevy::prelude::Vec2;

const DT: f32 = 1.0 / 60.0;

// ---------------------------------------------------------------------------
// damage + invincibility
// ---------------------------------------------------------------------------

#[test]
fn test_damage_applies_and_arms_invincibility() {
    let mut health = Health::new(100.0);
    let mut invuln = Invulnerable::new(1.0);

    assert_eq!(apply_damage(&mut health, &mut invuln, 40.0), DamageOutcome::Applied);
    assert_eq!(health.current, 60.0);
    assert!(invuln.is_active());
}

#[test]
fn test_damage_rejected_inside_window() {
    let mut health = Health::new(100.0);
    let mut invuln = Invulnerable::new(1.0);

    apply_damage(&mut health, &mut invuln, 40.0);

    // Same tick and every tick inside the window: no further damage.
    for _ in 0..30 {
        invuln.tick(DT);
        assert_eq!(
            apply_damage(&mut health, &mut invuln, 40.0),
            DamageOutcome::Rejected
        );
    }
    assert_eq!(health.current, 60.0);

    // Run the window out, then the next hit lands.
    for _ in 0..60 {
        invuln.tick(DT);
    }
    assert_eq!(apply_damage(&mut health, &mut invuln, 40.0), DamageOutcome::Applied);
    assert_eq!(health.current, 20.0);
}

#[test]
fn test_lethal_damage_flips_alive_and_clamps() {
    let mut health = Health::new(100.0);
    let mut invuln = Invulnerable::new(1.0);

    health.current = 20.0;
    assert_eq!(apply_damage(&mut health, &mut invuln, 50.0), DamageOutcome::Killed);
    assert!(!health.alive);
    assert_eq!(health.current, 0.0);

    // Dead targets reject everything, window or not.
    for _ in 0..120 {
        invuln.tick(DT);
    }
    assert_eq!(
        apply_damage(&mut health, &mut invuln, 10.0),
        DamageOutcome::Rejected
    );
}

#[test]
fn test_kill_is_idempotent() {
    let mut health = Health::new(10.0);

    assert!(health.kill());
    assert!(!health.kill());
    assert!(!health.alive);
    assert_eq!(health.current, 0.0);
}

#[test]
fn test_take_health_refuses_at_full_and_when_dead() {
    let mut health = Health::new(100.0);

    assert!(!health.take_health(25.0));

    health.current = 50.0;
    assert!(health.take_health(25.0));
    assert_eq!(health.current, 75.0);

    // Overheal clamps at max.
    assert!(health.take_health(100.0));
    assert_eq!(health.current, 100.0);

    health.kill();
    assert!(!health.take_health(25.0));
}

// ---------------------------------------------------------------------------
// contact angle classification
// ---------------------------------------------------------------------------

#[test]
fn test_contact_angle_straight_down_is_zero() {
    assert!(contact_angle_from_down(Vec2::new(0.0, -1.0)) < 0.001);
}

#[test]
fn test_contact_angle_classifies_stomp_threshold() {
    let kill_angle = 40.0;

    // Player directly above the enemy: contact vector points down.
    assert!(contact_angle_from_down(Vec2::new(0.2, -1.0)) <= kill_angle);

    // Side contact sits near 90 degrees, well outside.
    assert!(contact_angle_from_down(Vec2::new(1.0, -0.05)) > kill_angle);

    // Contact from below (player under the enemy) is ~180 degrees.
    assert!(contact_angle_from_down(Vec2::new(0.0, 1.0)) > 170.0);
}

#[test]
fn test_contact_angle_zero_vector_counts_as_down() {
    assert_eq!(contact_angle_from_down(Vec2::ZERO), 0.0);
}

// ---------------------------------------------------------------------------
// removal sequence
// ---------------------------------------------------------------------------

#[test]
fn test_removal_holds_until_body_settles() {
    let mut removal = Removal::new(0.5);

    // Still moving: nothing happens, however long it takes.
    for _ in 0..600 {
        assert_eq!(removal.tick(3.0, 0.1, 1.0, DT), RemovalStep::Hold);
    }
    assert!(!removal.is_fading());
}

#[test]
fn test_removal_settle_wait_fade_destroy() {
    let mut removal = Removal::new(0.5);

    // Settles this tick, then waits out the grace delay.
    assert_eq!(removal.tick(0.05, 0.1, 1.0, DT), RemovalStep::Hold);
    let mut waited = 0.0;
    while !removal.is_fading() {
        assert_eq!(removal.tick(0.0, 0.1, 1.0, DT), RemovalStep::Hold);
        waited += DT;
        assert!(waited < 1.0, "grace delay never elapsed");
    }
    assert!(waited >= 0.5 - DT);

    // Alpha decreases monotonically, then exactly one Destroy.
    let mut last_alpha = 1.0;
    loop {
        match removal.tick(0.0, 0.1, 1.0, DT) {
            RemovalStep::SetAlpha(alpha) => {
                assert!(alpha < last_alpha);
                assert!(alpha > 0.0);
                last_alpha = alpha;
            }
            RemovalStep::Destroy => break,
            RemovalStep::Hold => panic!("fade must not stall"),
        }
    }
}

#[test]
fn test_removal_wait_ignores_recovered_speed() {
    let mut removal = Removal::new(0.5);

    // A body can settle only once; speed during the wait is irrelevant
    // because the wait window only ticks forward.
    removal.tick(0.05, 0.1, 1.0, DT);
    for _ in 0..40 {
        removal.tick(5.0, 0.1, 1.0, DT);
    }
    assert!(removal.is_fading());
}
