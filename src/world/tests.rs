use super::*;
use bevy::prelude::Vec2;

// ---------------------------------------------------------------------------
// bounce pad classification
// ---------------------------------------------------------------------------

#[test]
fn test_top_contact_launches() {
    let pad = BouncePad::default();

    // Player above the pad: contact vector points down.
    let response = pad.respond(Vec2::new(0.1, -0.5), false);
    assert_eq!(response, BounceResponse::Launch(pad.impulse));
}

#[test]
fn test_held_jump_boosts_the_launch() {
    let pad = BouncePad::default();

    let response = pad.respond(Vec2::new(0.0, -0.5), true);
    assert_eq!(
        response,
        BounceResponse::Launch(pad.impulse * pad.jump_multiplier)
    );
}

#[test]
fn test_side_contact_flings_away() {
    let pad = BouncePad::default();

    // Pad to the player's right: flung left.
    let BounceResponse::Fling(push) = pad.respond(Vec2::new(1.0, 0.0), true) else {
        panic!("side contact must fling");
    };
    assert!(push.x < 0.0);
    assert_eq!(push.length(), pad.impulse * 0.5);
}

#[test]
fn test_classification_around_the_threshold() {
    let pad = BouncePad::default();

    let just_inside = (pad.top_angle - 1.0).to_radians();
    let contact = Vec2::new(just_inside.sin(), -just_inside.cos());
    assert!(matches!(pad.respond(contact, false), BounceResponse::Launch(_)));

    let just_outside = (pad.top_angle + 1.0).to_radians();
    let contact = Vec2::new(just_outside.sin(), -just_outside.cos());
    assert!(matches!(pad.respond(contact, false), BounceResponse::Fling(_)));
}
