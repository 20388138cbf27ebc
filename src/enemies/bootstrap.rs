//! Enemy domain: archetype spawners.

use avian2d::prelude::*;
use bevy::prelude::*;
use rand::Rng;

use crate::combat::{ContactZone, Health, Invulnerable, PrevKinematics, ZoneKind};
use crate::enemies::components::{Flyer, Walker};
use crate::enemies::resources::{FlyerTuning, WalkerTuning};
use crate::movement::{AnimationState, GameLayer};

pub(crate) const WALKER_SIZE: Vec2 = Vec2::new(0.9, 1.1);
const FLYER_RADIUS: f32 = 0.4;

pub(crate) fn spawn_walker(
    commands: &mut Commands,
    tuning: &WalkerTuning,
    position: Vec2,
) -> Entity {
    debug_assert!(tuning.health > 0.0);
    debug_assert!(tuning.kill_angle > 0.0 && tuning.kill_angle < 180.0);

    let body = commands
        .spawn((
            (
                Walker::new(tuning, WALKER_SIZE / 2.0),
                Health::new(tuning.health),
                // No hit cooldown for enemies.
                Invulnerable::new(0.0),
                PrevKinematics::default(),
                AnimationState::new("WalkerWalking"),
            ),
            Sprite {
                color: Color::srgb(0.8, 0.3, 0.3),
                custom_size: Some(WALKER_SIZE),
                ..default()
            },
            Transform::from_translation(position.extend(0.0)),
            (
                RigidBody::Dynamic,
                Collider::capsule(WALKER_SIZE.x / 2.0, WALKER_SIZE.y - WALKER_SIZE.x),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Friction::new(0.0),
                CollisionEventsEnabled,
                ActiveCollisionHooks::FILTER_PAIRS,
                // The body never collides with the player; contact damage
                // goes through the sensor zone.
                CollisionLayers::new(
                    GameLayer::Enemy,
                    [GameLayer::Ground, GameLayer::Enemy, GameLayer::Projectile],
                ),
            ),
        ))
        .id();

    let zone = commands
        .spawn((
            ContactZone {
                owner: body,
                kind: ZoneKind::StompOrHit {
                    damage: tuning.attack_damage,
                    kill_angle: tuning.kill_angle,
                    rebound: tuning.rebound,
                },
            },
            Collider::rectangle(WALKER_SIZE.x + 0.1, WALKER_SIZE.y + 0.1),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::EnemyZone, [GameLayer::Player]),
            Transform::default(),
        ))
        .id();
    commands.entity(body).add_child(zone);

    body
}

pub(crate) fn spawn_flyer<R: Rng>(
    commands: &mut Commands,
    tuning: &FlyerTuning,
    position: Vec2,
    rng: &mut R,
) -> Entity {
    debug_assert!(tuning.health > 0.0);
    debug_assert!(tuning.awareness > 0.0);

    let body = commands
        .spawn((
            (
                Flyer::new(tuning, rng),
                Health::new(tuning.health),
                Invulnerable::new(0.0),
                PrevKinematics::default(),
                AnimationState::new("FlyerSleeping"),
            ),
            Sprite {
                color: Color::srgb(0.4, 0.3, 0.7),
                custom_size: Some(Vec2::splat(FLYER_RADIUS * 2.0)),
                ..default()
            },
            Transform::from_translation(position.extend(0.0)),
            (
                RigidBody::Dynamic,
                Collider::circle(FLYER_RADIUS),
                LinearVelocity::default(),
                // Weightless while alive; death restores gravity.
                GravityScale(0.0),
                Friction::new(0.0),
                CollisionEventsEnabled,
                ActiveCollisionHooks::FILTER_PAIRS,
                CollisionLayers::new(
                    GameLayer::Enemy,
                    [
                        GameLayer::Ground,
                        GameLayer::Enemy,
                        GameLayer::Projectile,
                        GameLayer::Hazard,
                    ],
                ),
            ),
        ))
        .id();

    let zone = commands
        .spawn((
            ContactZone {
                owner: body,
                kind: ZoneKind::Continuous {
                    damage: tuning.contact_damage,
                },
            },
            Collider::circle(FLYER_RADIUS + 0.05),
            Sensor,
            CollisionEventsEnabled,
            CollidingEntities::default(),
            CollisionLayers::new(GameLayer::EnemyZone, [GameLayer::Player]),
            Transform::default(),
        ))
        .id();
    commands.entity(body).add_child(zone);

    body
}
