//! Combat domain: contact resolution, damage application and removal.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::components::{
    apply_damage, contact_angle_from_down, ContactZone, Hazard, Health, Invulnerable,
    PrevKinematics, Removal, RemovalStep, ZoneKind,
};
use crate::combat::events::DeathEvent;
use crate::combat::resources::CombatTuning;
use crate::movement::{MovementState, Player};

pub(crate) fn tick_invulnerable(time: Res<Time>, mut query: Query<&mut Invulnerable>) {
    let dt = time.delta_secs();
    for mut invuln in &mut query {
        invuln.tick(dt);
    }
}

/// Walker-style contact resolution: classify the contact angle against
/// straight down, then either stomp-kill the enemy or damage the player.
pub(crate) fn resolve_stomp_or_hit(
    mut collisions: MessageReader<CollisionStart>,
    mut deaths: MessageWriter<DeathEvent>,
    zones: Query<&ContactZone>,
    transforms: Query<&Transform>,
    mut enemy_health: Query<&mut Health, Without<Player>>,
    mut player: Query<
        (
            Entity,
            &Transform,
            &mut Health,
            &mut Invulnerable,
            &mut MovementState,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    for event in collisions.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (zone_entity, other) in pairs {
            let Ok(zone) = zones.get(zone_entity) else {
                continue;
            };
            let ZoneKind::StompOrHit {
                damage,
                kill_angle,
                rebound,
            } = zone.kind
            else {
                continue;
            };
            let Ok((
                player_entity,
                player_transform,
                mut health,
                mut invuln,
                mut movement,
                mut velocity,
            )) = player.get_mut(other)
            else {
                continue;
            };
            if !health.alive {
                continue;
            }
            let Ok(mut owner_health) = enemy_health.get_mut(zone.owner) else {
                continue;
            };
            if !owner_health.alive {
                continue;
            }
            let Ok(owner_transform) = transforms.get(zone.owner) else {
                continue;
            };

            // Contact vector from the player toward the enemy.
            let contact = owner_transform.translation.truncate()
                - player_transform.translation.truncate();
            let angle = contact_angle_from_down(contact);

            // Strictly inside the cone counts as a stomp; at or beyond
            // the threshold the enemy wins the exchange.
            if angle < kill_angle {
                // Top-down contact: the enemy dies instantly, bypassing
                // its health pool, and the player bounces off.
                if owner_health.kill() {
                    deaths.write(DeathEvent { entity: zone.owner });
                }
                velocity.y = -velocity.y;
                debug!("Stomp at {:.1} deg (kill angle {:.1})", angle, kill_angle);
            } else {
                let outcome = apply_damage(&mut health, &mut invuln, damage);
                if outcome.accepted() {
                    movement.note_damaged();
                    // Instantaneous impulse away from the enemy; the hurt
                    // gate keeps input from cancelling it this tick.
                    let push = -contact.normalize_or_zero() * rebound;
                    velocity.x += push.x;
                    velocity.y += push.y;
                    debug!("Player hit at {:.1} deg for {}", angle, damage);
                }
                if outcome == crate::combat::DamageOutcome::Killed {
                    deaths.write(DeathEvent {
                        entity: player_entity,
                    });
                }
            }
        }
    }
}

/// Flyer-style contact: damage on every tick of overlap. Enter and stay
/// both count; the invincibility window is the only rate limit.
pub(crate) fn apply_continuous_zone_damage(
    mut deaths: MessageWriter<DeathEvent>,
    zones: Query<(&ContactZone, &CollidingEntities)>,
    enemy_health: Query<&Health, Without<Player>>,
    mut player: Query<
        (Entity, &mut Health, &mut Invulnerable, &mut MovementState),
        With<Player>,
    >,
) {
    for (zone, colliding) in &zones {
        let ZoneKind::Continuous { damage } = zone.kind else {
            continue;
        };
        if !enemy_health
            .get(zone.owner)
            .map(|h| h.alive)
            .unwrap_or(false)
        {
            continue;
        }

        for &other in colliding.iter() {
            let Ok((player_entity, mut health, mut invuln, mut movement)) = player.get_mut(other)
            else {
                continue;
            };
            if !health.alive {
                continue;
            }
            let outcome = apply_damage(&mut health, &mut invuln, damage);
            if outcome.accepted() {
                movement.note_damaged();
            }
            if outcome == crate::combat::DamageOutcome::Killed {
                deaths.write(DeathEvent {
                    entity: player_entity,
                });
            }
        }
    }
}

/// Hazard surfaces damage the player on contact, subject to the
/// invincibility window like any other hit.
pub(crate) fn resolve_hazard_contacts(
    mut collisions: MessageReader<CollisionStart>,
    mut deaths: MessageWriter<DeathEvent>,
    hazards: Query<&Hazard>,
    mut player: Query<
        (Entity, &mut Health, &mut Invulnerable, &mut MovementState),
        With<Player>,
    >,
) {
    for event in collisions.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (hazard_entity, other) in pairs {
            let Ok(hazard) = hazards.get(hazard_entity) else {
                continue;
            };
            let Ok((player_entity, mut health, mut invuln, mut movement)) = player.get_mut(other)
            else {
                continue;
            };
            if !health.alive {
                continue;
            }
            let outcome = apply_damage(&mut health, &mut invuln, hazard.damage);
            if outcome.accepted() {
                movement.note_damaged();
            }
            if outcome == crate::combat::DamageOutcome::Killed {
                deaths.write(DeathEvent {
                    entity: player_entity,
                });
            }
        }
    }
}

/// Advance every removal sequence one tick: settle, wait, fade, despawn.
pub(crate) fn advance_removals(
    mut commands: Commands,
    time: Res<Time>,
    tuning: Res<CombatTuning>,
    mut query: Query<(Entity, &mut Removal, &LinearVelocity, &mut Sprite)>,
) {
    let dt = time.delta_secs();

    for (entity, mut removal, velocity, mut sprite) in &mut query {
        let speed = velocity.length();
        match removal.tick(speed, tuning.settle_speed, tuning.fade_time, dt) {
            RemovalStep::Hold => {}
            RemovalStep::SetAlpha(alpha) => {
                sprite.color.set_alpha(alpha);
            }
            RemovalStep::Destroy => {
                commands.entity(entity).despawn();
            }
        }
    }
}

/// End-of-tick kinematics snapshot, consumed by the corpse pass-through
/// reverts in the AI and projectile domains.
pub(crate) fn snapshot_kinematics(
    mut query: Query<(
        &Transform,
        &LinearVelocity,
        Option<&AngularVelocity>,
        &mut PrevKinematics,
    )>,
) {
    for (transform, velocity, angular, mut prev) in &mut query {
        prev.position = transform.translation.truncate();
        prev.linvel = velocity.0;
        prev.angvel = angular.map(|a| a.0).unwrap_or(0.0);
    }
}
