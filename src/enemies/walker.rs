//! Enemy domain: ground walker patrol and death.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::{CombatTuning, DeathEvent, Health, IgnoredPairs, PrevKinematics, Removal};
use crate::enemies::bootstrap::WALKER_SIZE;
use crate::enemies::components::{is_wall_normal, Flyer, Walker};
use crate::enemies::resources::WalkerTuning;
use crate::movement::{drag_step, AnimationState, Facing, GameLayer, Player};
use crate::session::{AudioCueEvent, EnemyDefeatedEvent};

/// Patrol: probe for ground ahead and walls in front, then drive the
/// horizontal velocity from the state machine's decision.
pub(crate) fn walker_patrol(
    time: Res<Time>,
    tuning: Res<WalkerTuning>,
    spatial: SpatialQuery,
    mut query: Query<(
        Entity,
        &mut Walker,
        &Transform,
        &mut LinearVelocity,
        &Health,
        &mut Sprite,
    )>,
) {
    let dt = time.delta_secs();
    let ground = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (entity, mut walker, transform, mut velocity, health, mut sprite) in &mut query {
        walker.tick(dt);
        if !health.alive {
            continue;
        }

        let position = transform.translation.truncate();
        let sign = walker.facing.sign();
        let reach = walker.half_extents.x + tuning.ground_probe_offset;

        let ahead = position + Vec2::new(sign * reach, 0.0);
        let ground_ahead = spatial
            .cast_ray(
                ahead,
                Dir2::NEG_Y,
                walker.half_extents.y + tuning.ground_probe_offset,
                true,
                &ground.clone().with_excluded_entities([entity]),
            )
            .is_some();

        // Only near-horizontal normals count as walls; a ramp ahead is
        // walked up, not turned away from.
        let forward = if sign > 0.0 { Dir2::X } else { Dir2::NEG_X };
        let wall_ahead = spatial
            .cast_ray(
                position,
                forward,
                reach,
                true,
                &ground.clone().with_excluded_entities([entity]),
            )
            .is_some_and(|hit| is_wall_normal(hit.normal));

        velocity.x = walker.patrol_step(ground_ahead, wall_ahead, &tuning);
        sprite.flip_x = walker.facing == Facing::Right;
    }
}

/// Dead walkers coast to a stop under the shared drag formula while the
/// removal sequence waits for them to settle.
pub(crate) fn walker_dead_drag(
    time: Res<Time>,
    tuning: Res<WalkerTuning>,
    mut query: Query<(&Health, &mut LinearVelocity), With<Walker>>,
) {
    let dt = time.delta_secs();
    for (health, mut velocity) in &mut query {
        if !health.alive {
            velocity.x = drag_step(velocity.x, tuning.move_speed, dt);
        }
    }
}

/// A live enemy that runs into a dead one reverts to last tick's
/// kinematics and never collides with that corpse again. Without the
/// revert, physics can catch the mover on a corpse whose contact never
/// re-fires while the overlap persists.
pub(crate) fn corpse_passthrough(
    mut collisions: MessageReader<CollisionStart>,
    mut ignored: ResMut<IgnoredPairs>,
    health: Query<&Health>,
    enemies: Query<(), Or<(With<Walker>, With<Flyer>)>>,
    mut movers: Query<(
        &PrevKinematics,
        &mut Transform,
        &mut LinearVelocity,
        Option<&mut AngularVelocity>,
    )>,
) {
    for event in collisions.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (mover, corpse) in pairs {
            if enemies.get(mover).is_err() || enemies.get(corpse).is_err() {
                continue;
            }
            let (Ok(mover_health), Ok(corpse_health)) = (health.get(mover), health.get(corpse))
            else {
                continue;
            };
            if !mover_health.alive || corpse_health.alive {
                continue;
            }

            if let Ok((prev, mut transform, mut velocity, angular)) = movers.get_mut(mover) {
                transform.translation = prev.position.extend(transform.translation.z);
                velocity.0 = prev.linvel;
                if let Some(mut angular) = angular {
                    angular.0 = prev.angvel;
                }
            }
            ignored.insert(mover, corpse);
        }
    }
}

/// Death squish: shrink the collider, flatten the sprite, freeze playback
/// and hand the body to the shared removal sequence. Runs once per walker
/// because the `alive` flip already gated the death message.
pub(crate) fn walker_deaths(
    mut commands: Commands,
    mut deaths: MessageReader<DeathEvent>,
    mut defeats: MessageWriter<EnemyDefeatedEvent>,
    mut cues: MessageWriter<AudioCueEvent>,
    combat: Res<CombatTuning>,
    mut ignored: ResMut<IgnoredPairs>,
    mut walkers: Query<(&mut Sprite, &mut AnimationState), With<Walker>>,
    player: Query<Entity, With<Player>>,
) {
    for event in deaths.read() {
        let Ok((mut sprite, mut anim)) = walkers.get_mut(event.entity) else {
            continue;
        };

        anim.frozen = true;
        sprite.custom_size = Some(Vec2::new(WALKER_SIZE.x, WALKER_SIZE.y * 0.4));
        commands.entity(event.entity).insert((
            Collider::rectangle(WALKER_SIZE.x, WALKER_SIZE.y * 0.4),
            // Corpses only rest on the ground; nothing collides with them.
            CollisionLayers::new(GameLayer::Enemy, [GameLayer::Ground]),
            Removal::new(combat.removal_wait),
        ));

        // The squished body must not trip the player walking over it.
        if let Ok(player_entity) = player.single() {
            ignored.insert(event.entity, player_entity);
        }

        defeats.write(EnemyDefeatedEvent {
            entity: event.entity,
        });
        cues.write(AudioCueEvent {
            cue: "walker_squish",
        });
        info!("Walker {:?} squished", event.entity);
    }
}
