//! Projectile domain: bow firing and arrow flight.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::{
    apply_damage, DamageOutcome, DeathEvent, Health, IgnoredPairs, Invulnerable, PrevKinematics,
};
use crate::enemies::Flyer;
use crate::movement::{GameLayer, Gear, MovementInput, MovementState, Player};
use crate::projectiles::components::{Arrow, ArrowStep};
use crate::projectiles::resources::{BowState, ProjectileTuning};
use crate::session::AudioCueEvent;

const ARROW_SIZE: Vec2 = Vec2::new(0.6, 0.1);

pub(crate) fn fire_bow(
    mut commands: Commands,
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<ProjectileTuning>,
    mut bow: ResMut<BowState>,
    mut cues: MessageWriter<AudioCueEvent>,
    player: Query<(&Transform, &LinearVelocity, &MovementState, &Gear, &Health), With<Player>>,
) {
    bow.tick(time.delta_secs());
    if !input.fire_pressed {
        return;
    }
    let Ok((transform, velocity, state, gear, health)) = player.single() else {
        return;
    };
    if !gear.has_bow || !health.alive || state.climbing {
        return;
    }
    if !bow.try_fire() {
        return;
    }

    let sign = state.facing.sign();
    let origin = transform.translation.truncate() + Vec2::new(sign * 0.6, 0.2);
    // Inherit the shooter's velocity so running shots lead properly.
    let launch = Vec2::new(sign * tuning.launch_speed + velocity.x, velocity.y * 0.2);

    commands.spawn((
        (
            Arrow::new(&tuning),
            PrevKinematics {
                position: origin,
                linvel: launch,
                angvel: 0.0,
            },
        ),
        Sprite {
            color: Color::srgb(0.85, 0.75, 0.5),
            custom_size: Some(ARROW_SIZE),
            flip_x: sign < 0.0,
            ..default()
        },
        Transform::from_translation(origin.extend(0.0)),
        (
            RigidBody::Dynamic,
            Collider::rectangle(ARROW_SIZE.x, ARROW_SIZE.y),
            LinearVelocity(launch),
            AngularVelocity::default(),
            CollisionEventsEnabled,
            ActiveCollisionHooks::FILTER_PAIRS,
            CollisionLayers::new(
                GameLayer::Projectile,
                [GameLayer::Ground, GameLayer::Enemy],
            ),
        ),
    ));
    cues.write(AudioCueEvent { cue: "bow_fire" });
    debug!("Arrow loosed at {:?}", launch);
}

/// Forward probe: a fast arrow can cross a corpse in a single tick, so
/// corpses directly in the flight path are pair-ignored before contact.
pub(crate) fn arrow_lookahead(
    tuning: Res<ProjectileTuning>,
    spatial: SpatialQuery,
    mut ignored: ResMut<IgnoredPairs>,
    arrows: Query<(Entity, &Transform, &LinearVelocity), With<Arrow>>,
    health: Query<&Health>,
) {
    for (entity, transform, velocity) in &arrows {
        let Ok(dir) = Dir2::new(velocity.0) else {
            continue;
        };
        let hits = spatial.ray_hits(
            transform.translation.truncate(),
            dir,
            tuning.lookahead,
            4,
            true,
            &SpatialQueryFilter::from_mask(GameLayer::Enemy),
        );
        for hit in hits {
            if health.get(hit.entity).is_ok_and(|h| !h.alive) {
                ignored.insert(entity, hit.entity);
            }
        }
    }
}

/// Contact resolution for arrows: damp on ground, damage live enemies,
/// pass through corpses.
pub(crate) fn arrow_contacts(
    mut commands: Commands,
    mut collisions: MessageReader<CollisionStart>,
    mut deaths: MessageWriter<DeathEvent>,
    tuning: Res<ProjectileTuning>,
    mut ignored: ResMut<IgnoredPairs>,
    layers: Query<&CollisionLayers>,
    mut arrows: Query<
        (
            &mut Arrow,
            &PrevKinematics,
            &mut Transform,
            &mut LinearVelocity,
            &mut AngularVelocity,
        ),
        Without<Player>,
    >,
    mut enemies: Query<(&mut Health, &mut Invulnerable, Option<&mut Flyer>)>,
) {
    for event in collisions.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (arrow_entity, other) in pairs {
            let Ok((mut arrow, prev, mut transform, mut velocity, mut angular)) =
                arrows.get_mut(arrow_entity)
            else {
                continue;
            };

            // Ground hit: keep flying with damped velocity; the settle
            // timer decides when the arrow is spent.
            let hit_ground = layers
                .get(other)
                .is_ok_and(|l| l.memberships.has_all(GameLayer::Ground));
            if hit_ground {
                velocity.0 *= tuning.ground_damping;
                continue;
            }

            let Ok((mut health, mut invuln, flyer)) = enemies.get_mut(other) else {
                continue;
            };

            if !health.alive {
                // Corpse pass-through: undo this tick's contact response.
                transform.translation = prev.position.extend(transform.translation.z);
                velocity.0 = prev.linvel;
                angular.0 = prev.angvel;
                ignored.insert(arrow_entity, other);
                continue;
            }

            if !arrow.can_damage() {
                continue;
            }
            let speed = velocity.length();
            let outcome = apply_damage(&mut health, &mut invuln, arrow.damage(speed, &tuning));
            if outcome.accepted() {
                if let Some(mut flyer) = flyer {
                    flyer.hit_flash = true;
                }
                if outcome == DamageOutcome::Killed {
                    deaths.write(DeathEvent { entity: other });
                }
                commands.entity(arrow_entity).despawn();
            }
        }
    }
}

/// Advance every arrow's settle/fade state machine.
pub(crate) fn arrow_lifecycle(
    mut commands: Commands,
    time: Res<Time>,
    tuning: Res<ProjectileTuning>,
    mut arrows: Query<(Entity, &mut Arrow, &LinearVelocity, &mut Sprite)>,
) {
    let dt = time.delta_secs();
    for (entity, mut arrow, velocity, mut sprite) in &mut arrows {
        match arrow.lifecycle_step(velocity.length(), &tuning, dt) {
            ArrowStep::Hold => {}
            ArrowStep::SetAlpha(alpha) => {
                sprite.color.set_alpha(alpha);
            }
            ArrowStep::Destroy => {
                commands.entity(entity).despawn();
            }
        }
    }
}
