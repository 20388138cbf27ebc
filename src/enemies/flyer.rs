//! Enemy domain: flying pursuer behavior and death.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::FRAC_PI_2;

use crate::combat::{CombatTuning, DeathEvent, Hazard, Health, IgnoredPairs, Removal};
use crate::enemies::components::Flyer;
use crate::enemies::resources::FlyerTuning;
use crate::movement::{drag_step, AnimationState, GameLayer, Player};
use crate::session::{AudioCueEvent, EnemyDefeatedEvent, SessionRng};

const DEATH_CUES: [&str; 2] = ["flyer_death_a", "flyer_death_b"];

/// Sleeping flyers bleed off any residual velocity and probe below
/// themselves for the player.
pub(crate) fn flyer_sleep(
    time: Res<Time>,
    tuning: Res<FlyerTuning>,
    spatial: SpatialQuery,
    mut cues: MessageWriter<AudioCueEvent>,
    mut query: Query<(
        &mut Flyer,
        &Transform,
        &mut LinearVelocity,
        &Health,
        &mut AnimationState,
    )>,
) {
    let dt = time.delta_secs();

    for (mut flyer, transform, mut velocity, health, mut anim) in &mut query {
        if flyer.awake || !health.alive {
            continue;
        }

        velocity.x = drag_step(velocity.x, tuning.chase_speed, dt);
        velocity.y = drag_step(velocity.y, tuning.chase_speed, dt);

        let origin = transform.translation.truncate() + Vec2::NEG_Y * tuning.look_down;
        let hits = spatial.shape_intersections(
            &Collider::circle(tuning.awareness),
            origin,
            0.0,
            &SpatialQueryFilter::from_mask(GameLayer::Player),
        );
        if !hits.is_empty() && flyer.wake() {
            anim.set("FlyerFlying");
            cues.write(AudioCueEvent { cue: "flyer_wake" });
            debug!("Flyer woke at {:?}", origin);
        }
    }
}

/// Awake steering: chase + sweep + wander, gated by range and line of
/// sight. The velocity is driven directly; flyers are weightless.
pub(crate) fn flyer_steer(
    time: Res<Time>,
    tuning: Res<FlyerTuning>,
    spatial: SpatialQuery,
    mut rng: ResMut<SessionRng>,
    mut query: Query<(&mut Flyer, &Transform, &mut LinearVelocity, &Health), Without<Player>>,
    player: Query<&Transform, With<Player>>,
) {
    let Ok(player_transform) = player.single() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();
    let dt = time.delta_secs();

    for (mut flyer, transform, mut velocity, health) in &mut query {
        flyer.hit_flash = false;
        if !flyer.awake || !health.alive {
            continue;
        }

        let position = transform.translation.truncate();
        let target = player_pos + Vec2::NEG_Y * tuning.look_down;
        let to_player = target - position;
        let in_range = to_player.length() < tuning.attack_distance;

        let to_body = player_pos - position;
        let los_blocked = match Dir2::new(to_body) {
            Ok(dir) => spatial
                .cast_ray(
                    position,
                    dir,
                    to_body.length(),
                    true,
                    &SpatialQueryFilter::from_mask(GameLayer::Ground),
                )
                .is_some(),
            Err(_) => false,
        };

        velocity.0 = flyer.steer(to_player, in_range, los_blocked, dt, &tuning, &mut rng.0);
    }
}

/// Hazard contact is an instant kill with a knockback-style spin.
pub(crate) fn flyer_hazard_contacts(
    mut collisions: MessageReader<CollisionStart>,
    mut deaths: MessageWriter<DeathEvent>,
    hazards: Query<&Hazard>,
    mut flyers: Query<(Entity, &mut Health, &mut LinearVelocity), With<Flyer>>,
    mut commands: Commands,
) {
    for event in collisions.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (hazard_entity, other) in pairs {
            if hazards.get(hazard_entity).is_err() {
                continue;
            }
            let Ok((entity, mut health, mut velocity)) = flyers.get_mut(other) else {
                continue;
            };
            if !health.kill() {
                continue;
            }
            velocity.y += 1.0;
            commands.entity(entity).insert(AngularVelocity(FRAC_PI_2));
            deaths.write(DeathEvent { entity });
        }
    }
}

/// Death: gravity returns, already-overlapping enemy colliders are
/// pre-emptively ignored, and the shared removal sequence takes over.
pub(crate) fn flyer_deaths(
    mut commands: Commands,
    mut deaths: MessageReader<DeathEvent>,
    mut defeats: MessageWriter<EnemyDefeatedEvent>,
    mut cues: MessageWriter<AudioCueEvent>,
    tuning: Res<FlyerTuning>,
    combat: Res<CombatTuning>,
    spatial: SpatialQuery,
    mut rng: ResMut<SessionRng>,
    mut ignored: ResMut<IgnoredPairs>,
    mut flyers: Query<(&Transform, &mut AnimationState), With<Flyer>>,
) {
    for event in deaths.read() {
        let Ok((transform, mut anim)) = flyers.get_mut(event.entity) else {
            continue;
        };

        anim.frozen = true;
        commands.entity(event.entity).insert((
            GravityScale(1.0),
            CollisionLayers::new(GameLayer::Enemy, [GameLayer::Ground]),
            Removal::new(combat.removal_wait),
        ));

        // Any enemy already overlapping the corpse would otherwise wedge
        // against it before its own contact event ever fires.
        let overlapping = spatial.shape_intersections(
            &Collider::circle(tuning.death_sweep_radius),
            transform.translation.truncate(),
            0.0,
            &SpatialQueryFilter::from_mask(GameLayer::Enemy),
        );
        for other in overlapping {
            if other != event.entity {
                ignored.insert(event.entity, other);
            }
        }

        let cue = DEATH_CUES[rng.0.random_range(0..DEATH_CUES.len())];
        cues.write(AudioCueEvent { cue });
        defeats.write(EnemyDefeatedEvent {
            entity: event.entity,
        });
        info!("Flyer {:?} down", event.entity);
    }
}
