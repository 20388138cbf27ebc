//! World domain: fixture interactions.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::{apply_damage, Health, Invulnerable};
use crate::movement::{Gear, MovementInput, MovementState, Player};
use crate::session::{AudioCueEvent, CoinCollectedEvent, GameSession, LevelCompleteEvent};
use crate::world::components::{
    BouncePad, BounceResponse, BowPickup, Checkpoint, Coin, LadderTop, LevelExit, Potion,
};

pub(crate) fn bounce_pads(
    mut collisions: MessageReader<CollisionStart>,
    mut cues: MessageWriter<AudioCueEvent>,
    input: Res<MovementInput>,
    pads: Query<(&BouncePad, &Transform)>,
    mut player: Query<
        (
            &Transform,
            &mut LinearVelocity,
            &mut MovementState,
            &mut Health,
            &mut Invulnerable,
        ),
        With<Player>,
    >,
) {
    for event in collisions.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (pad_entity, other) in pairs {
            let Ok((pad, pad_transform)) = pads.get(pad_entity) else {
                continue;
            };
            let Ok((transform, mut velocity, mut state, mut health, mut invuln)) =
                player.get_mut(other)
            else {
                continue;
            };

            let contact =
                pad_transform.translation.truncate() - transform.translation.truncate();
            match pad.respond(contact, input.jump_held) {
                BounceResponse::Launch(vy) => {
                    // The pad owns the arc now; a held jump must not add
                    // short-hop shaping on top.
                    state.cancel_jump();
                    velocity.y = vy;
                    cues.write(AudioCueEvent { cue: "bounce" });
                }
                BounceResponse::Fling(push) => {
                    velocity.x += push.x;
                    velocity.y += push.y;
                    // Zero-damage hit: engages the hurt gate so input
                    // cannot cancel the fling, without costing health.
                    if apply_damage(&mut health, &mut invuln, 0.0).accepted() {
                        state.note_damaged();
                    }
                }
            }
        }
    }
}

/// The ladder lid is solid except while the player is climbing or falling
/// past it after a drop-jump.
pub(crate) fn ladder_tops(
    mut commands: Commands,
    player: Query<&MovementState, With<Player>>,
    tops: Query<(Entity, Has<ColliderDisabled>), With<LadderTop>>,
) {
    let Ok(state) = player.single() else {
        return;
    };
    let pass_through = state.climbing || state.release_lock;

    for (entity, disabled) in &tops {
        if pass_through && !disabled {
            commands.entity(entity).insert(ColliderDisabled);
        } else if !pass_through && disabled {
            commands.entity(entity).remove::<ColliderDisabled>();
        }
    }
}

pub(crate) fn checkpoints(
    mut collisions: MessageReader<CollisionStart>,
    mut cues: MessageWriter<AudioCueEvent>,
    mut session: ResMut<GameSession>,
    mut markers: Query<(&mut Checkpoint, &Transform)>,
    player: Query<(), With<Player>>,
) {
    for event in collisions.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (marker_entity, other) in pairs {
            let Ok((mut checkpoint, transform)) = markers.get_mut(marker_entity) else {
                continue;
            };
            if checkpoint.activated || player.get(other).is_err() {
                continue;
            }
            checkpoint.activated = true;
            session.set_checkpoint(transform.translation.truncate());
            cues.write(AudioCueEvent { cue: "checkpoint" });
            info!("Checkpoint set at {:?}", transform.translation.truncate());
        }
    }
}

pub(crate) fn pickups(
    mut commands: Commands,
    mut collisions: MessageReader<CollisionStart>,
    mut coins_collected: MessageWriter<CoinCollectedEvent>,
    mut cues: MessageWriter<AudioCueEvent>,
    coins: Query<&Coin>,
    potions: Query<&Potion>,
    bows: Query<(), With<BowPickup>>,
    mut player: Query<(&mut Health, &mut Gear), With<Player>>,
) {
    for event in collisions.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (pickup, other) in pairs {
            let Ok((mut health, mut gear)) = player.get_mut(other) else {
                continue;
            };

            if let Ok(coin) = coins.get(pickup) {
                coins_collected.write(CoinCollectedEvent { value: coin.value });
                cues.write(AudioCueEvent { cue: "coin" });
                commands.entity(pickup).despawn();
            } else if let Ok(potion) = potions.get(pickup) {
                // Stays in the world when the player is already full.
                if health.take_health(potion.heal) {
                    cues.write(AudioCueEvent { cue: "potion" });
                    commands.entity(pickup).despawn();
                }
            } else if bows.get(pickup).is_ok() {
                if gear.acquire_bow() {
                    cues.write(AudioCueEvent { cue: "bow_pickup" });
                    commands.entity(pickup).despawn();
                }
            }
        }
    }
}

pub(crate) fn level_exits(
    mut commands: Commands,
    mut collisions: MessageReader<CollisionStart>,
    mut completions: MessageWriter<LevelCompleteEvent>,
    exits: Query<(), With<LevelExit>>,
    player: Query<(), With<Player>>,
) {
    for event in collisions.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (exit, other) in pairs {
            if exits.get(exit).is_err() || player.get(other).is_err() {
                continue;
            }
            completions.write(LevelCompleteEvent);
            commands.entity(exit).despawn();
        }
    }
}
