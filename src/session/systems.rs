//! Session domain: death bookkeeping, respawn flow and tallies.

use avian2d::prelude::*;
use bevy::camera::ScalingMode;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::{DeathEvent, Health, Invulnerable};
use crate::movement::{MovementState, MovementTuning, Player, PLAYER_MAX_HEALTH};
use crate::session::events::{AudioCueEvent, CoinCollectedEvent, EnemyDefeatedEvent, LevelCompleteEvent};
use crate::session::resources::{GameSession, RespawnDecision};
use crate::session::state::GameState;

/// Vertical world extent the camera shows, in meters.
const VIEW_HEIGHT: f32 = 12.0;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::from(OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: VIEW_HEIGHT,
            },
            ..OrthographicProjection::default_2d()
        }),
    ));
}

pub(crate) fn follow_player(
    player: Query<&Transform, (With<Player>, Without<Camera2d>)>,
    mut camera: Query<&mut Transform, With<Camera2d>>,
) {
    let Ok(target) = player.single() else {
        return;
    };
    for mut transform in &mut camera {
        transform.translation.x = target.translation.x;
        transform.translation.y = target.translation.y;
    }
}

/// Burns a life when the player dies and starts the respawn delay.
pub(crate) fn handle_player_death(
    mut deaths: MessageReader<DeathEvent>,
    mut cues: MessageWriter<AudioCueEvent>,
    mut session: ResMut<GameSession>,
    player: Query<(), With<Player>>,
) {
    for event in deaths.read() {
        if player.get(event.entity).is_err() {
            continue;
        }
        session.note_player_death();
        cues.write(AudioCueEvent { cue: "player_death" });
        info!("Player died, {} lives remain", session.lives);
    }
}

/// Advances the respawn delay, then either resets the player at the last
/// checkpoint or ends the session.
pub(crate) fn tick_respawn(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut session: ResMut<GameSession>,
    mut next_state: ResMut<NextState<GameState>>,
    mut player: Query<
        (
            &mut Transform,
            &mut LinearVelocity,
            &mut Health,
            &mut Invulnerable,
            &mut MovementState,
            &mut Sprite,
        ),
        With<Player>,
    >,
) {
    let decision = session.tick_respawn(time.delta_secs());
    match decision {
        None => {}
        Some(RespawnDecision::GameOver) => {
            info!("Out of lives, game over");
            next_state.set(GameState::GameOver);
        }
        Some(RespawnDecision::Respawn) => {
            let Ok((mut transform, mut velocity, mut health, mut invuln, mut state, mut sprite)) =
                player.single_mut()
            else {
                return;
            };
            transform.translation = session.checkpoint.extend(transform.translation.z);
            velocity.0 = Vec2::ZERO;
            *health = Health::new(PLAYER_MAX_HEALTH);
            *state = MovementState::new(&tuning);
            sprite.color.set_alpha(1.0);
            // A fresh invincibility window covers the respawn.
            invuln.arm();
            info!("Respawned at checkpoint {:?}", session.checkpoint);
        }
    }
}

pub(crate) fn tally_coins(
    mut coins: MessageReader<CoinCollectedEvent>,
    mut session: ResMut<GameSession>,
) {
    for event in coins.read() {
        session.add_coins(event.value);
        debug!("Coins: {}", session.coins);
    }
}

pub(crate) fn tally_enemy_defeats(
    mut defeats: MessageReader<EnemyDefeatedEvent>,
    mut session: ResMut<GameSession>,
) {
    for event in defeats.read() {
        session.report_enemy_defeated();
        debug!("Enemy {:?} defeated, total {}", event.entity, session.enemies_defeated);
    }
}

pub(crate) fn handle_level_complete(
    mut completions: MessageReader<LevelCompleteEvent>,
    mut cues: MessageWriter<AudioCueEvent>,
    session: Res<GameSession>,
) {
    for _ in completions.read() {
        cues.write(AudioCueEvent { cue: "level_complete" });
        info!(
            "Level complete: {} coins, {} enemies defeated",
            session.coins, session.enemies_defeated
        );
    }
}

/// Drains audio cues so unconsumed messages do not pile up; a real audio
/// layer would subscribe here instead.
pub(crate) fn drain_audio_cues(mut cues: MessageReader<AudioCueEvent>) {
    for event in cues.read() {
        debug!("Audio cue: {}", event.cue);
    }
}
