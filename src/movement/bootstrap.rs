//! Movement domain: player bootstrap.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{CombatTuning, Health, Invulnerable};
use crate::movement::{AnimationState, GameLayer, Gear, MovementState, MovementTuning, Player};

pub(crate) const PLAYER_SIZE: Vec2 = Vec2::new(0.7, 1.6);
pub const PLAYER_MAX_HEALTH: f32 = 100.0;

pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    combat_tuning: Res<CombatTuning>,
    existing: Query<Entity, With<Player>>,
) {
    if !existing.is_empty() {
        return;
    }

    debug_assert!(tuning.jump_speed > 0.0 && tuning.gravity > 0.0);
    info!("Spawning player, max_health={}", PLAYER_MAX_HEALTH);

    commands.spawn((
        (
            Player,
            MovementState::new(&tuning),
            Gear::default(),
            AnimationState::new("PlayerIdle"),
        ),
        (
            Health::new(PLAYER_MAX_HEALTH),
            Invulnerable::new(combat_tuning.invincible_time),
        ),
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, 2.0, 0.0),
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            // Gravity is applied manually by the movement systems.
            GravityScale(0.0),
            Friction::new(0.0),
            CollisionEventsEnabled,
            ActiveCollisionHooks::FILTER_PAIRS,
            CollisionLayers::new(
                GameLayer::Player,
                [
                    GameLayer::Ground,
                    GameLayer::Hazard,
                    GameLayer::Sensor,
                    GameLayer::EnemyZone,
                ],
            ),
        ),
    ));
}
