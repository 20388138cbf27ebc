//! World domain: demo level layout.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::Hazard;
use crate::enemies::{spawn_flyer, spawn_walker, FlyerTuning, WalkerTuning};
use crate::movement::GameLayer;
use crate::session::SessionRng;
use crate::world::components::{BouncePad, BowPickup, Checkpoint, Coin, LadderTop, LevelExit, Potion};

fn platform(commands: &mut Commands, center: Vec2, size: Vec2) {
    commands.spawn((
        Sprite {
            color: Color::srgb(0.35, 0.3, 0.25),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(center.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(
            GameLayer::Ground,
            [GameLayer::Player, GameLayer::Enemy, GameLayer::Projectile],
        ),
    ));
}

fn trigger(commands: &mut Commands, center: Vec2, size: Vec2, color: Color) -> Entity {
    commands
        .spawn((
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
        ))
        .id()
}

pub(crate) fn spawn_level(
    mut commands: Commands,
    walker_tuning: Res<WalkerTuning>,
    flyer_tuning: Res<FlyerTuning>,
    mut rng: ResMut<SessionRng>,
) {
    // Two floor slabs with a hazard-filled gap between them.
    platform(&mut commands, Vec2::new(-2.5, -0.5), Vec2::new(11.0, 1.0));
    platform(&mut commands, Vec2::new(10.5, -0.5), Vec2::new(11.0, 1.0));
    platform(&mut commands, Vec2::new(-8.5, 2.0), Vec2::new(1.0, 6.0));
    platform(&mut commands, Vec2::new(16.5, 2.0), Vec2::new(1.0, 6.0));
    platform(&mut commands, Vec2::new(8.0, 2.5), Vec2::new(4.0, 0.4));

    commands.spawn((
        Hazard { damage: 25.0 },
        Sprite {
            color: Color::srgb(0.2, 0.7, 0.3),
            custom_size: Some(Vec2::new(2.0, 0.6)),
            ..default()
        },
        Transform::from_xyz(4.0, -0.7, 0.0),
        RigidBody::Static,
        Collider::rectangle(2.0, 0.6),
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Hazard, [GameLayer::Player, GameLayer::Enemy]),
    ));

    commands.spawn((
        BouncePad::default(),
        Sprite {
            color: Color::srgb(0.9, 0.6, 0.2),
            custom_size: Some(Vec2::new(1.4, 0.5)),
            ..default()
        },
        Transform::from_xyz(-6.0, 0.25, 0.0),
        RigidBody::Static,
        Collider::rectangle(1.4, 0.5),
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
    ));

    // Ladder up to a small ledge, with a pass-through lid.
    commands.spawn((
        Sprite {
            color: Color::srgba(0.6, 0.5, 0.3, 0.6),
            custom_size: Some(Vec2::new(0.8, 3.4)),
            ..default()
        },
        Transform::from_xyz(13.0, 1.5, 0.0),
        RigidBody::Static,
        Collider::rectangle(0.8, 3.4),
        Sensor,
        CollisionLayers::new(GameLayer::Ladder, [GameLayer::Player]),
    ));
    commands.spawn((
        LadderTop,
        Sprite {
            color: Color::srgb(0.45, 0.4, 0.3),
            custom_size: Some(Vec2::new(1.6, 0.3)),
            ..default()
        },
        Transform::from_xyz(13.0, 3.2, 0.0),
        RigidBody::Static,
        Collider::rectangle(1.6, 0.3),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
    ));

    for x in [0.0, 1.0, 2.0] {
        let coin = trigger(
            &mut commands,
            Vec2::new(x, 1.0),
            Vec2::splat(0.4),
            Color::srgb(0.95, 0.85, 0.2),
        );
        commands.entity(coin).insert(Coin { value: 1 });
    }

    let potion = trigger(
        &mut commands,
        Vec2::new(6.0, 0.8),
        Vec2::new(0.4, 0.6),
        Color::srgb(0.85, 0.2, 0.4),
    );
    commands.entity(potion).insert(Potion { heal: 30.0 });

    let bow = trigger(
        &mut commands,
        Vec2::new(-3.0, 0.8),
        Vec2::new(0.7, 0.7),
        Color::srgb(0.6, 0.4, 0.2),
    );
    commands.entity(bow).insert(BowPickup);

    let checkpoint = trigger(
        &mut commands,
        Vec2::new(7.0, 1.0),
        Vec2::new(0.5, 1.5),
        Color::srgba(0.4, 0.8, 0.9, 0.5),
    );
    commands.entity(checkpoint).insert(Checkpoint::default());

    let exit = trigger(
        &mut commands,
        Vec2::new(15.5, 1.0),
        Vec2::new(0.8, 2.0),
        Color::srgba(0.9, 0.9, 0.9, 0.4),
    );
    commands.entity(exit).insert(LevelExit);

    spawn_walker(&mut commands, &walker_tuning, Vec2::new(9.0, 0.7));
    spawn_flyer(&mut commands, &flyer_tuning, Vec2::new(12.0, 4.5), &mut rng.0);

    info!("Level spawned");
}
