mod combat;
mod config;
mod enemies;
mod movement;
mod projectiles;
mod session;
mod timing;
mod world;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Caverun".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default().with_collision_hooks::<combat::CorpseHooks>())
        .add_plugins((
            config::ConfigPlugin,
            session::SessionPlugin,
            movement::MovementPlugin,
            combat::CombatPlugin,
            enemies::EnemiesPlugin,
            projectiles::ProjectilesPlugin,
            world::WorldPlugin,
        ))
        .run();
}
