//! Config: RON tuning overrides applied before the other plugins
//! initialize their resources.

mod loader;

use bevy::prelude::*;
use std::path::Path;

pub use loader::{TuningFile, TuningLoadError};

const TUNING_PATH: &str = "assets/data/tuning.ron";

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        // Inserted during build so later `init_resource` calls in the
        // gameplay plugins see the overridden values and keep them.
        let path = Path::new(TUNING_PATH);
        if !path.exists() {
            info!("No tuning file at {}, using defaults", TUNING_PATH);
            return;
        }
        match loader::load_tuning_file(path) {
            Ok(file) => apply(app, file),
            Err(e) => {
                // Fail soft: a broken tuning file falls back to defaults.
                error!("{}", e);
            }
        }
    }
}

fn apply(app: &mut App, file: TuningFile) {
    if let Some(movement) = file.movement {
        app.insert_resource(movement);
    }
    if let Some(combat) = file.combat {
        app.insert_resource(combat);
    }
    if let Some(walker) = file.walker {
        app.insert_resource(walker);
    }
    if let Some(flyer) = file.flyer {
        app.insert_resource(flyer);
    }
    if let Some(projectiles) = file.projectiles {
        app.insert_resource(projectiles);
    }
    if let Some(session) = file.session {
        app.insert_resource(session);
    }
    info!("Tuning overrides applied from {}", TUNING_PATH);
}
