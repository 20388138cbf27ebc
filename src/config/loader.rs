//! Loader for the RON tuning file at startup.

use ron::Options;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::combat::CombatTuning;
use crate::enemies::{FlyerTuning, WalkerTuning};
use crate::movement::MovementTuning;
use crate::projectiles::ProjectileTuning;
use crate::session::SessionConfig;

/// Error type for tuning loading failures.
#[derive(Debug)]
pub struct TuningLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for TuningLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// One optional section per tunable domain; omitted sections keep their
/// compiled-in defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TuningFile {
    pub movement: Option<MovementTuning>,
    pub combat: Option<CombatTuning>,
    pub walker: Option<WalkerTuning>,
    pub flyer: Option<FlyerTuning>,
    pub projectiles: Option<ProjectileTuning>,
    pub session: Option<SessionConfig>,
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

pub(crate) fn parse_tuning(contents: &str, file: &str) -> Result<TuningFile, TuningLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| TuningLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

pub(crate) fn load_tuning_file(path: &Path) -> Result<TuningFile, TuningLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| TuningLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;
    parse_tuning(&contents, &file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_overrides_only_named_sections() {
        let source = r#"
            (
                movement: (
                    move_speed: 10.0,
                    jump_speed: 16.0,
                ),
                walker: (
                    move_speed: 3.0,
                ),
            )
        "#;

        let file = parse_tuning(source, "tuning.ron").unwrap();

        let movement = file.movement.unwrap();
        assert_eq!(movement.move_speed, 10.0);
        assert_eq!(movement.jump_speed, 16.0);
        // Unnamed fields within a section fall back to defaults.
        assert_eq!(movement.gravity, MovementTuning::default().gravity);

        assert_eq!(file.walker.unwrap().move_speed, 3.0);
        assert!(file.combat.is_none());
        assert!(file.flyer.is_none());
        assert!(file.projectiles.is_none());
    }

    #[test]
    fn test_malformed_file_reports_parse_error() {
        let err = parse_tuning("(movement: (move_speed: \"fast\"))", "tuning.ron").unwrap_err();
        assert_eq!(err.file, "tuning.ron");
        assert!(err.message.contains("Parse error"));
    }
}
