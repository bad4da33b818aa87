//! Content domain: tests for tuning parsing, defaults, and validation.

use std::path::Path;

use super::{
    GameplayTuning, PickupKind, TUNING_PATH, load_tuning, parse_tuning, validate_tuning,
};
use crate::core::Difficulty;
use crate::kinematics::{DriveMode, JumpController, JumpTiming};

fn shipped_tuning_path() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(TUNING_PATH)
}

// -----------------------------------------------------------------------------
// Loading
// -----------------------------------------------------------------------------

#[test]
fn test_shipped_tuning_parses_and_validates() {
    let tuning = match load_tuning(&shipped_tuning_path()) {
        Ok(tuning) => tuning,
        Err(e) => panic!("{}", e),
    };

    assert!(validate_tuning(&tuning).is_empty());
    assert_eq!(tuning.runner.drive_mode, DriveMode::Endless);
    assert_eq!(tuning.difficulty.start, Difficulty::Easy);
    assert_eq!(tuning.traffic.models.len(), 4);
    assert!(!tuning.level.obstacles.is_empty());
}

#[test]
fn test_missing_file_error_names_the_file() {
    let result = load_tuning(Path::new("assets/data/does_not_exist.ron"));

    let Err(error) = result else {
        panic!("loading a missing file should fail");
    };
    assert_eq!(error.file, "assets/data/does_not_exist.ron");
    assert!(error.to_string().contains("does_not_exist.ron"));
    assert!(error.message.starts_with("IO error"));
}

#[test]
fn test_malformed_tuning_reports_parse_error() {
    let result = parse_tuning("broken.ron", "(physics: (gravity: \"down\"))");

    let Err(error) = result else {
        panic!("a string gravity should not parse");
    };
    assert_eq!(error.file, "broken.ron");
    assert!(error.message.starts_with("Parse error"));
}

#[test]
fn test_partial_tuning_fills_defaults() {
    let source = "(runner: (max_speed: 9.0), traffic: (seed: 7))";
    let tuning = match parse_tuning("partial.ron", source) {
        Ok(tuning) => tuning,
        Err(e) => panic!("{}", e),
    };

    assert_eq!(tuning.runner.max_speed, 9.0);
    assert_eq!(tuning.runner.take_off_speed, 7.0);
    assert_eq!(tuning.physics.gravity, -9.81);
    assert_eq!(tuning.traffic.seed, Some(7));
    assert_eq!(tuning.energy.max, 100.0);
}

#[test]
fn test_free_drive_jumps_immediately() {
    let tuning = match parse_tuning("free.ron", "(runner: (drive_mode: Free))") {
        Ok(tuning) => tuning,
        Err(e) => panic!("{}", e),
    };

    let controller = JumpController::new(tuning.runner.jump_timing());
    assert_eq!(controller.timing, JumpTiming::Immediate);
}

#[test]
fn test_endless_drive_gates_jump_on_air_time() {
    let tuning = GameplayTuning::default();

    let controller = JumpController::new(tuning.runner.jump_timing());
    assert_eq!(controller.timing, JumpTiming::AirTimeGated { min_air_time: 0.1 });
}

// -----------------------------------------------------------------------------
// Defaults
// -----------------------------------------------------------------------------

#[test]
fn test_difficulty_profiles_match_table() {
    let table = GameplayTuning::default().difficulty;

    let rows: Vec<(f32, f32, f32, (f32, f32))> = Difficulty::ALL
        .iter()
        .map(|&d| {
            let p = table.profile(d);
            (p.cop_speed, p.energy_drain, p.obstacle_damage, p.car_spawn_interval)
        })
        .collect();

    assert_eq!(
        rows,
        vec![
            (5.0, 1.5, 10.0, (3.0, 6.0)),
            (6.0, 2.0, 15.0, (3.0, 5.0)),
            (7.0, 3.0, 25.0, (2.0, 4.0)),
        ]
    );
}

#[test]
fn test_default_level_has_both_pickup_kinds() {
    let level = GameplayTuning::default().level;

    assert!(level.pickups.iter().any(|p| p.kind == PickupKind::Powerup));
    assert!(level.pickups.iter().any(|p| p.kind == PickupKind::Loot));
    assert!(!level.cop_spawns.is_empty());
}

// -----------------------------------------------------------------------------
// Validation
// -----------------------------------------------------------------------------

#[test]
fn test_default_tuning_is_valid() {
    assert!(validate_tuning(&GameplayTuning::default()).is_empty());
}

#[test]
fn test_validation_flags_inverted_spawn_interval() {
    let mut tuning = GameplayTuning::default();
    tuning.difficulty.hard.car_spawn_interval = (5.0, 2.0);

    let errors = validate_tuning(&tuning);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].section, "difficulty");
    assert_eq!(errors[0].field, "hard.car_spawn_interval");
}

#[test]
fn test_validation_flags_short_escape() {
    let mut tuning = GameplayTuning::default();
    tuning.escape.total_duration = 2.5;

    let errors = validate_tuning(&tuning);

    assert!(errors.iter().any(|e| e.section == "escape"));
}

#[test]
fn test_validation_flags_empty_car_models() {
    let mut tuning = GameplayTuning::default();
    tuning.traffic.models.clear();

    let errors = validate_tuning(&tuning);

    assert_eq!(errors.len(), 1);
    assert!(errors[0].to_string().starts_with("traffic.models"));
}
