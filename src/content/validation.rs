//! Sanity checks for loaded tuning values.

use super::data::{DifficultyProfile, GameplayTuning};
use crate::core::Difficulty;

/// A value outside the range the game can run with.
#[derive(Debug)]
pub struct ValidationError {
    pub section: &'static str,
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.section, self.field, self.message)
    }
}

/// Helper macro for pushing an error when a condition fails
macro_rules! check {
    ($errors:expr, $cond:expr, $section:expr, $field:expr, $message:expr) => {
        if !$cond {
            $errors.push(ValidationError {
                section: $section,
                field: $field.to_string(),
                message: $message.to_string(),
            });
        }
    };
}

/// Validate the tuning. Returns a list of errors, empty if everything is usable.
pub fn validate_tuning(tuning: &GameplayTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let physics = &tuning.physics;
    check!(errors, physics.shell_radius >= 0.0, "physics", "shell_radius", "must not be negative");
    check!(
        errors,
        physics.min_move_distance >= 0.0,
        "physics",
        "min_move_distance",
        "must not be negative"
    );
    check!(
        errors,
        (0.0..1.0).contains(&physics.min_ground_normal_y),
        "physics",
        "min_ground_normal_y",
        "must be in [0, 1)"
    );
    check!(errors, physics.tick_hz > 0.0, "physics", "tick_hz", "must be positive");

    let runner = &tuning.runner;
    check!(errors, runner.max_speed > 0.0, "runner", "max_speed", "must be positive");
    check!(
        errors,
        (0.0..=1.0).contains(&runner.jump_deceleration),
        "runner",
        "jump_deceleration",
        "must be in [0, 1]"
    );
    check!(
        errors,
        runner.damage_cooldown >= 0.0,
        "runner",
        "damage_cooldown",
        "must not be negative"
    );

    let energy = &tuning.energy;
    check!(errors, energy.max > 0.0, "energy", "max", "must be positive");
    check!(
        errors,
        energy.critical_fraction <= energy.warning_fraction,
        "energy",
        "critical_fraction",
        "must not exceed warning_fraction"
    );

    for difficulty in Difficulty::ALL {
        validate_profile(&mut errors, difficulty, tuning.difficulty.profile(difficulty));
    }

    let traffic = &tuning.traffic;
    check!(
        errors,
        (0.0..=1.0).contains(&traffic.right_direction_chance),
        "traffic",
        "right_direction_chance",
        "must be a probability"
    );
    check!(errors, traffic.honk_every > 0, "traffic", "honk_every", "must be at least 1");
    check!(
        errors,
        !traffic.models.is_empty(),
        "traffic",
        "models",
        "needs at least one car model"
    );

    let escape = &tuning.escape;
    check!(
        errors,
        escape.total_duration >= escape.start_delay + escape.acceleration_time,
        "escape",
        "total_duration",
        "must cover start_delay plus acceleration_time"
    );

    let ambient = &tuning.audio.ambient;
    check!(
        errors,
        ambient.first_delay >= 0.0,
        "audio",
        "ambient.first_delay",
        "must not be negative"
    );
    let (min, max) = ambient.interval;
    check!(
        errors,
        min > 0.0 && min <= max,
        "audio",
        "ambient.interval",
        "needs 0 < min <= max"
    );

    errors
}

fn validate_profile(
    errors: &mut Vec<ValidationError>,
    difficulty: Difficulty,
    profile: &DifficultyProfile,
) {
    let field = |name: &str| format!("{:?}.{}", difficulty, name).to_lowercase();
    let (min, max) = profile.car_spawn_interval;

    check!(
        errors,
        profile.cop_speed >= 0.0,
        "difficulty",
        field("cop_speed"),
        "must not be negative"
    );
    check!(
        errors,
        profile.energy_drain >= 0.0,
        "difficulty",
        field("energy_drain"),
        "must not be negative"
    );
    check!(
        errors,
        min > 0.0 && min <= max,
        "difficulty",
        field("car_spawn_interval"),
        "needs 0 < min <= max"
    );
}
