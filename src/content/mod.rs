//! Content domain: data-driven tuning loaded from RON at startup.

mod data;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

use avian2d::prelude::*;
use bevy::prelude::*;
use std::path::Path;

pub use data::{
    AmbientTuning, AudioTuning, BlockDef, CarModelDef, CheckpointDef, CopTuning,
    DifficultyProfile, DifficultyTable, EnergyTuning, EscapeTuning, GameplayTuning, LevelLayout,
    MusicTuning, PhysicsTuning, PickupDef, PickupKind, RunnerTuning, TrafficTuning, vec2,
};
pub use loader::{ContentLoadError, TUNING_PATH, load_tuning, parse_tuning};
pub use validation::{ValidationError, validate_tuning};

use crate::kinematics::{HazardSettings, Integrator};

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_content);
    }
}

/// Load the tuning file and publish the resources derived from it.
fn load_content(mut commands: Commands, mut fixed_time: ResMut<Time<Fixed>>) {
    let tuning = match load_tuning(Path::new(TUNING_PATH)) {
        Ok(tuning) => {
            info!("Loaded gameplay tuning from {}", TUNING_PATH);
            tuning
        }
        Err(e) => {
            warn!("{}; using built-in defaults", e);
            GameplayTuning::default()
        }
    };

    let errors = validate_tuning(&tuning);
    let tuning = if errors.is_empty() {
        tuning
    } else {
        for error in &errors {
            warn!("Invalid tuning: {}", error);
        }
        warn!("Tuning rejected with {} error(s); using built-in defaults", errors.len());
        GameplayTuning::default()
    };

    let physics = &tuning.physics;
    fixed_time.set_timestep_hz(physics.tick_hz);
    commands.insert_resource(Gravity(Vec2::new(0.0, physics.gravity)));
    commands.insert_resource(Integrator {
        shell_radius: physics.shell_radius,
        min_move_distance: physics.min_move_distance,
    });

    let start = tuning.difficulty.start;
    commands.insert_resource(HazardSettings {
        damage: tuning.difficulty.profile(start).obstacle_damage,
        ..default()
    });
    commands.insert_resource(start);

    debug!(
        "Tuning: gravity={}, tick_hz={}, difficulty={:?}, obstacles={}, pickups={}",
        physics.gravity,
        physics.tick_hz,
        start,
        tuning.level.obstacles.len(),
        tuning.level.pickups.len()
    );

    commands.insert_resource(tuning);
}
