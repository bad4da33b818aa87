//! Movement domain: bevy/avian glue around the kinematic core.

mod bootstrap;
mod cast;
mod components;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use components::{CameraFocus, Cop, GameLayer, Ground, Obstacle, Runner, SpawnPoint};
pub use resources::RunnerInput;

pub(crate) use bootstrap::{RUNNER_COLOR, block_sprite};

use crate::kinematics::{CopPolicy, RunnerPolicy};
use bootstrap::{spawn_actors, spawn_level};
use systems::{
    advance_jump_states, apply_jump_velocity, clear_input_edges, compute_target_velocities,
    follow_focus, integrate_bodies, read_input, steer_runner,
};

/// Ordering label for the per-tick movement chain.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MovementSet;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RunnerInput>()
            .add_systems(Startup, (spawn_level, spawn_actors))
            .add_systems(Update, (read_input, follow_focus))
            .add_systems(
                FixedUpdate,
                (
                    steer_runner,
                    advance_jump_states,
                    apply_jump_velocity,
                    compute_target_velocities::<RunnerPolicy>,
                    compute_target_velocities::<CopPolicy>,
                    integrate_bodies,
                    clear_input_edges,
                )
                    .chain()
                    .in_set(MovementSet),
            );
    }
}
