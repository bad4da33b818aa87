//! Gameplay domain: energy, score, pickups, the chase, and the getaway.

mod components;
mod escape;
mod resources;
mod spawn;
mod systems;

use bevy::prelude::*;

pub use components::{Checkpoint, GetawayVehicle, LevelProp, Pickup};
pub use escape::{EscapePhase, EscapeSequence};
pub use resources::{Energy, EnergyStatus, RunnerContacts, Score};

use crate::core::{Difficulty, GameState};
use crate::movement::MovementSet;
use spawn::{init_energy, spawn_props_on_startup};
use systems::{
    advance_escape, apply_difficulty, apply_hazard_damage, check_energy_depleted,
    collect_pickups, detect_capture, drain_energy, handle_game_lost, handle_game_won,
    reach_checkpoints, reach_getaway, respawn_props, restart_run, sense_runner_contacts,
    show_energy_status,
};

pub struct GameplayPlugin;

impl Plugin for GameplayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Score>()
            .init_resource::<RunnerContacts>()
            .add_systems(Startup, (init_energy, spawn_props_on_startup))
            .add_systems(
                FixedUpdate,
                (
                    sense_runner_contacts,
                    apply_hazard_damage,
                    drain_energy,
                    collect_pickups,
                    reach_checkpoints,
                    reach_getaway,
                    detect_capture,
                    check_energy_depleted,
                    advance_escape,
                )
                    .chain()
                    .after(MovementSet)
                    .run_if(in_state(GameState::Gameplay)),
            )
            .add_systems(
                Update,
                (
                    handle_game_lost,
                    handle_game_won,
                    (restart_run, respawn_props)
                        .chain()
                        .run_if(|state: Res<State<GameState>>| state.get().is_finished()),
                    apply_difficulty.run_if(resource_changed::<Difficulty>),
                    show_energy_status.run_if(resource_exists_and_changed::<Energy>),
                ),
            );
    }
}
