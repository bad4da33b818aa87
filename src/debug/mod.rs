//! Debug tooling for fast iteration, behind the `dev-tools` feature.
//!
//! Hotkeys:
//! - F3: log runner kinematics each fixed tick
//! - Ctrl+I: toggle invincibility
//! - Ctrl+H: refill energy
//! - Ctrl+G: warp next to the getaway vehicle

mod state;
mod systems;

use bevy::prelude::*;

pub use state::DebugState;

use crate::movement::MovementSet;
use systems::{apply_invincibility, handle_debug_hotkeys, log_runner_kinematics};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (handle_debug_hotkeys, apply_invincibility).chain())
            .add_systems(
                FixedUpdate,
                log_runner_kinematics
                    .after(MovementSet)
                    .run_if(|state: Res<DebugState>| state.log_kinematics),
            );
    }
}
