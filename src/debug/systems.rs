//! Debug domain: hotkeys and runtime inspection.

use bevy::prelude::*;

use crate::content::{GameplayTuning, vec2};
use crate::debug::state::{DebugState, toggle_label};
use crate::gameplay::Energy;
use crate::kinematics::{JumpController, KinematicBody, RunnerPolicy};
use crate::movement::Runner;

/// How far short of the getaway a warp lands.
const WARP_LEAD: f32 = 3.0;

/// F3 toggles kinematic logging; Ctrl combos for the rest.
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    tuning: Res<GameplayTuning>,
    mut debug_state: ResMut<DebugState>,
    mut energy: ResMut<Energy>,
    mut runner: Query<(&mut Transform, &mut KinematicBody), With<Runner>>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.log_kinematics = !debug_state.log_kinematics;
        info!(
            "[DEBUG] Kinematics logging {}",
            toggle_label(debug_state.log_kinematics)
        );
    }

    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return;
    }

    // Ctrl+I: Toggle invincibility
    if keyboard.just_pressed(KeyCode::KeyI) {
        debug_state.invincible = !debug_state.invincible;
        info!("[DEBUG] Invincibility {}", toggle_label(debug_state.invincible));
    }

    // Ctrl+H: Full energy
    if keyboard.just_pressed(KeyCode::KeyH) {
        energy.refill();
        info!("[DEBUG] Energy refilled");
    }

    // Ctrl+G: Warp next to the getaway vehicle
    if keyboard.just_pressed(KeyCode::KeyG) {
        let Ok((mut transform, mut body)) = runner.single_mut() else {
            return;
        };
        let getaway = &tuning.level.getaway;
        let destination = Vec2::new(
            getaway.center.0 - getaway.size.0 * 0.5 - WARP_LEAD,
            vec2(tuning.level.runner_spawn).y,
        );
        let mut position = transform.translation.truncate();
        body.teleport(&mut position, destination);
        transform.translation.x = position.x;
        transform.translation.y = position.y;
        info!("[DEBUG] Warped runner to {:?}", destination);
    }
}

pub(crate) fn apply_invincibility(debug_state: Res<DebugState>, mut energy: ResMut<Energy>) {
    if debug_state.invincible && energy.current() < energy.max {
        energy.refill();
    }
}

pub(crate) fn log_runner_kinematics(
    time: Res<Time>,
    runner: Query<(&Transform, &KinematicBody, &JumpController, &RunnerPolicy), With<Runner>>,
) {
    let Ok((transform, body, jump, policy)) = runner.single() else {
        return;
    };
    debug!(
        "[DEBUG] t={:.2} pos={:.3} vel={:.3} target={:.3} ground={} n={:.2} {:?} drive={:.2}",
        time.elapsed_secs(),
        transform.translation.truncate(),
        body.velocity,
        body.target_velocity,
        body.grounded,
        body.ground_normal,
        jump.state,
        policy.drive()
    );
}
