//! Movement domain: input sampling for the runner.

use bevy::prelude::*;

use crate::movement::RunnerInput;

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<RunnerInput>) {
    let left = keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft);
    let right = keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight);

    // Endless mode reads left as brake and right as boost
    input.brake_held = left;
    input.boost_held = right;
    input.axis = match (left, right) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    };

    let jump_keys = [KeyCode::Space, KeyCode::KeyW, KeyCode::ArrowUp];
    input.jump_just_pressed |= keyboard.any_just_pressed(jump_keys);
    input.jump_just_released |= keyboard.any_just_released(jump_keys);
}

/// Drop edges the fixed tick has consumed.
pub(crate) fn clear_input_edges(mut input: ResMut<RunnerInput>) {
    input.clear_edges();
}
