//! Core domain: run flow systems and setup.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::events::AudioCueEvent;
use crate::core::resources::Difficulty;
use crate::core::state::GameState;

/// World units per screen pixel at the default window size.
const CAMERA_SCALE: f32 = 1.0 / 48.0;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        }),
    ));
}

pub(crate) fn start_gameplay(mut game_state: ResMut<NextState<GameState>>) {
    game_state.set(GameState::Gameplay);
}

/// Number keys 1-3 pick the difficulty.
pub(crate) fn select_difficulty(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut difficulty: ResMut<Difficulty>,
) {
    let picked = [KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3]
        .into_iter()
        .position(|key| keyboard.just_pressed(key));

    if let Some(index) = picked {
        let next = Difficulty::from_index(index);
        if difficulty.set_if_neq(next) {
            info!("Difficulty set to {:?}", next);
        }
    }
}

pub(crate) fn log_audio_cues(mut cues: MessageReader<AudioCueEvent>) {
    for event in cues.read() {
        debug!("Audio cue: {}", event.cue.name());
    }
}
