//! Audio domain: ambient background sounds and per-screen music selection.

mod events;
mod resources;
mod systems;

use bevy::prelude::*;

pub use events::{AmbientSoundEvent, MusicTrackEvent};
pub use resources::{AmbientScheduler, MusicDirector, MusicMood};

use crate::core::GameState;
use systems::{
    init_audio, log_audio_requests, play_state_music, start_ambient, stop_ambient, tick_ambient,
};

pub struct AudioPlugin;

impl Plugin for AudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AmbientSoundEvent>()
            .add_message::<MusicTrackEvent>()
            .add_systems(Startup, init_audio)
            .add_systems(OnEnter(GameState::Gameplay), start_ambient)
            .add_systems(OnExit(GameState::Gameplay), stop_ambient)
            .add_systems(
                Update,
                (
                    tick_ambient.run_if(in_state(GameState::Gameplay)),
                    play_state_music.run_if(
                        state_changed::<GameState>.and(resource_exists::<MusicDirector>),
                    ),
                    log_audio_requests,
                )
                    .chain(),
            );
    }
}
