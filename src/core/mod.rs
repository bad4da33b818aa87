//! Core domain: game state, run session, difficulty, and shared messages.

mod events;
mod resources;
mod state;
mod systems;

use bevy::prelude::*;

pub use events::{
    AudioCue, AudioCueEvent, EnergyChangedEvent, GameLostEvent, GameWonEvent, HazardDamageEvent,
    RunRestartedEvent, ScoreChangedEvent,
};
pub use resources::{Difficulty, RunSession};
pub use state::GameState;

use systems::{log_audio_cues, select_difficulty, setup_camera, start_gameplay};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<Difficulty>()
            .init_resource::<RunSession>()
            .add_message::<GameLostEvent>()
            .add_message::<GameWonEvent>()
            .add_message::<HazardDamageEvent>()
            .add_message::<EnergyChangedEvent>()
            .add_message::<ScoreChangedEvent>()
            .add_message::<RunRestartedEvent>()
            .add_message::<AudioCueEvent>()
            .add_systems(Startup, setup_camera)
            .add_systems(PostStartup, start_gameplay)
            .add_systems(Update, (select_difficulty, log_audio_cues));
    }
}
