//! Audio domain: scheduling systems.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::audio::{AmbientScheduler, AmbientSoundEvent, MusicDirector, MusicMood, MusicTrackEvent};
use crate::content::GameplayTuning;
use crate::core::GameState;

pub(crate) fn init_audio(mut commands: Commands, tuning: Res<GameplayTuning>) {
    let seed = tuning.audio.seed.unwrap_or_else(rand::random);
    info!("Audio seed {}", seed);
    commands.insert_resource(AmbientScheduler::new(seed, &tuning.audio.ambient));
    commands.insert_resource(MusicDirector::new(seed.wrapping_add(1)));
}

pub(crate) fn start_ambient(mut scheduler: ResMut<AmbientScheduler>) {
    if scheduler.start() {
        debug!("Ambient sounds started, first in {:.1}s", scheduler.remaining());
    } else {
        debug!("No ambient sounds configured");
    }
}

pub(crate) fn stop_ambient(mut scheduler: ResMut<AmbientScheduler>) {
    if scheduler.is_active() {
        scheduler.stop();
        debug!("Ambient sounds stopped");
    }
}

pub(crate) fn tick_ambient(
    time: Res<Time>,
    mut scheduler: ResMut<AmbientScheduler>,
    mut sounds: MessageWriter<AmbientSoundEvent>,
) {
    let Some(sound) = scheduler.tick(time.delta_secs()) else {
        return;
    };
    debug!("Next ambient sound in {:.1}s", scheduler.remaining());
    sounds.write(AmbientSoundEvent { sound });
}

/// Pick a fresh track for the screen just entered.
pub(crate) fn play_state_music(
    state: Res<State<GameState>>,
    tuning: Res<GameplayTuning>,
    mut director: ResMut<MusicDirector>,
    mut tracks: MessageWriter<MusicTrackEvent>,
) {
    let mood = MusicMood::from(state.get());
    let playlist = mood.playlist(&tuning.audio.music);
    let Some(index) = director.pick(mood, playlist.len()) else {
        debug!("No {:?} music configured", mood);
        return;
    };

    tracks.write(MusicTrackEvent {
        mood,
        track: playlist[index].clone(),
    });
}

pub(crate) fn log_audio_requests(
    mut sounds: MessageReader<AmbientSoundEvent>,
    mut tracks: MessageReader<MusicTrackEvent>,
) {
    for event in sounds.read() {
        info!("Ambient sound: {}", event.sound);
    }
    for event in tracks.read() {
        info!("Music ({:?}): {}", event.mood, event.track);
    }
}
