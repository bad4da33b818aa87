//! Audio domain: playback requests. Whatever owns the speakers listens for these.

use bevy::ecs::message::Message;

use crate::audio::MusicMood;

/// A background one-shot is due.
#[derive(Debug)]
pub struct AmbientSoundEvent {
    pub sound: String,
}

impl Message for AmbientSoundEvent {}

/// Switch the looping background track.
#[derive(Debug)]
pub struct MusicTrackEvent {
    pub mood: MusicMood,
    pub track: String,
}

impl Message for MusicTrackEvent {}
