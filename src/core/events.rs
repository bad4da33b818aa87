//! Core domain: messages shared across gameplay, movement, and traffic.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Request to end the run as a loss. Ignored outside gameplay.
#[derive(Debug)]
pub struct GameLostEvent {
    pub reason: String,
}

impl Message for GameLostEvent {}

/// The escape sequence finished. Ignored outside gameplay.
#[derive(Debug)]
pub struct GameWonEvent;

impl Message for GameWonEvent {}

/// A hazard hit the runner while its damage cooldown was ready.
#[derive(Debug)]
pub struct HazardDamageEvent {
    pub target: Entity,
    pub hazard: Entity,
    pub damage: f32,
}

impl Message for HazardDamageEvent {}

#[derive(Debug)]
pub struct EnergyChangedEvent {
    pub current: f32,
    pub max: f32,
}

impl Message for EnergyChangedEvent {}

#[derive(Debug)]
pub struct ScoreChangedEvent {
    pub score: u32,
}

impl Message for ScoreChangedEvent {}

/// A new attempt started from an end screen.
#[derive(Debug)]
pub struct RunRestartedEvent {
    pub attempt: u32,
}

impl Message for RunRestartedEvent {}

/// Named sound cues. Playback is left to whoever listens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    Jump,
    Ouch,
    Collect,
    CarHonk,
    PoliceSiren,
    GameOver,
    Victory,
    EngineStart,
}

impl AudioCue {
    pub fn name(self) -> &'static str {
        match self {
            AudioCue::Jump => "jump",
            AudioCue::Ouch => "ouch",
            AudioCue::Collect => "collect",
            AudioCue::CarHonk => "car_honk",
            AudioCue::PoliceSiren => "police_siren",
            AudioCue::GameOver => "game_over",
            AudioCue::Victory => "victory",
            AudioCue::EngineStart => "engine_start",
        }
    }
}

#[derive(Debug)]
pub struct AudioCueEvent {
    pub cue: AudioCue,
}

impl Message for AudioCueEvent {}
