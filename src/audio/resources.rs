//! Audio domain: ambient cue scheduling and music track selection.

use std::collections::HashMap;

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::content::{AmbientTuning, MusicTuning};
use crate::core::GameState;

/// Which track list plays on a given screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MusicMood {
    Menu,
    Gameplay,
    GameOver,
    Victory,
}

impl MusicMood {
    pub fn playlist(self, music: &MusicTuning) -> &[String] {
        match self {
            MusicMood::Menu => &music.menu,
            MusicMood::Gameplay => &music.gameplay,
            MusicMood::GameOver => &music.game_over,
            MusicMood::Victory => &music.victory,
        }
    }
}

impl From<&GameState> for MusicMood {
    fn from(state: &GameState) -> Self {
        match state {
            GameState::Boot => MusicMood::Menu,
            GameState::Gameplay => MusicMood::Gameplay,
            GameState::GameOver => MusicMood::GameOver,
            GameState::LevelComplete => MusicMood::Victory,
        }
    }
}

/// Plays a random opener shortly after gameplay starts, then cycles the
/// regular sounds at random intervals until stopped.
#[derive(Resource, Debug)]
pub struct AmbientScheduler {
    rng: ChaCha8Rng,
    first_delay: f32,
    /// (min, max) seconds between sounds after the opener
    pub interval: (f32, f32),
    first_sounds: Vec<String>,
    sounds: Vec<String>,
    active: bool,
    opener_pending: bool,
    next_index: usize,
    remaining: f32,
}

impl AmbientScheduler {
    pub fn new(seed: u64, tuning: &AmbientTuning) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            first_delay: tuning.first_delay,
            interval: tuning.interval,
            first_sounds: tuning.first_sounds.clone(),
            sounds: tuning.sounds.clone(),
            active: false,
            opener_pending: true,
            next_index: 0,
            remaining: 0.0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Seconds until the next sound.
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Arm the opener. Returns false when there is nothing to play.
    pub fn start(&mut self) -> bool {
        if self.sounds.is_empty() {
            return false;
        }
        self.active = true;
        self.opener_pending = true;
        self.next_index = 0;
        self.remaining = self.first_delay;
        true
    }

    pub fn stop(&mut self) {
        self.active = false;
    }

    pub fn roll_interval(&mut self) -> f32 {
        let (min, max) = self.interval;
        if max > min {
            self.rng.random_range(min..=max)
        } else {
            min
        }
    }

    /// Count down by `dt`. Returns the sound that is due, if any, and schedules the next one.
    pub fn tick(&mut self, dt: f32) -> Option<String> {
        if !self.active {
            return None;
        }
        self.remaining -= dt;
        if self.remaining > 0.0 {
            return None;
        }
        let sound = self.next_sound();
        self.remaining = self.roll_interval();
        sound
    }

    fn next_sound(&mut self) -> Option<String> {
        if self.opener_pending {
            self.opener_pending = false;
            self.next_index = 0;
            if !self.first_sounds.is_empty() {
                let pick = self.rng.random_range(0..self.first_sounds.len());
                return Some(self.first_sounds[pick].clone());
            }
        }

        let sound = self.sounds.get(self.next_index)?.clone();
        self.next_index = (self.next_index + 1) % self.sounds.len();
        Some(sound)
    }
}

/// Picks a random track per mood, never the same one twice in a row.
#[derive(Resource, Debug)]
pub struct MusicDirector {
    rng: ChaCha8Rng,
    last: HashMap<MusicMood, usize>,
}

impl MusicDirector {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            last: HashMap::new(),
        }
    }

    pub fn last(&self, mood: MusicMood) -> Option<usize> {
        self.last.get(&mood).copied()
    }

    /// Index into a list of `track_count` tracks for `mood`, or None for an empty list.
    pub fn pick(&mut self, mood: MusicMood, track_count: usize) -> Option<usize> {
        let pick = match (track_count, self.last(mood)) {
            (0, _) => return None,
            (1, _) => 0,
            (n, Some(last)) if last < n => {
                // Draw from the other n - 1 tracks and skip over the last one
                let pick = self.rng.random_range(0..n - 1);
                if pick >= last { pick + 1 } else { pick }
            }
            (n, _) => self.rng.random_range(0..n),
        };
        self.last.insert(mood, pick);
        Some(pick)
    }
}
