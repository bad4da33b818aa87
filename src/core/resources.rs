//! Core domain: shared resources for difficulty and the current run.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Selected difficulty. Profiles are looked up in the gameplay tuning.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Map a menu index to a difficulty. Anything out of range is Easy.
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }
}

/// Bookkeeping for the run in progress.
#[derive(Resource, Debug, Default)]
pub struct RunSession {
    /// Set once the runner reaches the getaway vehicle; cops can no longer catch them
    pub escaping: bool,
    pub loss_reason: Option<String>,
    /// Number of restarts since launch
    pub attempts: u32,
}

impl RunSession {
    pub fn begin_escape(&mut self) {
        self.escaping = true;
    }

    pub fn record_loss(&mut self, reason: impl Into<String>) {
        self.loss_reason = Some(reason.into());
    }

    /// Clear per-run flags for a fresh attempt.
    pub fn restart(&mut self) {
        self.escaping = false;
        self.loss_reason = None;
        self.attempts += 1;
    }
}
