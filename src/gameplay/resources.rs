//! Gameplay domain: runner energy and score.

use bevy::prelude::*;

/// Colour band of the energy bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyStatus {
    Healthy,
    Warning,
    Critical,
}

/// The runner's energy. Drains over time and on obstacle hits; zero loses the run.
#[derive(Resource, Debug, Clone)]
pub struct Energy {
    current: f32,
    pub max: f32,
    /// Energy lost per second while draining
    pub drain_rate: f32,
    draining: bool,
}

impl Energy {
    pub fn new(max: f32, drain_rate: f32) -> Self {
        Self {
            current: max,
            max,
            drain_rate,
            draining: true,
        }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn fraction(&self) -> f32 {
        if self.max > 0.0 {
            self.current / self.max
        } else {
            0.0
        }
    }

    pub fn decrease(&mut self, amount: f32) {
        self.current = (self.current - amount).clamp(0.0, self.max);
    }

    pub fn increase(&mut self, amount: f32) {
        self.current = (self.current + amount).clamp(0.0, self.max);
    }

    /// Drain for `dt` seconds. Returns true if the value changed.
    pub fn drain(&mut self, dt: f32) -> bool {
        if !self.draining || self.current <= 0.0 {
            return false;
        }
        let before = self.current;
        self.decrease(self.drain_rate * dt);
        self.current != before
    }

    pub fn is_draining(&self) -> bool {
        self.draining
    }

    /// Freeze the value, as when the run ends.
    pub fn stop(&mut self) {
        self.draining = false;
    }

    pub fn resume(&mut self) {
        self.draining = true;
    }

    pub fn refill(&mut self) {
        self.current = self.max;
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }

    /// Band for the given fractions, each inclusive.
    pub fn status(&self, warning_fraction: f32, critical_fraction: f32) -> EnergyStatus {
        let fraction = self.fraction();
        if fraction <= critical_fraction {
            EnergyStatus::Critical
        } else if fraction <= warning_fraction {
            EnergyStatus::Warning
        } else {
            EnergyStatus::Healthy
        }
    }
}

/// Loot collected this run.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Score(pub u32);

impl Score {
    pub fn add(&mut self, amount: u32) {
        self.0 = self.0.saturating_add(amount);
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }
}

/// Entities the runner's collider overlapped on the last tick, by layer.
#[derive(Resource, Debug, Default, Clone)]
pub struct RunnerContacts {
    pub pickups: Vec<Entity>,
    pub checkpoints: Vec<Entity>,
    pub cops: Vec<Entity>,
    pub getaways: Vec<Entity>,
}

impl RunnerContacts {
    pub fn clear(&mut self) {
        self.pickups.clear();
        self.checkpoints.clear();
        self.cops.clear();
        self.getaways.clear();
    }
}
