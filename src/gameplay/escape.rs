//! Gameplay domain: the getaway vehicle's scripted drive-off.

use bevy::prelude::*;

use crate::content::EscapeTuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapePhase {
    /// Engine started, vehicle still parked
    Waiting,
    Accelerating,
    Cruising,
    Finished,
}

/// Timed state for the drive-off, advanced once per tick.
#[derive(Component, Debug, Clone)]
pub struct EscapeSequence {
    settings: EscapeTuning,
    elapsed: f32,
}

impl EscapeSequence {
    pub fn new(settings: EscapeTuning) -> Self {
        Self {
            settings,
            elapsed: 0.0,
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn phase(&self) -> EscapePhase {
        let s = &self.settings;
        if self.elapsed >= s.total_duration {
            EscapePhase::Finished
        } else if self.elapsed < s.start_delay {
            EscapePhase::Waiting
        } else if self.elapsed < s.start_delay + s.acceleration_time {
            EscapePhase::Accelerating
        } else {
            EscapePhase::Cruising
        }
    }

    pub fn is_finished(&self) -> bool {
        self.phase() == EscapePhase::Finished
    }

    /// Speed `t` seconds after the sequence started.
    pub fn speed_at(&self, t: f32) -> f32 {
        let s = &self.settings;
        if t < s.start_delay || t >= s.total_duration {
            return 0.0;
        }
        let ramp = t - s.start_delay;
        if ramp < s.acceleration_time {
            s.max_speed * smoothstep(ramp / s.acceleration_time)
        } else {
            s.max_speed
        }
    }

    /// Step by `dt` and return the displacement covered during it.
    pub fn advance(&mut self, dt: f32) -> Vec2 {
        let speed = self.speed_at(self.elapsed);
        self.elapsed += dt;
        Vec2::new(self.settings.direction.signum(), 0.0) * speed * dt
    }
}

fn smoothstep(x: f32) -> f32 {
    let x = x.clamp(0.0, 1.0);
    x * x * (3.0 - 2.0 * x)
}
