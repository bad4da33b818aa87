//! Kinematics domain: per-entity-kind target velocity and halting.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::kinematics::KinematicBody;

/// Computes the velocity a body wants this tick, before collision constraints.
pub trait VelocityPolicy {
    fn target_velocity(&self, body: &KinematicBody) -> Vec2;
}

/// Anything that can be frozen in place when a run ends.
pub trait Haltable {
    fn stop(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum DriveMode {
    /// Always pushing right; keys only brake or boost
    #[default]
    Endless,
    /// Plain left/right axis
    Free,
}

/// Input-driven velocity for the runner.
#[derive(Component, Debug, Clone)]
pub struct RunnerPolicy {
    pub max_speed: f32,
    pub mode: DriveMode,
    pub control_enabled: bool,
    drive: f32,
}

impl RunnerPolicy {
    pub const BASE_DRIVE: f32 = 1.0;
    pub const BRAKE: f32 = 0.7;
    pub const BOOST: f32 = 0.3;
    pub const MAX_DRIVE: f32 = 1.5;

    pub fn new(max_speed: f32, mode: DriveMode) -> Self {
        Self {
            max_speed,
            mode,
            control_enabled: true,
            drive: 0.0,
        }
    }

    /// Forward bias reduced by the brake key and raised by the boost key.
    pub fn endless_drive(brake: bool, boost: bool) -> f32 {
        let brake = if brake { Self::BRAKE } else { 0.0 };
        let boost = if boost { Self::BOOST } else { 0.0 };
        (Self::BASE_DRIVE - brake + boost).clamp(0.0, Self::MAX_DRIVE)
    }

    pub fn drive(&self) -> f32 {
        self.drive
    }

    /// Set the horizontal drive as a fraction of `max_speed`. Ignored without control.
    pub fn set_drive(&mut self, drive: f32) {
        self.drive = if self.control_enabled { drive } else { 0.0 };
    }

    pub fn enable_control(&mut self) {
        self.control_enabled = true;
    }
}

impl VelocityPolicy for RunnerPolicy {
    fn target_velocity(&self, body: &KinematicBody) -> Vec2 {
        Vec2::new(self.drive() * self.max_speed, body.velocity.y)
    }
}

impl Haltable for RunnerPolicy {
    fn stop(&mut self) {
        self.control_enabled = false;
        self.drive = 0.0;
    }
}

/// Constant pursuit speed for cops.
#[derive(Component, Debug, Clone)]
pub struct CopPolicy {
    pub move_speed: f32,
}

impl CopPolicy {
    pub fn new(move_speed: f32) -> Self {
        Self { move_speed }
    }
}

impl VelocityPolicy for CopPolicy {
    fn target_velocity(&self, body: &KinematicBody) -> Vec2 {
        Vec2::new(self.move_speed, body.velocity.y)
    }
}

impl Haltable for CopPolicy {
    fn stop(&mut self) {
        self.move_speed = 0.0;
    }
}
