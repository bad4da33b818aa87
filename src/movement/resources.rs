//! Movement domain: runner input sampled each frame for the fixed tick.

use bevy::prelude::*;

use crate::kinematics::{DriveMode, RunnerPolicy};

/// Keyboard state for the runner.
///
/// Held keys are overwritten every frame. Edges accumulate until the next
/// fixed tick consumes them, so a tap between two ticks is not lost.
#[derive(Resource, Debug, Default)]
pub struct RunnerInput {
    /// Left/right axis used in free drive mode
    pub axis: f32,
    pub brake_held: bool,
    pub boost_held: bool,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
}

impl RunnerInput {
    /// Horizontal drive as a fraction of max speed.
    pub fn drive(&self, mode: DriveMode) -> f32 {
        match mode {
            DriveMode::Endless => RunnerPolicy::endless_drive(self.brake_held, self.boost_held),
            DriveMode::Free => self.axis.clamp(-1.0, 1.0),
        }
    }

    pub fn clear_edges(&mut self) {
        self.jump_just_pressed = false;
        self.jump_just_released = false;
    }
}
