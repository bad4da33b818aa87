//! Kinematics domain: jump state machine and jump velocity shaping.

use bevy::prelude::*;

use crate::kinematics::KinematicBody;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpState {
    #[default]
    Grounded,
    PrepareToJump,
    Jumping,
    InFlight,
    Landed,
}

/// How the airborne transitions react to the grounded flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JumpTiming {
    /// Leave and land as soon as the grounded flag changes
    Immediate,
    /// Ignore grounded changes until `min_air_time` seconds after the jump started
    AirTimeGated { min_air_time: f32 },
}

#[derive(Component, Debug, Clone)]
pub struct JumpController {
    pub state: JumpState,
    pub timing: JumpTiming,
    pub take_off_speed: f32,
    /// Multiplier for upward velocity when the jump is released early (1 = no cut)
    pub deceleration: f32,
    jump_requested: bool,
    jump_impulse: bool,
    stop_jump: bool,
    started_at: f32,
}

impl JumpController {
    pub fn new(timing: JumpTiming) -> Self {
        Self {
            state: JumpState::Grounded,
            timing,
            take_off_speed: 7.0,
            deceleration: 0.5,
            jump_requested: false,
            jump_impulse: false,
            stop_jump: false,
            started_at: 0.0,
        }
    }

    pub fn with_take_off_speed(mut self, take_off_speed: f32) -> Self {
        self.take_off_speed = take_off_speed;
        self
    }

    pub fn with_deceleration(mut self, deceleration: f32) -> Self {
        self.deceleration = deceleration;
        self
    }

    /// Jump button went down. Picked up by the next [`advance`](Self::advance).
    pub fn press(&mut self) {
        self.jump_requested = true;
    }

    /// Jump button went up, in any state.
    pub fn release(&mut self) {
        self.stop_jump = true;
    }

    /// Step the state machine once. Returns the new state if a transition happened.
    pub fn advance(&mut self, grounded: bool, now: f32) -> Option<JumpState> {
        let requested = std::mem::take(&mut self.jump_requested);
        // An impulse is only good for the tick it was raised on
        self.jump_impulse = false;

        let next = match self.state {
            JumpState::Grounded if requested && grounded => {
                self.started_at = now;
                Some(JumpState::PrepareToJump)
            }
            JumpState::PrepareToJump => {
                self.jump_impulse = true;
                self.stop_jump = false;
                Some(JumpState::Jumping)
            }
            JumpState::Jumping if !grounded && self.air_time_elapsed(now) => {
                Some(JumpState::InFlight)
            }
            JumpState::InFlight if grounded && self.air_time_elapsed(now) => {
                Some(JumpState::Landed)
            }
            JumpState::Landed => Some(JumpState::Grounded),
            _ => None,
        };

        if let Some(state) = next {
            self.state = state;
        }
        next
    }

    fn air_time_elapsed(&self, now: f32) -> bool {
        match self.timing {
            JumpTiming::Immediate => true,
            JumpTiming::AirTimeGated { min_air_time } => now - self.started_at >= min_air_time,
        }
    }

    /// Apply a pending take-off or an early release to `body`, consuming the flag.
    pub fn apply_to(&mut self, body: &mut KinematicBody, jump_modifier: f32) {
        if self.jump_impulse && body.grounded {
            body.velocity.y = self.take_off_speed * jump_modifier;
            self.jump_impulse = false;
        } else if self.stop_jump {
            self.stop_jump = false;
            if body.velocity.y > 0.0 {
                body.velocity.y *= self.deceleration;
            }
        }
    }

    pub fn reset(&mut self) {
        self.state = JumpState::Grounded;
        self.jump_requested = false;
        self.jump_impulse = false;
        self.stop_jump = false;
    }
}
