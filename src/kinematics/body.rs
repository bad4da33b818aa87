//! Kinematics domain: per-entity velocity and contact state.

use bevy::prelude::*;

/// Velocity and ground contact for an entity moved by the [`Integrator`].
///
/// Position is not stored here; it belongs to the physics backend and is
/// passed into the integrator each tick.
///
/// [`Integrator`]: super::Integrator
#[derive(Component, Debug, Clone)]
pub struct KinematicBody {
    pub velocity: Vec2,
    /// Desired velocity for the current tick, rewritten by a velocity policy
    pub target_velocity: Vec2,
    /// Normal of the surface last classified as ground. Only meaningful while grounded.
    pub ground_normal: Vec2,
    pub grounded: bool,
    /// Gravity scale applied while already falling
    pub gravity_modifier: f32,
    /// Minimum normal y for a surface to count as ground
    pub min_ground_normal_y: f32,
}

impl Default for KinematicBody {
    fn default() -> Self {
        Self {
            velocity: Vec2::ZERO,
            target_velocity: Vec2::ZERO,
            ground_normal: Vec2::Y,
            grounded: false,
            gravity_modifier: 1.0,
            min_ground_normal_y: 0.65,
        }
    }
}

impl KinematicBody {
    pub fn with_gravity_modifier(mut self, gravity_modifier: f32) -> Self {
        self.gravity_modifier = gravity_modifier;
        self
    }

    /// Zero both the current and the target velocity.
    pub fn reset_velocity(&mut self) {
        self.velocity = Vec2::ZERO;
        self.target_velocity = Vec2::ZERO;
    }

    /// Overwrite the backend position and drop all momentum.
    pub fn teleport(&mut self, position: &mut Vec2, destination: Vec2) {
        *position = destination;
        self.reset_velocity();
        self.grounded = false;
        self.ground_normal = Vec2::Y;
    }
}
