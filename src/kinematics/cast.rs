//! Kinematics domain: the swept query seam between bodies and the collision world.

use bevy::prelude::*;

/// One surface found by a swept query. Only lives for a single movement pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionHit {
    /// Outward normal of the surface that was hit
    pub normal: Vec2,
    /// Travel distance along the cast direction before contact
    pub distance: f32,
    pub collider: Entity,
}

/// Sweeps the caller's shape through the world.
pub trait ShapeCaster {
    /// Returns every hit along `direction` within `max_distance`, in the
    /// backend's order. The caster's own collider must not be reported.
    fn cast(&self, origin: Vec2, direction: Dir2, max_distance: f32) -> Vec<CollisionHit>;
}
