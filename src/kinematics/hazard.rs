//! Kinematics domain: inferring hazard contacts from blocked movement.
//!
//! The integrator does not report contacts, so a pass that travelled much
//! less than intended is taken as "something was in the way" and the path is
//! swept again to find out what. This is a heuristic: steep slopes and
//! corners can trip it without a real head-on hit.

use bevy::prelude::*;

use crate::kinematics::{MovementPass, ShapeCaster};

#[derive(Resource, Debug, Clone, Copy)]
pub struct HazardSettings {
    /// A pass covering less than this share of its displacement counts as blocked
    pub blocked_ratio: f32,
    pub min_expected_distance: f32,
    /// Energy removed per hazard hit
    pub damage: f32,
}

impl Default for HazardSettings {
    fn default() -> Self {
        Self {
            blocked_ratio: 0.8,
            min_expected_distance: 0.001,
            damage: 15.0,
        }
    }
}

/// Spacing between hazard hits on one entity.
#[derive(Component, Debug, Clone)]
pub struct HazardCooldown {
    pub cooldown: f32,
    last_damage_at: f32,
}

impl Default for HazardCooldown {
    fn default() -> Self {
        Self::new(2.0)
    }
}

impl HazardCooldown {
    pub fn new(cooldown: f32) -> Self {
        Self {
            cooldown,
            last_damage_at: f32::NEG_INFINITY,
        }
    }

    pub fn is_ready(&self, now: f32) -> bool {
        now - self.last_damage_at >= self.cooldown
    }

    pub fn trigger(&mut self, now: f32) {
        self.last_damage_at = now;
    }

    /// Forget the last hit, as on a fresh spawn.
    pub fn reset(&mut self) {
        self.last_damage_at = f32::NEG_INFINITY;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HazardHit {
    pub collider: Entity,
    pub damage: f32,
}

/// Check one resolved pass for a hazard hit. At most one hit per call.
pub fn detect_hazard<C, F>(
    pass: &MovementPass,
    caster: &C,
    is_hazard: F,
    cooldown: &mut HazardCooldown,
    settings: &HazardSettings,
    shell_radius: f32,
    now: f32,
) -> Option<HazardHit>
where
    C: ShapeCaster + ?Sized,
    F: Fn(Entity) -> bool,
{
    if !pass.is_blocked(settings.blocked_ratio, settings.min_expected_distance) {
        return None;
    }
    if !cooldown.is_ready(now) {
        return None;
    }

    let direction = Dir2::new(pass.intended).ok()?;
    let reach = pass.intended.length() + shell_radius;
    let hit = caster
        .cast(pass.end, direction, reach)
        .into_iter()
        .find(|hit| is_hazard(hit.collider))?;

    cooldown.trigger(now);
    Some(HazardHit {
        collider: hit.collider,
        damage: settings.damage,
    })
}
