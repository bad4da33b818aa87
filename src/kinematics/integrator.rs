//! Kinematics domain: gravity integration and two-pass swept collision resolution.

use bevy::prelude::*;

use crate::kinematics::{KinematicBody, ShapeCaster};

/// Movement settings shared by every kinematic body.
#[derive(Resource, Debug, Clone, Copy)]
pub struct Integrator {
    /// Gap kept between a body and any surface it stops against
    pub shell_radius: f32,
    /// Displacements at or below this length are not cast or applied
    pub min_move_distance: f32,
}

impl Default for Integrator {
    fn default() -> Self {
        Self {
            shell_radius: 0.01,
            min_move_distance: 0.001,
        }
    }
}

/// Record of one resolved movement pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementPass {
    pub intended: Vec2,
    pub start: Vec2,
    pub end: Vec2,
}

impl MovementPass {
    pub fn actual(&self) -> Vec2 {
        self.end - self.start
    }

    /// True when the pass covered less than `ratio` of a displacement longer than `min_expected`.
    pub fn is_blocked(&self, ratio: f32, min_expected: f32) -> bool {
        let expected = self.intended.length();
        expected > min_expected && self.actual().length() < expected * ratio
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepOutcome {
    pub horizontal: MovementPass,
    pub vertical: MovementPass,
}

impl StepOutcome {
    pub fn passes(&self) -> [MovementPass; 2] {
        [self.horizontal, self.vertical]
    }
}

impl Integrator {
    /// Falling bodies get the scaled gravity, everything else the plain one.
    pub fn apply_gravity(body: &mut KinematicBody, gravity: Vec2, dt: f32) {
        if body.velocity.y < 0.0 {
            body.velocity += body.gravity_modifier * gravity * dt;
        } else {
            body.velocity += gravity * dt;
        }
    }

    /// Advance one fixed tick: gravity, horizontal pass along the ground, then vertical pass.
    pub fn step<C: ShapeCaster + ?Sized>(
        &self,
        body: &mut KinematicBody,
        position: &mut Vec2,
        caster: &C,
        gravity: Vec2,
        dt: f32,
    ) -> StepOutcome {
        Self::apply_gravity(body, gravity, dt);
        body.velocity.x = body.target_velocity.x;
        body.grounded = false;

        let delta = body.velocity * dt;
        let along_ground = Vec2::new(body.ground_normal.y, -body.ground_normal.x);

        let horizontal =
            self.perform_movement(body, position, caster, along_ground * delta.x, false);
        let vertical = self.perform_movement(body, position, caster, Vec2::Y * delta.y, true);

        StepOutcome {
            horizontal,
            vertical,
        }
    }

    /// Sweep `movement` from `position`, resolve hits against `body`, and move.
    pub fn perform_movement<C: ShapeCaster + ?Sized>(
        &self,
        body: &mut KinematicBody,
        position: &mut Vec2,
        caster: &C,
        movement: Vec2,
        vertical: bool,
    ) -> MovementPass {
        let start = *position;
        if vertical {
            body.grounded = false;
        }

        let mut distance = movement.length();
        if distance <= self.min_move_distance {
            return MovementPass {
                intended: movement,
                start,
                end: start,
            };
        }

        if let Ok(direction) = Dir2::new(movement) {
            for hit in caster.cast(*position, direction, distance + self.shell_radius) {
                let mut normal = hit.normal;

                if vertical && movement.y < 0.0 && normal.y > body.min_ground_normal_y {
                    body.grounded = true;
                    body.ground_normal = normal;
                    normal.x = 0.0;
                }

                if body.grounded {
                    // Slide: drop only the part of the velocity pushing into the surface
                    let projection = body.velocity.dot(normal);
                    if projection < 0.0 {
                        body.velocity -= projection * normal;
                    }
                } else if vertical {
                    body.velocity.y = body.velocity.y.min(0.0);
                } else {
                    body.velocity.x = 0.0;
                }

                distance = distance.min(hit.distance - self.shell_radius);
            }

            *position += *direction * distance;
        }

        MovementPass {
            intended: movement,
            start,
            end: *position,
        }
    }
}
