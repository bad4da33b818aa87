//! Kinematics domain: engine-agnostic body integration, jumping, and hazard checks.
//!
//! Nothing in here talks to avian directly. Geometry comes in through
//! [`ShapeCaster`], so the same code runs against the physics world in game
//! and against hand-built planes in tests.

mod body;
mod cast;
mod hazard;
mod integrator;
mod jump;
mod policy;
#[cfg(test)]
mod tests;

pub use body::KinematicBody;
pub use cast::{CollisionHit, ShapeCaster};
pub use hazard::{HazardCooldown, HazardHit, HazardSettings, detect_hazard};
pub use integrator::{Integrator, MovementPass, StepOutcome};
pub use jump::{JumpController, JumpState, JumpTiming};
pub use policy::{CopPolicy, DriveMode, Haltable, RunnerPolicy, VelocityPolicy};
