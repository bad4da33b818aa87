//! Movement domain: system modules for input, integration, and camera.

pub(crate) mod camera;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use camera::follow_focus;
pub(crate) use input::{clear_input_edges, read_input};
pub(crate) use movement::{
    advance_jump_states, apply_jump_velocity, compute_target_velocities, hazards_armed,
    integrate_bodies, steer_runner,
};
