//! Movement domain: tests for input handling and the policy systems.

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::systems::{compute_target_velocities, hazards_armed, steer_runner};
use super::{Runner, RunnerInput};
use crate::kinematics::{CopPolicy, DriveMode, Haltable, KinematicBody, RunnerPolicy};

// -----------------------------------------------------------------------------
// RunnerInput tests
// -----------------------------------------------------------------------------

#[test]
fn test_endless_drive_from_held_keys() {
    let mut input = RunnerInput::default();
    assert_eq!(input.drive(DriveMode::Endless), 1.0);

    input.brake_held = true;
    assert!((input.drive(DriveMode::Endless) - 0.3).abs() < 1e-6);

    input.boost_held = true;
    assert!((input.drive(DriveMode::Endless) - 0.6).abs() < 1e-6);
}

#[test]
fn test_free_drive_follows_axis() {
    let input = RunnerInput {
        axis: -1.0,
        ..default()
    };
    assert_eq!(input.drive(DriveMode::Free), -1.0);
    assert_eq!(RunnerInput::default().drive(DriveMode::Free), 0.0);
}

#[test]
fn test_clear_edges_keeps_held_keys() {
    let mut input = RunnerInput {
        brake_held: true,
        jump_just_pressed: true,
        jump_just_released: true,
        ..default()
    };

    input.clear_edges();

    assert!(input.brake_held);
    assert!(!input.jump_just_pressed);
    assert!(!input.jump_just_released);
}

// -----------------------------------------------------------------------------
// System tests
// -----------------------------------------------------------------------------

#[test]
fn test_steer_and_target_velocity_for_runner() {
    let mut world = World::new();
    world.insert_resource(RunnerInput {
        boost_held: true,
        ..default()
    });
    let mut body = KinematicBody::default();
    body.velocity.y = 2.0;
    let runner = world
        .spawn((Runner, RunnerPolicy::new(7.0, DriveMode::Endless), body))
        .id();

    world
        .run_system_once(steer_runner)
        .expect("steer_runner should run");
    world
        .run_system_once(compute_target_velocities::<RunnerPolicy>)
        .expect("target velocity system should run");

    let body = world
        .entity(runner)
        .get::<KinematicBody>()
        .expect("runner keeps its body");
    assert!((body.target_velocity.x - 9.1).abs() < 1e-5);
    assert_eq!(body.target_velocity.y, 2.0);
}

#[test]
fn test_halted_cop_target_is_zero() {
    let mut world = World::new();
    let mut policy = CopPolicy::new(6.0);
    policy.stop();
    let cop = world.spawn((policy, KinematicBody::default())).id();

    world
        .run_system_once(compute_target_velocities::<CopPolicy>)
        .expect("target velocity system should run");

    let body = world
        .entity(cop)
        .get::<KinematicBody>()
        .expect("cop keeps its body");
    assert_eq!(body.target_velocity.x, 0.0);
}

#[test]
fn test_hazards_disarmed_for_halted_runner() {
    let mut policy = RunnerPolicy::new(7.0, DriveMode::Endless);
    assert!(hazards_armed(Some(&policy)));

    policy.stop();
    assert!(!hazards_armed(Some(&policy)));

    // Bodies without a runner policy keep their cooldown checks
    assert!(hazards_armed(None));
}
