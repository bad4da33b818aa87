//! Movement domain: street geometry and actor spawning from tuning data.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::{BlockDef, GameplayTuning, vec2};
use crate::core::Difficulty;
use crate::kinematics::{CopPolicy, HazardCooldown, JumpController, KinematicBody, RunnerPolicy};
use crate::movement::{CameraFocus, Cop, GameLayer, Ground, Obstacle, Runner, SpawnPoint};

const GROUND_COLOR: Color = Color::srgb(0.3, 0.3, 0.35);
const OBSTACLE_COLOR: Color = Color::srgb(0.75, 0.35, 0.2);
pub(crate) const RUNNER_COLOR: Color = Color::srgb(0.9, 0.75, 0.2);
const COP_COLOR: Color = Color::srgb(0.15, 0.2, 0.7);

/// Spawn the street and the obstacles on it.
pub(crate) fn spawn_level(mut commands: Commands, tuning: Res<GameplayTuning>) {
    let ground_layers =
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Runner, GameLayer::Cop]);
    let obstacle_layers = CollisionLayers::new(GameLayer::Obstacle, [GameLayer::Runner]);

    for block in &tuning.level.ground {
        commands.spawn((
            Ground,
            block_sprite(block, GROUND_COLOR, 0.0),
            RigidBody::Static,
            Collider::rectangle(block.size.0, block.size.1),
            ground_layers,
        ));
    }

    for block in &tuning.level.obstacles {
        commands.spawn((
            Obstacle,
            block_sprite(block, OBSTACLE_COLOR, 0.5),
            RigidBody::Static,
            Collider::rectangle(block.size.0, block.size.1),
            obstacle_layers,
        ));
    }

    info!(
        "Spawned level: {} ground blocks, {} obstacles",
        tuning.level.ground.len(),
        tuning.level.obstacles.len()
    );
}

/// Spawn the runner and the cops chasing them.
pub(crate) fn spawn_actors(
    mut commands: Commands,
    tuning: Res<GameplayTuning>,
    difficulty: Res<Difficulty>,
) {
    let runner = &tuning.runner;
    let spawn = vec2(tuning.level.runner_spawn);

    commands.spawn((
        // Identity
        (Runner, CameraFocus, SpawnPoint(spawn)),
        // Kinematics
        (
            KinematicBody {
                min_ground_normal_y: tuning.physics.min_ground_normal_y,
                ..default()
            }
            .with_gravity_modifier(runner.gravity_modifier),
            JumpController::new(runner.jump_timing())
            .with_take_off_speed(runner.take_off_speed)
            .with_deceleration(runner.jump_deceleration),
            RunnerPolicy::new(runner.max_speed, runner.drive_mode),
            HazardCooldown::new(runner.damage_cooldown),
        ),
        // Rendering
        Sprite {
            color: RUNNER_COLOR,
            custom_size: Some(vec2(runner.size)),
            ..default()
        },
        Transform::from_xyz(spawn.x, spawn.y, 2.0),
        // Physics
        (
            RigidBody::Kinematic,
            Collider::rectangle(runner.size.0, runner.size.1),
            CollisionLayers::new(GameLayer::Runner, [GameLayer::Ground, GameLayer::Obstacle]),
        ),
    ));

    let cop_speed = tuning.difficulty.profile(*difficulty).cop_speed;
    let cop = &tuning.cop;
    for &spawn in &tuning.level.cop_spawns {
        let spawn = vec2(spawn);
        commands.spawn((
            (Cop, SpawnPoint(spawn)),
            (
                KinematicBody {
                    min_ground_normal_y: tuning.physics.min_ground_normal_y,
                    ..default()
                }
                .with_gravity_modifier(cop.gravity_modifier),
                CopPolicy::new(cop_speed),
            ),
            Sprite {
                color: COP_COLOR,
                custom_size: Some(vec2(cop.size)),
                ..default()
            },
            Transform::from_xyz(spawn.x, spawn.y, 1.5),
            (
                RigidBody::Kinematic,
                Collider::rectangle(cop.size.0, cop.size.1),
                CollisionLayers::new(GameLayer::Cop, [GameLayer::Ground]),
            ),
        ));
    }

    info!(
        "Spawned runner at {:?} and {} cop(s) at speed {}",
        spawn,
        tuning.level.cop_spawns.len(),
        cop_speed
    );
}

/// Sprite and transform for an axis-aligned block.
pub(crate) fn block_sprite(block: &BlockDef, color: Color, z: f32) -> (Sprite, Transform) {
    let center = block.center();
    (
        Sprite {
            color,
            custom_size: Some(block.size()),
            ..default()
        },
        Transform::from_xyz(center.x, center.y, z),
    )
}
