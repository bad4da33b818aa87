//! Movement domain: components and physics layers for actors and level geometry.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Street surface and platforms
    Ground,
    /// Solid hazards the runner can crash into
    Obstacle,
    /// The player character
    Runner,
    /// Pursuing police
    Cop,
    /// Powerups and loot - never block movement
    Pickup,
    /// The escape vehicle trigger
    Getaway,
    /// Respawn regions
    Checkpoint,
}

/// The player-controlled robber.
#[derive(Component, Debug)]
pub struct Runner;

#[derive(Component, Debug)]
pub struct Cop;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for colliders that damage the runner on impact
#[derive(Component, Debug)]
pub struct Obstacle;

/// Where an actor returns to on restart.
#[derive(Component, Debug, Clone, Copy)]
pub struct SpawnPoint(pub Vec2);

/// The entity the camera tracks.
#[derive(Component, Debug)]
pub struct CameraFocus;
