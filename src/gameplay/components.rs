//! Gameplay domain: components for level props the runner interacts with.

use bevy::prelude::*;

use crate::content::PickupKind;

#[derive(Component, Debug, Clone, Copy)]
pub struct Pickup {
    pub kind: PickupKind,
}

/// The car waiting at the end of the street.
#[derive(Component, Debug)]
pub struct GetawayVehicle;

/// Touching this region moves the runner's respawn point.
#[derive(Component, Debug, Clone, Copy)]
pub struct Checkpoint {
    pub spawn: Vec2,
}

/// Props recreated on restart.
#[derive(Component, Debug)]
pub struct LevelProp;
