//! Traffic domain: background cars passing the chase.

mod components;
mod resources;
mod systems;

use bevy::prelude::*;

pub use components::{Car, CarHeading};
pub use resources::{CarPlan, CarSpawner};

use crate::core::Difficulty;
use systems::{despawn_far_cars, drive_cars, init_car_spawner, retune_spawner, spawn_cars};

pub struct TrafficPlugin;

impl Plugin for TrafficPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, init_car_spawner).add_systems(
            Update,
            (
                spawn_cars,
                drive_cars,
                despawn_far_cars,
                retune_spawner
                    .run_if(resource_changed::<Difficulty>.and(resource_exists::<CarSpawner>)),
            )
                .chain(),
        );
    }
}
