//! Gameplay domain: pickups, checkpoints, and the getaway vehicle.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::{GameplayTuning, PickupKind, vec2};
use crate::core::Difficulty;
use crate::gameplay::{Checkpoint, Energy, GetawayVehicle, LevelProp, Pickup};
use crate::movement::{GameLayer, block_sprite};

const PICKUP_SIZE: f32 = 0.5;
const POWERUP_COLOR: Color = Color::srgb(0.3, 0.9, 0.4);
const LOOT_COLOR: Color = Color::srgb(0.95, 0.85, 0.2);
const CHECKPOINT_COLOR: Color = Color::srgba(0.6, 0.6, 1.0, 0.25);
const GETAWAY_COLOR: Color = Color::srgb(0.1, 0.1, 0.1);

pub(crate) fn init_energy(
    mut commands: Commands,
    tuning: Res<GameplayTuning>,
    difficulty: Res<Difficulty>,
) {
    let drain = tuning.difficulty.profile(*difficulty).energy_drain;
    commands.insert_resource(Energy::new(tuning.energy.max, drain));
}

pub(crate) fn spawn_props_on_startup(mut commands: Commands, tuning: Res<GameplayTuning>) {
    spawn_props(&mut commands, &tuning);
}

/// Spawn every level prop. All of them are sensors: they report overlaps but never block.
pub(crate) fn spawn_props(commands: &mut Commands, tuning: &GameplayTuning) {
    let level = &tuning.level;

    for def in &level.pickups {
        let position = vec2(def.position);
        let color = match def.kind {
            PickupKind::Powerup => POWERUP_COLOR,
            PickupKind::Loot => LOOT_COLOR,
        };
        commands.spawn((
            LevelProp,
            Pickup { kind: def.kind },
            Sprite {
                color,
                custom_size: Some(Vec2::splat(PICKUP_SIZE)),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 1.0),
            Collider::circle(PICKUP_SIZE * 0.5),
            Sensor,
            CollisionLayers::new(GameLayer::Pickup, [GameLayer::Runner]),
        ));
    }

    for def in &level.checkpoints {
        commands.spawn((
            LevelProp,
            Checkpoint {
                spawn: vec2(def.spawn),
            },
            block_sprite(&def.region, CHECKPOINT_COLOR, 0.2),
            Collider::rectangle(def.region.size.0, def.region.size.1),
            Sensor,
            CollisionLayers::new(GameLayer::Checkpoint, [GameLayer::Runner]),
        ));
    }

    let getaway = &level.getaway;
    commands.spawn((
        LevelProp,
        GetawayVehicle,
        block_sprite(getaway, GETAWAY_COLOR, 1.0),
        Collider::rectangle(getaway.size.0, getaway.size.1),
        Sensor,
        CollisionLayers::new(GameLayer::Getaway, [GameLayer::Runner]),
    ));

    debug!(
        "Spawned {} pickups, {} checkpoints, getaway at {:?}",
        level.pickups.len(),
        level.checkpoints.len(),
        getaway.center
    );
}
