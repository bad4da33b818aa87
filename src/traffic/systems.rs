//! Traffic domain: spawning, driving, and despawning cars.

use bevy::prelude::*;

use crate::content::GameplayTuning;
use crate::core::{AudioCue, AudioCueEvent, Difficulty};
use crate::traffic::{Car, CarHeading, CarSpawner};

const CAR_Z: f32 = -0.5;

pub(crate) fn init_car_spawner(
    mut commands: Commands,
    tuning: Res<GameplayTuning>,
    difficulty: Res<Difficulty>,
) {
    let seed = tuning.traffic.seed.unwrap_or_else(rand::random);
    let interval = tuning.difficulty.profile(*difficulty).car_spawn_interval;
    info!("Traffic seed {} with interval {:?}", seed, interval);
    commands.insert_resource(CarSpawner::new(seed, interval));
}

pub(crate) fn spawn_cars(
    mut commands: Commands,
    time: Res<Time>,
    tuning: Res<GameplayTuning>,
    mut spawner: ResMut<CarSpawner>,
    cameras: Query<&Transform, With<Camera2d>>,
    mut cues: MessageWriter<AudioCueEvent>,
) {
    let Ok(camera) = cameras.single() else {
        return;
    };
    if !spawner.tick(time.delta_secs()) {
        return;
    }
    let traffic = &tuning.traffic;
    let Some(plan) = spawner.plan_car(traffic, camera.translation.x) else {
        return;
    };

    let def = &traffic.models[plan.model];
    let sprite = Sprite {
        color: Color::srgb(def.color.0, def.color.1, def.color.2),
        custom_size: Some(Vec2::new(def.size.0, def.size.1)),
        flip_x: plan.heading == CarHeading::Left,
        ..default()
    };

    commands.spawn((
        Car {
            speed: plan.speed,
            heading: plan.heading,
        },
        sprite,
        Transform::from_xyz(plan.position.x, plan.position.y, CAR_Z),
    ));

    if plan.honk {
        cues.write(AudioCueEvent {
            cue: AudioCue::CarHonk,
        });
    }

    debug!(
        "Spawned car #{} ({}) heading {:?} at {:?}, next in {:.2}s",
        spawner.spawned(),
        def.name,
        plan.heading,
        plan.position,
        spawner.remaining()
    );
}

pub(crate) fn drive_cars(time: Res<Time>, mut cars: Query<(&Car, &mut Transform)>) {
    let dt = time.delta_secs();
    for (car, mut transform) in &mut cars {
        transform.translation.x += car.velocity() * dt;
    }
}

pub(crate) fn despawn_far_cars(
    mut commands: Commands,
    tuning: Res<GameplayTuning>,
    cameras: Query<&Transform, (With<Camera2d>, Without<Car>)>,
    cars: Query<(Entity, &Transform), With<Car>>,
) {
    let Ok(camera) = cameras.single() else {
        return;
    };
    for (entity, transform) in &cars {
        if (transform.translation.x - camera.translation.x).abs() > tuning.traffic.despawn_offset {
            commands.entity(entity).despawn();
        }
    }
}

pub(crate) fn retune_spawner(
    difficulty: Res<Difficulty>,
    tuning: Res<GameplayTuning>,
    mut spawner: ResMut<CarSpawner>,
) {
    spawner.interval = tuning.difficulty.profile(*difficulty).car_spawn_interval;
    debug!("Car spawn interval now {:?}", spawner.interval);
}
