//! Traffic domain: the randomized car spawner.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::content::TrafficTuning;
use crate::traffic::CarHeading;

/// Everything needed to spawn one car.
#[derive(Debug, Clone, PartialEq)]
pub struct CarPlan {
    pub model: usize,
    pub heading: CarHeading,
    pub speed: f32,
    pub position: Vec2,
    pub honk: bool,
}

/// Schedules cars at random delays drawn from the difficulty's interval.
#[derive(Resource, Debug)]
pub struct CarSpawner {
    rng: ChaCha8Rng,
    /// (min, max) seconds between cars
    pub interval: (f32, f32),
    remaining: f32,
    spawned: u32,
}

impl CarSpawner {
    pub fn new(seed: u64, interval: (f32, f32)) -> Self {
        let mut spawner = Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            interval,
            remaining: 0.0,
            spawned: 0,
        };
        spawner.schedule_next();
        spawner
    }

    /// Seconds until the next car.
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn spawned(&self) -> u32 {
        self.spawned
    }

    pub fn roll_delay(&mut self) -> f32 {
        let (min, max) = self.interval;
        if max > min {
            self.rng.random_range(min..=max)
        } else {
            min
        }
    }

    pub fn schedule_next(&mut self) {
        self.remaining = self.roll_delay();
    }

    /// Count down by `dt`. Returns true when a car is due, and schedules the one after it.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        if self.remaining > 0.0 {
            return false;
        }
        self.schedule_next();
        true
    }

    /// Roll model, heading and position for the next car around `camera_x`.
    pub fn plan_car(&mut self, tuning: &TrafficTuning, camera_x: f32) -> Option<CarPlan> {
        if tuning.models.is_empty() {
            return None;
        }

        let model = self.rng.random_range(0..tuning.models.len());
        let def = &tuning.models[model];
        let heads_right = self.rng.random::<f32>() < tuning.right_direction_chance;

        let mut y = tuning.road_y + def.y_offset;
        let (heading, speed, x) = if heads_right {
            y += tuning.right_lane_offset;
            (
                CarHeading::Right,
                def.speed + tuning.right_speed_bonus,
                camera_x - tuning.spawn_x_offset,
            )
        } else {
            (CarHeading::Left, def.speed, camera_x + tuning.spawn_x_offset)
        };

        self.spawned += 1;
        let honk = tuning.honk_every > 0 && self.spawned % tuning.honk_every == 0;

        Some(CarPlan {
            model,
            heading,
            speed,
            position: Vec2::new(x, y),
            honk,
        })
    }
}
