//! Traffic domain: background cars.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarHeading {
    Left,
    Right,
}

impl CarHeading {
    pub fn sign(self) -> f32 {
        match self {
            CarHeading::Left => -1.0,
            CarHeading::Right => 1.0,
        }
    }
}

/// A car driving past at constant speed. Purely visual, no collider.
#[derive(Component, Debug, Clone, Copy)]
pub struct Car {
    pub speed: f32,
    pub heading: CarHeading,
}

impl Car {
    pub fn velocity(&self) -> f32 {
        self.heading.sign() * self.speed
    }
}
