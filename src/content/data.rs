//! Data definitions for the gameplay tuning file.
//!
//! These structs mirror `assets/data/tuning.ron`. Every section has a
//! `Default` matching the shipped values, so a partial file (or none at all)
//! still yields a playable configuration.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::Difficulty;
use crate::kinematics::{DriveMode, JumpTiming};

/// Root of the tuning file.
#[derive(Resource, Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GameplayTuning {
    pub physics: PhysicsTuning,
    pub runner: RunnerTuning,
    pub cop: CopTuning,
    pub energy: EnergyTuning,
    pub difficulty: DifficultyTable,
    pub traffic: TrafficTuning,
    pub escape: EscapeTuning,
    pub audio: AudioTuning,
    pub level: LevelLayout,
}

// ============================================================================
// Physics
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PhysicsTuning {
    /// Vertical gravity in units/s^2
    pub gravity: f32,
    pub shell_radius: f32,
    pub min_move_distance: f32,
    pub min_ground_normal_y: f32,
    /// Fixed simulation rate
    pub tick_hz: f64,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity: -9.81,
            shell_radius: 0.01,
            min_move_distance: 0.001,
            min_ground_normal_y: 0.65,
            tick_hz: 50.0,
        }
    }
}

// ============================================================================
// Actors
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RunnerTuning {
    pub max_speed: f32,
    pub take_off_speed: f32,
    /// Upward velocity multiplier when jump is released early
    pub jump_deceleration: f32,
    pub jump_modifier: f32,
    /// Air time before grounded changes are trusted again
    pub min_jump_air_time: f32,
    pub gravity_modifier: f32,
    pub damage_cooldown: f32,
    pub drive_mode: DriveMode,
    pub size: (f32, f32),
}

impl Default for RunnerTuning {
    fn default() -> Self {
        Self {
            max_speed: 7.0,
            take_off_speed: 7.0,
            jump_deceleration: 0.5,
            jump_modifier: 1.0,
            min_jump_air_time: 0.1,
            gravity_modifier: 1.0,
            damage_cooldown: 2.0,
            drive_mode: DriveMode::Endless,
            size: (0.8, 1.6),
        }
    }
}

impl RunnerTuning {
    /// Free-roaming runners take off on the press; the endless runner waits out the air time.
    pub fn jump_timing(&self) -> JumpTiming {
        match self.drive_mode {
            DriveMode::Free => JumpTiming::Immediate,
            DriveMode::Endless => JumpTiming::AirTimeGated {
                min_air_time: self.min_jump_air_time,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CopTuning {
    pub gravity_modifier: f32,
    pub size: (f32, f32),
}

impl Default for CopTuning {
    fn default() -> Self {
        Self {
            gravity_modifier: 1.0,
            size: (0.8, 1.6),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EnergyTuning {
    pub max: f32,
    pub powerup_value: f32,
    pub loot_value: u32,
    /// Fraction of max at or below which the bar turns to warning
    pub warning_fraction: f32,
    pub critical_fraction: f32,
}

impl Default for EnergyTuning {
    fn default() -> Self {
        Self {
            max: 100.0,
            powerup_value: 25.0,
            loot_value: 15,
            warning_fraction: 0.4,
            critical_fraction: 0.25,
        }
    }
}

// ============================================================================
// Difficulty
// ============================================================================

/// Per-difficulty knobs applied on selection and on restart.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DifficultyProfile {
    pub cop_speed: f32,
    pub energy_drain: f32,
    pub obstacle_damage: f32,
    /// Seconds between cars, as (min, max)
    pub car_spawn_interval: (f32, f32),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DifficultyTable {
    pub start: Difficulty,
    pub easy: DifficultyProfile,
    pub medium: DifficultyProfile,
    pub hard: DifficultyProfile,
}

impl Default for DifficultyTable {
    fn default() -> Self {
        Self {
            start: Difficulty::Easy,
            easy: DifficultyProfile {
                cop_speed: 5.0,
                energy_drain: 1.5,
                obstacle_damage: 10.0,
                car_spawn_interval: (3.0, 6.0),
            },
            medium: DifficultyProfile {
                cop_speed: 6.0,
                energy_drain: 2.0,
                obstacle_damage: 15.0,
                car_spawn_interval: (3.0, 5.0),
            },
            hard: DifficultyProfile {
                cop_speed: 7.0,
                energy_drain: 3.0,
                obstacle_damage: 25.0,
                car_spawn_interval: (2.0, 4.0),
            },
        }
    }
}

impl DifficultyTable {
    pub fn profile(&self, difficulty: Difficulty) -> &DifficultyProfile {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }
}

// ============================================================================
// Traffic
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CarModelDef {
    pub name: String,
    pub speed: f32,
    pub size: (f32, f32),
    pub color: (f32, f32, f32),
    /// Per-model lane adjustment
    pub y_offset: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TrafficTuning {
    pub right_direction_chance: f32,
    /// Added to the model speed for cars heading right
    pub right_speed_bonus: f32,
    pub right_lane_offset: f32,
    /// Spawn distance from the camera centre
    pub spawn_x_offset: f32,
    pub road_y: f32,
    /// Every Nth car honks
    pub honk_every: u32,
    pub despawn_offset: f32,
    /// Fixed RNG seed; random per launch when absent
    pub seed: Option<u64>,
    pub models: Vec<CarModelDef>,
}

impl Default for TrafficTuning {
    fn default() -> Self {
        Self {
            right_direction_chance: 0.3,
            right_speed_bonus: 6.0,
            right_lane_offset: -0.5,
            spawn_x_offset: 12.0,
            road_y: -2.0,
            honk_every: 2,
            despawn_offset: 25.0,
            seed: None,
            models: vec![
                CarModelDef {
                    name: "sedan".to_string(),
                    speed: 5.0,
                    size: (2.4, 1.0),
                    color: (0.2, 0.4, 0.8),
                    y_offset: 0.0,
                },
                CarModelDef {
                    name: "truck".to_string(),
                    speed: 3.5,
                    size: (3.4, 1.6),
                    color: (0.6, 0.6, 0.55),
                    y_offset: 0.3,
                },
            ],
        }
    }
}

// ============================================================================
// Escape
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EscapeTuning {
    pub start_delay: f32,
    pub acceleration_time: f32,
    pub max_speed: f32,
    pub total_duration: f32,
    /// +1 drives right, -1 left
    pub direction: f32,
}

impl Default for EscapeTuning {
    fn default() -> Self {
        Self {
            start_delay: 1.0,
            acceleration_time: 2.0,
            max_speed: 15.0,
            total_duration: 4.0,
            direction: 1.0,
        }
    }
}

// ============================================================================
// Audio
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AudioTuning {
    /// Fixed RNG seed; random per launch when absent
    pub seed: Option<u64>,
    pub ambient: AmbientTuning,
    pub music: MusicTuning,
}

/// Background one-shots during gameplay, unrelated to any trigger.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AmbientTuning {
    pub first_delay: f32,
    /// Seconds between later sounds, as (min, max)
    pub interval: (f32, f32),
    /// The opening sound is picked at random from here
    pub first_sounds: Vec<String>,
    /// Played in order after the opener, wrapping around
    pub sounds: Vec<String>,
}

impl Default for AmbientTuning {
    fn default() -> Self {
        let names = |names: &[&str]| names.iter().map(|name| name.to_string()).collect();
        Self {
            first_delay: 3.0,
            interval: (15.0, 45.0),
            first_sounds: names(&["dispatch_all_units", "dispatch_robbery_in_progress"]),
            sounds: names(&["siren_distant", "street_yell", "dog_bark", "dispatch_chatter"]),
        }
    }
}

/// Track lists per screen. One is picked at random whenever the screen is entered.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MusicTuning {
    pub menu: Vec<String>,
    pub gameplay: Vec<String>,
    pub game_over: Vec<String>,
    pub victory: Vec<String>,
}

impl Default for MusicTuning {
    fn default() -> Self {
        let names = |names: &[&str]| names.iter().map(|name| name.to_string()).collect();
        Self {
            menu: names(&["menu_theme"]),
            gameplay: names(&["chase_a", "chase_b", "chase_c"]),
            game_over: names(&["busted_a", "busted_b"]),
            victory: names(&["getaway_a", "getaway_b"]),
        }
    }
}

// ============================================================================
// Level
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum PickupKind {
    /// Restores energy
    Powerup,
    /// Adds to the score
    Loot,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BlockDef {
    pub center: (f32, f32),
    pub size: (f32, f32),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PickupDef {
    pub kind: PickupKind,
    pub position: (f32, f32),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CheckpointDef {
    pub region: BlockDef,
    pub spawn: (f32, f32),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LevelLayout {
    pub runner_spawn: (f32, f32),
    pub cop_spawns: Vec<(f32, f32)>,
    pub ground: Vec<BlockDef>,
    pub obstacles: Vec<BlockDef>,
    pub pickups: Vec<PickupDef>,
    pub checkpoints: Vec<CheckpointDef>,
    pub getaway: BlockDef,
}

impl Default for LevelLayout {
    fn default() -> Self {
        let obstacle = |x: f32| BlockDef {
            center: (x, -2.5),
            size: (1.0, 1.0),
        };
        let pickup = |kind, x: f32, y: f32| PickupDef {
            kind,
            position: (x, y),
        };

        Self {
            runner_spawn: (0.0, -2.0),
            cop_spawns: vec![(-8.0, -2.0), (-11.0, -2.0)],
            ground: vec![BlockDef {
                center: (90.0, -3.5),
                size: (240.0, 1.0),
            }],
            obstacles: [14.0, 28.0, 41.0, 57.0, 70.0, 86.0, 101.0, 118.0, 133.0, 150.0]
                .into_iter()
                .map(obstacle)
                .collect(),
            pickups: vec![
                pickup(PickupKind::Loot, 14.0, -0.8),
                pickup(PickupKind::Powerup, 35.0, -2.2),
                pickup(PickupKind::Loot, 57.0, -0.8),
                pickup(PickupKind::Powerup, 78.0, -2.2),
                pickup(PickupKind::Loot, 101.0, -0.8),
                pickup(PickupKind::Powerup, 125.0, -2.2),
                pickup(PickupKind::Loot, 150.0, -0.8),
            ],
            checkpoints: vec![CheckpointDef {
                region: BlockDef {
                    center: (80.0, -1.5),
                    size: (1.0, 3.0),
                },
                spawn: (80.0, -2.0),
            }],
            getaway: BlockDef {
                center: (180.0, -2.2),
                size: (3.0, 1.6),
            },
        }
    }
}

impl BlockDef {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center.0, self.center.1)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.size.0, self.size.1)
    }
}

/// Convert a `(x, y)` pair from the tuning file.
pub fn vec2(pair: (f32, f32)) -> Vec2 {
    Vec2::new(pair.0, pair.1)
}
