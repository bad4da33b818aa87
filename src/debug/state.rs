//! Debug domain: toggles for dev tooling.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Log runner kinematics every fixed tick
    pub log_kinematics: bool,
    /// Keep energy topped up
    pub invincible: bool,
}

pub(crate) fn toggle_label(on: bool) -> &'static str {
    if on { "ON" } else { "OFF" }
}
