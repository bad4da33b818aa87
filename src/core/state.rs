//! Core domain: game state definitions for the run flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    Boot,
    Gameplay,
    GameOver,
    LevelComplete,
}

impl GameState {
    /// States the restart key can leave from.
    pub fn is_finished(&self) -> bool {
        matches!(self, GameState::GameOver | GameState::LevelComplete)
    }
}
