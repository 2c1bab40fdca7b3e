//! Level domain: course geometry, level extents and the respawn policy.

mod resources;
pub(crate) mod spawn;
mod systems;

#[cfg(test)]
mod tests;

pub use resources::{LevelExtents, SpawnPoint};

use bevy::prelude::*;

use crate::core::GameState;
use crate::level::spawn::spawn_level;
use crate::level::systems::respawn_after_death;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpawnPoint>()
            .add_systems(OnEnter(GameState::Run), spawn_level)
            .add_systems(
                Update,
                respawn_after_death.run_if(in_state(GameState::Run)),
            );
    }
}
