//! Core domain: run flow state, shared resources and plugin wiring.

mod events;
mod resources;
mod state;
mod systems;

pub use events::PlayerDiedEvent;
pub use resources::UiFocus;
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{log_run_entered, transition_to_run};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<UiFocus>()
            .add_message::<PlayerDiedEvent>()
            .add_systems(Startup, transition_to_run)
            .add_systems(OnEnter(GameState::Run), log_run_entered);
    }
}
