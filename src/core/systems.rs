//! Core domain: core run flow systems.

use bevy::prelude::*;

use crate::core::state::GameState;

pub(crate) fn transition_to_run(mut game_state: ResMut<NextState<GameState>>) {
    game_state.set(GameState::Run);
}

pub(crate) fn log_run_entered() {
    info!("Entering run");
}
