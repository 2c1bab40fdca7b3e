//! UI domain: start prompt tied to the runner lifecycle.

mod prompt;

use bevy::prelude::*;

use crate::core::GameState;
use crate::ui::prompt::{hide_start_prompt, show_prompt_after_death, spawn_start_prompt};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Run), spawn_start_prompt)
            .add_systems(
                Update,
                (show_prompt_after_death, hide_start_prompt)
                    .chain()
                    .run_if(in_state(GameState::Run)),
            );
    }
}
