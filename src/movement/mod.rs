//! Movement domain: runner input capture, physics step and plugin wiring.

mod boundary;
mod components;
mod events;
mod resources;
mod systems;


pub use boundary::{BoundaryContact, Clamped, VerticalBounds, clamp_vertical, effective_ceiling};
pub use components::{GameLayer, Ground, Hazard, HazardKind, Player, RunDirection, RunnerState};
pub use events::{RunStartedEvent, SetDirectionEvent, SetStartedEvent};
pub use resources::{InputSuppression, MovementTuning, RunIntents};
pub use systems::collisions::{ground_probe_length, is_grounded};
pub use systems::commands::{set_direction, set_started};
pub use systems::input::{ButtonSample, CaptureGate, RunnerButtons, capture_input};
pub use systems::movement::{StepOutcome, body_half_height, step_runner};

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::systems::{
    apply_runner_commands, apply_runner_step, forward_hazard_contacts, read_input,
};
use crate::suspension::simulation_running;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<RunIntents>()
            .init_resource::<InputSuppression>()
            .add_message::<SetDirectionEvent>()
            .add_message::<SetStartedEvent>()
            .add_message::<RunStartedEvent>()
            .add_systems(
                Update,
                (apply_runner_commands, read_input, forward_hazard_contacts)
                    .chain()
                    .run_if(in_state(GameState::Run)),
            )
            .add_systems(
                FixedUpdate,
                apply_runner_step
                    .run_if(in_state(GameState::Run))
                    .run_if(simulation_running),
            );
    }
}
