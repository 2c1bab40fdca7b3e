//! Suspension domain: pause, resume countdown, input quarantine and soft landing.
//!
//! The simulation clock is bevy's virtual time. Pausing it stops `FixedUpdate`
//! and therefore the runner physics step; the countdown, release wait and
//! soft landing keep running on real time.

mod controller;
mod events;
mod resources;
mod soft_landing;
mod systems;

#[cfg(test)]
mod tests;

pub use controller::{
    PrepareReport, ResumeBody, SuspendPhase, SuspendStep, SuspensionState, prepare_resume,
};
pub use events::{
    CountdownTickEvent, PauseRequestedEvent, ResumeRequestedEvent, SimulationResumedEvent,
};
pub use resources::{SuspensionTuning, clamp_multiplier};
pub use soft_landing::SoftLanding;
pub use systems::simulation_running;

use bevy::prelude::*;

use crate::suspension::systems::{
    advance_suspension, expire_soft_landing, handle_suspension_requests,
};

pub struct SuspensionPlugin;

impl Plugin for SuspensionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SuspensionState>()
            .init_resource::<SuspensionTuning>()
            .init_resource::<SoftLanding>()
            .add_message::<PauseRequestedEvent>()
            .add_message::<ResumeRequestedEvent>()
            .add_message::<CountdownTickEvent>()
            .add_message::<SimulationResumedEvent>()
            .add_systems(
                Update,
                (
                    handle_suspension_requests,
                    advance_suspension,
                    expire_soft_landing,
                )
                    .chain(),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(
            Update,
            systems::pause_hotkey.before(handle_suspension_requests),
        );
    }
}
