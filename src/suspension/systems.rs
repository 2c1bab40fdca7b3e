//! Suspension domain: systems driving the pause/resume timeline.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::UiFocus;
use crate::movement::{
    InputSuppression, MovementTuning, Player, RunIntents, RunnerButtons, body_half_height,
    is_grounded,
};
use crate::suspension::controller::{ResumeBody, SuspendStep, SuspensionState, prepare_resume};
use crate::suspension::events::{
    CountdownTickEvent, PauseRequestedEvent, ResumeRequestedEvent, SimulationResumedEvent,
};
use crate::suspension::resources::SuspensionTuning;
use crate::suspension::soft_landing::SoftLanding;

/// Run condition: the physics step may only run while this holds.
pub fn simulation_running(state: Res<SuspensionState>) -> bool {
    !state.is_paused()
}

pub(crate) fn handle_suspension_requests(
    mut pause_events: MessageReader<PauseRequestedEvent>,
    mut resume_events: MessageReader<ResumeRequestedEvent>,
    tuning: Res<SuspensionTuning>,
    mut state: ResMut<SuspensionState>,
    mut virtual_time: ResMut<Time<Virtual>>,
    mut intents: ResMut<RunIntents>,
    mut ui_focus: ResMut<UiFocus>,
    mut countdown_events: MessageWriter<CountdownTickEvent>,
) {
    for _ in pause_events.read() {
        if state.request_pause() {
            virtual_time.pause();
            info!("Simulation paused");
        } else {
            debug!("Pause ignored in phase {:?}", state.phase());
        }
    }

    for _ in resume_events.read() {
        let Some(step) = state.request_resume(&tuning) else {
            debug!("Resume ignored in phase {:?}", state.phase());
            continue;
        };

        // Clicks queued while the pause menu was up must not fire
        intents.clear();
        info!("Resume requested, counting down");
        publish_step(step, &mut ui_focus, &mut countdown_events);
    }
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn advance_suspension(
    real_time: Res<Time<Real>>,
    buttons: RunnerButtons,
    tuning: Res<SuspensionTuning>,
    movement_tuning: Res<MovementTuning>,
    mut state: ResMut<SuspensionState>,
    mut virtual_time: ResMut<Time<Virtual>>,
    mut intents: ResMut<RunIntents>,
    mut suppression: ResMut<InputSuppression>,
    mut soft_landing: ResMut<SoftLanding>,
    mut ui_focus: ResMut<UiFocus>,
    spatial_query: SpatialQuery,
    mut runner_query: Query<
        (&Position, &Collider, &mut LinearVelocity, &mut GravityScale),
        With<Player>,
    >,
    mut countdown_events: MessageWriter<CountdownTickEvent>,
    mut resumed_events: MessageWriter<SimulationResumedEvent>,
) {
    let Some(step) = state.advance(real_time.delta_secs(), buttons.any_held(), &tuning) else {
        return;
    };

    if step != SuspendStep::ReadyToPrepare {
        publish_step(step, &mut ui_focus, &mut countdown_events);
        return;
    }

    let now = real_time.elapsed_secs_f64();
    let report = match runner_query.single_mut() {
        Ok((position, collider, mut velocity, mut gravity_scale)) => {
            let grounded = is_grounded(
                &spatial_query,
                position.0,
                body_half_height(collider, &movement_tuning),
                &movement_tuning,
            );
            let mut vel = velocity.0;
            let mut scale = gravity_scale.0;
            let report = prepare_resume(
                now,
                Some(ResumeBody {
                    velocity: &mut vel,
                    gravity_scale: &mut scale,
                    grounded,
                }),
                &mut intents,
                &mut suppression,
                &mut soft_landing,
                &tuning,
            );
            velocity.0 = vel;
            gravity_scale.0 = scale;
            report
        }
        Err(_) => {
            warn!("Runner missing at resume, skipping body preparation");
            prepare_resume(
                now,
                None,
                &mut intents,
                &mut suppression,
                &mut soft_landing,
                &tuning,
            )
        }
    };
    debug!("Resume prepared: {:?}", report);

    // Gravity override is already on the body, so the first tick sees it
    state.finish_resume();
    virtual_time.unpause();
    resumed_events.write(SimulationResumedEvent);
    info!("Simulation resumed");
}

fn publish_step(
    step: SuspendStep,
    ui_focus: &mut UiFocus,
    countdown_events: &mut MessageWriter<CountdownTickEvent>,
) {
    match step {
        SuspendStep::CountdownTick(remaining) => {
            info!("Resuming in {}", remaining);
            countdown_events.write(CountdownTickEvent { remaining });
        }
        SuspendStep::CountdownFinished => {
            ui_focus.clear();
            countdown_events.write(CountdownTickEvent { remaining: 0 });
            debug!("Countdown finished, waiting for button release");
        }
        SuspendStep::ReadyToPrepare => {}
    }
}

/// Restore the cached gravity scale once the soft landing expires.
/// Runs on real time, so it fires even if another pause has started.
pub(crate) fn expire_soft_landing(
    real_time: Res<Time<Real>>,
    mut soft_landing: ResMut<SoftLanding>,
    mut runner_query: Query<&mut GravityScale, With<Player>>,
) {
    let Some(original) = soft_landing.poll(real_time.elapsed_secs_f64()) else {
        return;
    };

    match runner_query.single_mut() {
        Ok(mut gravity_scale) => {
            gravity_scale.0 = original;
            debug!("Soft landing over, gravity scale restored to {}", original);
        }
        Err(_) => warn!("Runner missing when soft landing expired"),
    }
}

/// Escape toggles pause as a stand-in for the pause menu.
#[cfg(feature = "dev-tools")]
pub(crate) fn pause_hotkey(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<SuspensionState>,
    mut pause_events: MessageWriter<PauseRequestedEvent>,
    mut resume_events: MessageWriter<ResumeRequestedEvent>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }

    if state.is_paused() {
        resume_events.write(ResumeRequestedEvent);
    } else {
        pause_events.write(PauseRequestedEvent);
    }
}
