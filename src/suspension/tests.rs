//! Suspension domain: tests for the pause/resume state machine and soft landing.

use bevy::prelude::Vec2;

use super::{
    ResumeBody, SoftLanding, SuspendPhase, SuspendStep, SuspensionState, SuspensionTuning,
    clamp_multiplier, prepare_resume,
};
use crate::movement::{InputSuppression, RunIntents};

fn paused_state() -> SuspensionState {
    let mut state = SuspensionState::default();
    assert!(state.request_pause());
    state
}

/// Request a resume and let the request frame pass.
fn resume(state: &mut SuspensionState, tuning: &SuspensionTuning) -> SuspendStep {
    let first = state.request_resume(tuning).unwrap();
    assert_eq!(state.advance(0.016, false, tuning), None);
    first
}

/// Drive the countdown with one-second frames until the release wait.
fn run_countdown(state: &mut SuspensionState, tuning: &SuspensionTuning) -> Vec<SuspendStep> {
    let mut steps = vec![resume(state, tuning)];
    for _ in 0..tuning.countdown_from {
        if let Some(step) = state.advance(1.0, false, tuning) {
            steps.push(step);
        }
    }
    steps
}

// -----------------------------------------------------------------------------
// State machine tests
// -----------------------------------------------------------------------------

#[test]
fn test_default_is_running() {
    let state = SuspensionState::default();
    assert_eq!(state.phase(), SuspendPhase::Running);
    assert!(!state.is_paused());
}

#[test]
fn test_pause_only_from_running() {
    let mut state = paused_state();
    assert!(state.is_paused());
    assert!(!state.request_pause());
}

#[test]
fn test_resume_while_running_is_noop() {
    let mut state = SuspensionState::default();
    let tuning = SuspensionTuning::default();

    assert_eq!(state.request_resume(&tuning), None);
    assert_eq!(state.phase(), SuspendPhase::Running);
}

#[test]
fn test_countdown_steps_on_real_seconds() {
    let mut state = paused_state();
    let tuning = SuspensionTuning::default();

    assert_eq!(resume(&mut state, &tuning), SuspendStep::CountdownTick(3));
    assert!(matches!(
        state.phase(),
        SuspendPhase::CountingDown { remaining: 3, .. }
    ));

    // Half a second is not enough for the next number
    assert_eq!(state.advance(0.5, false, &tuning), None);
    assert_eq!(
        state.advance(0.5, false, &tuning),
        Some(SuspendStep::CountdownTick(2))
    );
    assert_eq!(
        state.advance(1.0, false, &tuning),
        Some(SuspendStep::CountdownTick(1))
    );
    assert_eq!(
        state.advance(1.0, false, &tuning),
        Some(SuspendStep::CountdownFinished)
    );
    assert_eq!(state.phase(), SuspendPhase::AwaitingRelease);
    assert!(state.is_paused());
}

#[test]
fn test_long_frame_advances_one_step_only() {
    let mut state = paused_state();
    let tuning = SuspensionTuning::default();
    resume(&mut state, &tuning);

    assert_eq!(
        state.advance(5.0, false, &tuning),
        Some(SuspendStep::CountdownTick(2))
    );
    // The overshoot carries into the next frame
    assert_eq!(
        state.advance(0.0, false, &tuning),
        Some(SuspendStep::CountdownTick(1))
    );
}

#[test]
fn test_resume_frame_hitch_does_not_shorten_first_step() {
    let mut state = paused_state();
    let tuning = SuspensionTuning::default();

    assert_eq!(
        state.request_resume(&tuning),
        Some(SuspendStep::CountdownTick(3))
    );
    // Same frame as the request, however long it took
    assert_eq!(state.advance(0.9, false, &tuning), None);

    assert_eq!(state.advance(0.5, false, &tuning), None);
    assert_eq!(
        state.advance(0.5, false, &tuning),
        Some(SuspendStep::CountdownTick(2))
    );
}

#[test]
fn test_zero_countdown_waits_a_frame_before_release_check() {
    let mut state = paused_state();
    let tuning = SuspensionTuning {
        countdown_from: 0,
        ..SuspensionTuning::default()
    };

    state.request_resume(&tuning);
    assert_eq!(state.advance(0.016, false, &tuning), None);
    assert_eq!(
        state.advance(0.016, false, &tuning),
        Some(SuspendStep::ReadyToPrepare)
    );
}

#[test]
fn test_release_wait_blocks_while_held() {
    let mut state = paused_state();
    let tuning = SuspensionTuning::default();
    run_countdown(&mut state, &tuning);

    for _ in 0..100 {
        assert_eq!(state.advance(0.016, true, &tuning), None);
    }
    assert_eq!(state.phase(), SuspendPhase::AwaitingRelease);

    assert_eq!(
        state.advance(0.016, false, &tuning),
        Some(SuspendStep::ReadyToPrepare)
    );
    assert_eq!(state.phase(), SuspendPhase::Preparing);
    assert!(state.is_paused());

    assert!(state.finish_resume());
    assert!(!state.is_paused());
}

#[test]
fn test_full_countdown_sequence() {
    let mut state = paused_state();
    let tuning = SuspensionTuning::default();

    let steps = run_countdown(&mut state, &tuning);

    assert_eq!(
        steps,
        vec![
            SuspendStep::CountdownTick(3),
            SuspendStep::CountdownTick(2),
            SuspendStep::CountdownTick(1),
            SuspendStep::CountdownFinished,
        ]
    );
}

#[test]
fn test_zero_countdown_goes_straight_to_release_wait() {
    let mut state = paused_state();
    let tuning = SuspensionTuning {
        countdown_from: 0,
        ..SuspensionTuning::default()
    };

    assert_eq!(
        state.request_resume(&tuning),
        Some(SuspendStep::CountdownFinished)
    );
    assert_eq!(state.phase(), SuspendPhase::AwaitingRelease);
}

#[test]
fn test_finish_resume_requires_preparing() {
    let mut state = paused_state();
    assert!(!state.finish_resume());
    assert!(state.is_paused());
}

// -----------------------------------------------------------------------------
// Resume preparation tests
// -----------------------------------------------------------------------------

#[test]
fn test_prepare_drops_upward_velocity_and_softens_gravity() {
    let tuning = SuspensionTuning::default();
    let mut intents = RunIntents {
        start_requested: false,
        jump_requested: true,
    };
    let mut suppression = InputSuppression::default();
    let mut soft_landing = SoftLanding::default();
    let mut velocity = Vec2::new(260.0, 400.0);
    let mut gravity_scale = 1.0;

    let report = prepare_resume(
        50.0,
        Some(ResumeBody {
            velocity: &mut velocity,
            gravity_scale: &mut gravity_scale,
            grounded: false,
        }),
        &mut intents,
        &mut suppression,
        &mut soft_landing,
        &tuning,
    );

    assert!(report.dropped_intents && report.forced_drop && report.nudged);
    assert!(intents.is_empty());
    assert!(velocity.y <= 0.0);
    assert_eq!(velocity.y, -tuning.airborne_nudge);
    assert_eq!(velocity.x, 260.0);
    assert_eq!(gravity_scale, tuning.soft_landing_multiplier);
    assert!(suppression.block_until_release);
    assert!(suppression.should_skip(50.05, false));
    assert_eq!(soft_landing.poll(51.0), Some(1.0));
}

#[test]
fn test_prepare_grounded_body_gets_no_nudge() {
    let tuning = SuspensionTuning::default();
    let mut intents = RunIntents::default();
    let mut suppression = InputSuppression::default();
    let mut soft_landing = SoftLanding::default();
    let mut velocity = Vec2::new(260.0, 0.0);
    let mut gravity_scale = 1.0;

    let report = prepare_resume(
        0.0,
        Some(ResumeBody {
            velocity: &mut velocity,
            gravity_scale: &mut gravity_scale,
            grounded: true,
        }),
        &mut intents,
        &mut suppression,
        &mut soft_landing,
        &tuning,
    );

    assert!(!report.nudged && !report.forced_drop);
    assert_eq!(velocity.y, 0.0);
}

#[test]
fn test_prepare_without_body_still_quarantines_input() {
    let tuning = SuspensionTuning::default();
    let mut intents = RunIntents {
        start_requested: true,
        jump_requested: true,
    };
    let mut suppression = InputSuppression::default();
    let mut soft_landing = SoftLanding::default();

    let report = prepare_resume(
        3.0,
        None,
        &mut intents,
        &mut suppression,
        &mut soft_landing,
        &tuning,
    );

    assert!(report.dropped_intents);
    assert!(!report.soft_landing);
    assert!(intents.is_empty());
    assert!(suppression.block_until_release);
    assert_eq!(soft_landing.poll(f64::MAX), None);
}

#[test]
fn test_prepare_without_body_drops_pending_soft_landing() {
    let tuning = SuspensionTuning::default();
    let mut soft_landing = SoftLanding::default();
    soft_landing.begin(0.0, 1.0, 0.35, 0.6);

    prepare_resume(
        0.2,
        None,
        &mut RunIntents::default(),
        &mut InputSuppression::default(),
        &mut soft_landing,
        &tuning,
    );

    assert_eq!(soft_landing.poll(10.0), None);
}

#[test]
fn test_entity_loss_does_not_block_resume() {
    let mut state = paused_state();
    let tuning = SuspensionTuning::default();
    run_countdown(&mut state, &tuning);
    assert_eq!(
        state.advance(0.016, false, &tuning),
        Some(SuspendStep::ReadyToPrepare)
    );

    prepare_resume(
        0.0,
        None,
        &mut RunIntents::default(),
        &mut InputSuppression::default(),
        &mut SoftLanding::default(),
        &tuning,
    );

    assert!(state.finish_resume());
    assert_eq!(state.phase(), SuspendPhase::Running);
}

// -----------------------------------------------------------------------------
// Soft landing tests
// -----------------------------------------------------------------------------

#[test]
fn test_soft_landing_restores_once() {
    let mut soft_landing = SoftLanding::default();

    let softened = soft_landing.begin(0.0, 2.0, 0.5, 0.6);
    assert_eq!(softened, 1.0);

    assert_eq!(soft_landing.poll(0.3), None);
    assert_eq!(soft_landing.poll(0.61), Some(2.0));
    assert_eq!(soft_landing.poll(0.7), None);
}

#[test]
fn test_soft_landing_preemption_keeps_original() {
    let mut soft_landing = SoftLanding::default();

    // First resume: scale 1.0 softened to 0.35
    let first = soft_landing.begin(0.0, 1.0, 0.35, 0.6);
    // Second resume before the first restore: current scale is the softened one
    let second = soft_landing.begin(0.4, first, 0.5, 0.6);

    assert_eq!(second, 0.5);

    // The first deadline no longer fires
    assert_eq!(soft_landing.poll(0.6), None);

    let mut restores = Vec::new();
    for frame in 0..100 {
        if let Some(scale) = soft_landing.poll(0.6 + frame as f64 * 0.016) {
            restores.push(scale);
        }
    }
    assert_eq!(restores, vec![1.0]);
}

#[test]
fn test_soft_landing_zero_duration_restores_next_poll() {
    let mut soft_landing = SoftLanding::default();
    soft_landing.begin(4.0, 1.0, 0.35, -2.0);

    assert_eq!(soft_landing.poll(4.0), Some(1.0));
}

#[test]
fn test_soft_landing_cancel() {
    let mut soft_landing = SoftLanding::default();
    soft_landing.begin(0.0, 1.0, 0.35, 1.0);
    soft_landing.cancel();

    assert_eq!(soft_landing.poll(5.0), None);
}

#[test]
fn test_multiplier_clamped_to_sane_range() {
    assert_eq!(clamp_multiplier(-1.0), 0.05);
    assert_eq!(clamp_multiplier(0.4), 0.4);
    assert_eq!(clamp_multiplier(3.0), 1.0);
    assert_eq!(clamp_multiplier(f32::NAN), 1.0);
}
