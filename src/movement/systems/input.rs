//! Movement domain: input capture for start and launch intents.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::core::UiFocus;
use crate::movement::{InputSuppression, Player, RunIntents, RunnerState};
use crate::suspension::SuspensionState;

/// One frame of the two tracked buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonSample {
    pub just_pressed: bool,
    pub held: bool,
}

/// Primary (Space) and secondary (left click) action buttons.
#[derive(SystemParam)]
pub struct RunnerButtons<'w> {
    keyboard: Res<'w, ButtonInput<KeyCode>>,
    mouse: Res<'w, ButtonInput<MouseButton>>,
}

impl RunnerButtons<'_> {
    pub fn sample(&self) -> ButtonSample {
        ButtonSample {
            just_pressed: self.keyboard.just_pressed(KeyCode::Space)
                || self.mouse.just_pressed(MouseButton::Left),
            held: self.any_held(),
        }
    }

    pub fn any_held(&self) -> bool {
        self.keyboard.pressed(KeyCode::Space) || self.mouse.pressed(MouseButton::Left)
    }
}

/// External reasons to ignore input this frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaptureGate {
    pub paused: bool,
    pub ui_focused: bool,
}

/// Turn an accepted press into an intent flag. Returns whether it was accepted.
/// Never touches physics state.
pub fn capture_input(
    sample: ButtonSample,
    gate: CaptureGate,
    now: f64,
    suppression: &mut InputSuppression,
    started: bool,
    intents: &mut RunIntents,
) -> bool {
    let suppressed = suppression.should_skip(now, sample.held);
    if suppressed || gate.paused || gate.ui_focused || !sample.just_pressed {
        return false;
    }

    if started {
        intents.request_jump();
    } else {
        intents.request_start();
    }
    true
}

pub(crate) fn read_input(
    real_time: Res<Time<Real>>,
    buttons: RunnerButtons,
    suspension: Res<SuspensionState>,
    ui_focus: Res<UiFocus>,
    mut suppression: ResMut<InputSuppression>,
    mut intents: ResMut<RunIntents>,
    runner_query: Query<&RunnerState, With<Player>>,
) {
    let Ok(state) = runner_query.single() else {
        return;
    };

    let gate = CaptureGate {
        paused: suspension.is_paused(),
        ui_focused: ui_focus.focused,
    };

    let accepted = capture_input(
        buttons.sample(),
        gate,
        real_time.elapsed_secs_f64(),
        &mut suppression,
        state.started,
        &mut intents,
    );

    if accepted {
        trace!(
            "Captured intent: start={}, jump={}",
            intents.start_requested, intents.jump_requested
        );
    }
}
