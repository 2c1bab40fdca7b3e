//! Suspension domain: pause/resume state machine and the resume preparation.

use bevy::prelude::*;

use crate::movement::{InputSuppression, RunIntents};
use crate::suspension::SoftLanding;
use crate::suspension::resources::SuspensionTuning;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SuspendPhase {
    #[default]
    Running,
    Paused,
    CountingDown {
        remaining: u32,
        until_next: f32,
    },
    /// Countdown done, waiting for both action buttons to be released
    AwaitingRelease,
    /// Resume actions are being applied; the clock is still frozen
    Preparing,
}

/// What one scheduler step of the controller produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuspendStep {
    /// Show this countdown number
    CountdownTick(u32),
    CountdownFinished,
    /// Buttons released; run the resume preparation now
    ReadyToPrepare,
}

/// Process-wide suspension state. Only the suspension systems mutate it.
#[derive(Resource, Debug, Default)]
pub struct SuspensionState {
    phase: SuspendPhase,
    /// The frame that accepted the resume request does not count toward the countdown
    skip_next_advance: bool,
}

impl SuspensionState {
    pub fn phase(&self) -> SuspendPhase {
        self.phase
    }

    /// True from the pause request until the resume protocol has completed.
    pub fn is_paused(&self) -> bool {
        self.phase != SuspendPhase::Running
    }

    /// Running -> Paused. Anything else is ignored.
    pub fn request_pause(&mut self) -> bool {
        if self.phase != SuspendPhase::Running {
            return false;
        }
        self.phase = SuspendPhase::Paused;
        true
    }

    /// Paused -> CountingDown. Returns the first step, or None when not paused.
    pub fn request_resume(&mut self, tuning: &SuspensionTuning) -> Option<SuspendStep> {
        if self.phase != SuspendPhase::Paused {
            return None;
        }

        self.skip_next_advance = true;

        if tuning.countdown_from == 0 {
            self.phase = SuspendPhase::AwaitingRelease;
            return Some(SuspendStep::CountdownFinished);
        }

        self.phase = SuspendPhase::CountingDown {
            remaining: tuning.countdown_from,
            until_next: tuning.countdown_interval,
        };
        Some(SuspendStep::CountdownTick(tuning.countdown_from))
    }

    /// Advance by one frame of real time. At most one step per call.
    /// The first call after an accepted resume only consumes the frame.
    pub fn advance(
        &mut self,
        real_delta: f32,
        any_held: bool,
        tuning: &SuspensionTuning,
    ) -> Option<SuspendStep> {
        if std::mem::take(&mut self.skip_next_advance) {
            return None;
        }

        match self.phase {
            SuspendPhase::CountingDown {
                remaining,
                until_next,
            } => {
                let until_next = until_next - real_delta;
                if until_next > 0.0 {
                    self.phase = SuspendPhase::CountingDown {
                        remaining,
                        until_next,
                    };
                    return None;
                }

                let remaining = remaining.saturating_sub(1);
                if remaining == 0 {
                    self.phase = SuspendPhase::AwaitingRelease;
                    Some(SuspendStep::CountdownFinished)
                } else {
                    self.phase = SuspendPhase::CountingDown {
                        remaining,
                        until_next: until_next + tuning.countdown_interval,
                    };
                    Some(SuspendStep::CountdownTick(remaining))
                }
            }
            SuspendPhase::AwaitingRelease => {
                if any_held {
                    return None;
                }
                self.phase = SuspendPhase::Preparing;
                Some(SuspendStep::ReadyToPrepare)
            }
            SuspendPhase::Running | SuspendPhase::Paused | SuspendPhase::Preparing => None,
        }
    }

    /// Preparing -> Running. The caller unfreezes the clock right after.
    pub fn finish_resume(&mut self) -> bool {
        if self.phase != SuspendPhase::Preparing {
            return false;
        }
        self.phase = SuspendPhase::Running;
        true
    }
}

/// The runner pieces the resume preparation touches.
pub struct ResumeBody<'a> {
    pub velocity: &'a mut Vec2,
    pub gravity_scale: &'a mut f32,
    pub grounded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrepareReport {
    pub dropped_intents: bool,
    pub forced_drop: bool,
    pub nudged: bool,
    pub soft_landing: bool,
}

/// Apply the resume preparation, in order: clear intents, force drop,
/// arm suppression, airborne nudge, soft landing. Without a body only the
/// input side runs and any pending soft landing is dropped.
pub fn prepare_resume(
    now: f64,
    body: Option<ResumeBody<'_>>,
    intents: &mut RunIntents,
    suppression: &mut InputSuppression,
    soft_landing: &mut SoftLanding,
    tuning: &SuspensionTuning,
) -> PrepareReport {
    let mut report = PrepareReport {
        dropped_intents: !intents.is_empty(),
        ..default()
    };
    intents.clear();

    let Some(body) = body else {
        suppression.ignore_for_seconds(now, tuning.resume_ignore_input);
        soft_landing.cancel();
        return report;
    };

    if body.velocity.y > 0.0 {
        body.velocity.y = 0.0;
        report.forced_drop = true;
    }

    suppression.ignore_for_seconds(now, tuning.resume_ignore_input);

    if !body.grounded && tuning.airborne_nudge > 0.0 {
        body.velocity.y -= tuning.airborne_nudge;
        report.nudged = true;
    }

    *body.gravity_scale = soft_landing.begin(
        now,
        *body.gravity_scale,
        tuning.soft_landing_multiplier,
        tuning.soft_landing_duration,
    );
    report.soft_landing = true;

    report
}
