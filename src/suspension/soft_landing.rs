//! Suspension domain: temporary gravity softening after a resume.

use bevy::prelude::*;

use crate::suspension::resources::clamp_multiplier;

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingRestore {
    deadline: f64,
    original_scale: f32,
}

/// At most one pending restoration. Starting a new soft landing replaces the
/// pending one but keeps the originally cached gravity scale.
#[derive(Resource, Debug, Default)]
pub struct SoftLanding {
    pending: Option<PendingRestore>,
}

impl SoftLanding {
    /// Begin softening at real time `now`. Returns the gravity scale to apply.
    pub fn begin(&mut self, now: f64, current_scale: f32, multiplier: f32, duration: f32) -> f32 {
        let original_scale = match self.pending.take() {
            Some(previous) => previous.original_scale,
            None => current_scale,
        };

        self.pending = Some(PendingRestore {
            deadline: now + f64::from(duration.max(0.0)),
            original_scale,
        });

        original_scale * clamp_multiplier(multiplier)
    }

    /// Yields the original scale once the deadline has passed, then goes idle.
    pub fn poll(&mut self, now: f64) -> Option<f32> {
        match self.pending {
            Some(pending) if now >= pending.deadline => {
                self.pending = None;
                Some(pending.original_scale)
            }
            _ => None,
        }
    }

    /// Forget any pending restoration. Used when the runner is missing at resume.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
