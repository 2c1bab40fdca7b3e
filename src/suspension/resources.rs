//! Suspension domain: resume protocol tuning.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Soft-landing multipliers outside this range are clamped into it.
pub const MIN_SOFT_LANDING_MULTIPLIER: f32 = 0.05;
pub const MAX_SOFT_LANDING_MULTIPLIER: f32 = 1.0;

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SuspensionTuning {
    /// First number shown by the resume countdown
    pub countdown_from: u32,
    /// Real-time seconds between countdown steps
    pub countdown_interval: f32,
    /// Suppression window armed right before the clock resumes
    pub resume_ignore_input: f32,
    /// Gravity scale factor while the soft landing is active (<1 falls slower)
    pub soft_landing_multiplier: f32,
    /// Real-time seconds the soft landing lasts
    pub soft_landing_duration: f32,
    /// Downward speed given to an airborne runner on resume
    pub airborne_nudge: f32,
}

impl Default for SuspensionTuning {
    fn default() -> Self {
        Self {
            countdown_from: 3,
            countdown_interval: 1.0,
            resume_ignore_input: 0.12,
            soft_landing_multiplier: 0.35,
            soft_landing_duration: 0.6,
            airborne_nudge: 60.0,
        }
    }
}

impl SuspensionTuning {
    pub fn sanitize(&mut self) {
        self.countdown_interval = self.countdown_interval.max(0.0);
        self.resume_ignore_input = self.resume_ignore_input.max(0.0);
        self.soft_landing_duration = self.soft_landing_duration.max(0.0);
        self.airborne_nudge = self.airborne_nudge.max(0.0);
        self.soft_landing_multiplier = clamp_multiplier(self.soft_landing_multiplier);
    }
}

pub fn clamp_multiplier(multiplier: f32) -> f32 {
    if multiplier.is_nan() {
        return MAX_SOFT_LANDING_MULTIPLIER;
    }
    multiplier.clamp(MIN_SOFT_LANDING_MULTIPLIER, MAX_SOFT_LANDING_MULTIPLIER)
}
