//! Content domain: on-disk runner configuration.

use serde::{Deserialize, Serialize};

use crate::camera::CameraTuning;
use crate::movement::MovementTuning;
use crate::suspension::SuspensionTuning;

/// Contents of `assets/data/runner.ron`. Missing sections fall back to defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub schema_version: u32,
    /// Physics step rate in Hz
    pub fixed_hz: f64,
    pub movement: MovementTuning,
    pub suspension: SuspensionTuning,
    pub camera: CameraTuning,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            schema_version: 1,
            fixed_hz: 60.0,
            movement: MovementTuning::default(),
            suspension: SuspensionTuning::default(),
            camera: CameraTuning::default(),
        }
    }
}

impl RunnerConfig {
    /// Clamp every tunable into a usable range. Bad values never reject the file.
    pub fn sanitized(mut self) -> Self {
        if !(self.fixed_hz.is_finite() && self.fixed_hz > 0.0) {
            self.fixed_hz = Self::default().fixed_hz;
        }
        self.movement.sanitize();
        self.suspension.sanitize();
        self.camera.sanitize();
        self
    }
}
