//! Camera domain: follow tuning and clamped bounds.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::level::LevelExtents;

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraTuning {
    /// Horizontal look-ahead added in the preferred direction
    pub lateral_bias: f32,
    /// Exponential ease time constant in seconds (0 snaps)
    pub smoothing_time: f32,
    /// Kept between the visible edge and the level edge
    pub edge_padding: f32,
    /// Manual overrides for the horizontal centre limits
    pub min_center_x: Option<f32>,
    pub max_center_x: Option<f32>,
    /// Keep the camera at `locked_y` instead of following vertically
    pub lock_y: bool,
    pub locked_y: f32,
    pub min_center_y: Option<f32>,
    pub max_center_y: Option<f32>,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            lateral_bias: 160.0,
            smoothing_time: 0.15,
            edge_padding: 0.0,
            min_center_x: None,
            max_center_x: None,
            lock_y: true,
            locked_y: 0.0,
            min_center_y: None,
            max_center_y: None,
        }
    }
}

impl CameraTuning {
    pub fn sanitize(&mut self) {
        self.smoothing_time = self.smoothing_time.max(0.0);
        self.edge_padding = self.edge_padding.max(0.0);
        for limit in [
            &mut self.min_center_x,
            &mut self.max_center_x,
            &mut self.min_center_y,
            &mut self.max_center_y,
        ] {
            if limit.is_some_and(f32::is_nan) {
                *limit = None;
            }
        }
    }
}

/// Allowed range for the camera centre. Infinite ends mean unbounded.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CameraBounds {
    pub min_center_x: f32,
    pub max_center_x: f32,
    pub min_center_y: f32,
    pub max_center_y: f32,
}

impl Default for CameraBounds {
    fn default() -> Self {
        Self {
            min_center_x: f32::NEG_INFINITY,
            max_center_x: f32::INFINITY,
            min_center_y: f32::NEG_INFINITY,
            max_center_y: f32::INFINITY,
        }
    }
}

impl CameraBounds {
    /// Build bounds from manual overrides, falling back to level extents
    /// minus half the visible width and the padding. A level narrower than
    /// the view pins the centre to the level's midpoint.
    pub fn compute(
        extents: Option<&LevelExtents>,
        half_view_width: f32,
        tuning: &CameraTuning,
    ) -> Self {
        let inset = half_view_width.max(0.0) + tuning.edge_padding;

        let mut min_x = tuning
            .min_center_x
            .or_else(|| extents.map(|e| e.min_x + inset))
            .unwrap_or(f32::NEG_INFINITY);
        let mut max_x = tuning
            .max_center_x
            .or_else(|| extents.map(|e| e.max_x - inset))
            .unwrap_or(f32::INFINITY);

        if min_x > max_x {
            let mid = match extents {
                Some(e) => e.center_x(),
                None => (min_x + max_x) * 0.5,
            };
            min_x = mid;
            max_x = mid;
        }

        let min_y = tuning.min_center_y.unwrap_or(f32::NEG_INFINITY);
        let max_y = tuning.max_center_y.unwrap_or(f32::INFINITY).max(min_y);

        Self {
            min_center_x: min_x,
            max_center_x: max_x,
            min_center_y: min_y,
            max_center_y: max_y,
        }
    }

    pub fn clamp_x(&self, x: f32) -> f32 {
        x.clamp(self.min_center_x, self.max_center_x)
    }

    pub fn clamp_y(&self, y: f32) -> f32 {
        y.clamp(self.min_center_y, self.max_center_y)
    }
}
