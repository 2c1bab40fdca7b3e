//! Movement domain: tuning, intent and input suppression resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    /// Constant horizontal speed while the run is active
    pub move_speed: f32,
    /// Vertical velocity written by a launch (overwrites, never adds)
    pub launch_velocity: f32,
    pub gravity: f32,
    pub body_width: f32,
    pub body_height: f32,
    /// Lowest world y the runner's bottom edge may reach
    pub floor_y: f32,
    /// Fixed limit for the runner's top edge, also the minimum for the camera-relative one
    pub ceiling_y: f32,
    /// Derive the ceiling from the camera's visible top edge each tick
    pub camera_relative_ceiling: bool,
    pub ceiling_padding: f32,
    /// Downward speed applied after hitting the ceiling so the body separates from it
    pub ceiling_separation: f32,
    /// Extra probe length below the runner's feet for grounded checks
    pub ground_probe_margin: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 260.0,
            launch_velocity: 520.0,
            gravity: 1400.0,
            body_width: 28.0,
            body_height: 40.0,
            floor_y: -320.0,
            ceiling_y: 200.0,
            camera_relative_ceiling: true,
            ceiling_padding: 8.0,
            ceiling_separation: 20.0,
            ground_probe_margin: 4.0,
        }
    }
}

impl MovementTuning {
    pub fn half_height(&self) -> f32 {
        self.body_height * 0.5
    }

    /// Clamp tunables into usable ranges instead of rejecting them.
    pub fn sanitize(&mut self) {
        let defaults = Self::default();
        self.move_speed = positive_or(self.move_speed, defaults.move_speed);
        self.body_width = positive_or(self.body_width, defaults.body_width);
        self.body_height = positive_or(self.body_height, defaults.body_height);
        self.launch_velocity = self.launch_velocity.max(0.0);
        self.gravity = self.gravity.max(0.0);
        self.ceiling_padding = self.ceiling_padding.max(0.0);
        self.ceiling_separation = self.ceiling_separation.max(0.0);
        self.ground_probe_margin = self.ground_probe_margin.max(0.0);
        if self.ceiling_y < self.floor_y + self.body_height {
            self.ceiling_y = self.floor_y + self.body_height;
        }
    }
}

fn positive_or(value: f32, fallback: f32) -> f32 {
    if value > 0.0 { value } else { fallback }
}

/// Single-slot mailbox between input capture and the physics step.
/// A second request before the next tick coalesces with the first.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunIntents {
    pub start_requested: bool,
    pub jump_requested: bool,
}

impl RunIntents {
    pub fn request_start(&mut self) {
        self.start_requested = true;
    }

    pub fn request_jump(&mut self) {
        self.jump_requested = true;
    }

    /// Drop anything captured but not yet consumed.
    pub fn clear(&mut self) {
        self.start_requested = false;
        self.jump_requested = false;
    }

    pub fn is_empty(&self) -> bool {
        !self.start_requested && !self.jump_requested
    }
}

/// Time window (on the real clock) during which otherwise valid input is ignored.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct InputSuppression {
    pub ignore_until: f64,
    pub block_until_release: bool,
}

impl InputSuppression {
    pub fn ignore_for_seconds(&mut self, now: f64, duration: f32) {
        self.ignore_until = now + f64::from(duration.max(0.0));
        self.block_until_release = true;
    }

    /// Returns true when input sampled at `now` must be skipped.
    /// Releases the hold block once nothing is held and the window has elapsed.
    pub fn should_skip(&mut self, now: f64, any_held: bool) -> bool {
        let window_open = now < self.ignore_until;
        let skip = window_open || (self.block_until_release && any_held);

        if self.block_until_release && !any_held && !window_open {
            self.block_until_release = false;
        }

        skip
    }
}
