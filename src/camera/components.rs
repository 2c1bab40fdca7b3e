//! Camera domain: follow state and per-segment bias zones.

use bevy::prelude::*;

#[derive(Component, Debug, Default)]
pub struct CameraFollow {
    pub target: Option<Entity>,
    /// One automatic lookup per lost target, never one per frame
    pub discovery_attempted: bool,
    /// Look ahead to the right (true) or left (false)
    pub prefer_right: bool,
}

impl CameraFollow {
    pub fn new(prefer_right: bool) -> Self {
        Self {
            target: None,
            discovery_attempted: false,
            prefer_right,
        }
    }
}

/// Level segment that sets the camera's look-ahead side while the target is inside.
#[derive(Component, Debug, Clone, Copy)]
pub struct CameraBiasZone {
    pub min_x: f32,
    pub max_x: f32,
    pub prefer_right: bool,
}

impl CameraBiasZone {
    pub fn contains(&self, x: f32) -> bool {
        x >= self.min_x && x <= self.max_x
    }
}
