//! Level domain: per-scene geometry facts other domains read.

use bevy::prelude::*;

/// Horizontal extent of the current level in world units.
/// Published once at scene entry; the camera derives its bounds from it.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct LevelExtents {
    pub min_x: f32,
    pub max_x: f32,
}

impl LevelExtents {
    pub fn new(min_x: f32, max_x: f32) -> Self {
        Self {
            min_x: min_x.min(max_x),
            max_x: max_x.max(min_x),
        }
    }

    pub fn center_x(&self) -> f32 {
        (self.min_x + self.max_x) * 0.5
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }
}

/// Where the runner is placed at scene entry and after a death.
#[derive(Resource, Debug, Clone, Copy)]
pub struct SpawnPoint {
    pub position: Vec2,
}

impl Default for SpawnPoint {
    fn default() -> Self {
        Self {
            position: Vec2::new(-560.0, -200.0),
        }
    }
}
