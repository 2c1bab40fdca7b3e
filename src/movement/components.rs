//! Movement domain: components and physics layers for the runner.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Walkable surfaces the grounded probe can hit
    Ground,
    /// The runner itself
    Player,
    /// Terminal geometry (touching it ends the attempt)
    Hazard,
}

/// Well-known marker for the single controllable runner.
#[derive(Component, Debug)]
pub struct Player;

/// Travel sign of the runner. Only changed by an explicit command, never by input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunDirection {
    #[default]
    Right,
    Left,
}

impl RunDirection {
    pub fn sign(self) -> f32 {
        match self {
            RunDirection::Right => 1.0,
            RunDirection::Left => -1.0,
        }
    }
}

#[derive(Component, Debug, Default)]
pub struct RunnerState {
    pub direction: RunDirection,
    /// Constant horizontal travel is active. Set by the first accepted start.
    pub started: bool,
}

impl RunnerState {
    pub fn new(direction: RunDirection) -> Self {
        Self {
            direction,
            started: false,
        }
    }

    /// Horizontal velocity the runner must hold while started.
    pub fn travel_velocity(&self, move_speed: f32) -> f32 {
        self.direction.sign() * move_speed
    }
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Collision category of terminal geometry, resolved when the level is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HazardKind {
    Obstacle,
    Ground,
    Ceiling,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct Hazard(pub HazardKind);
