//! Movement domain: vertical boundary clamping for the runner body.

use bevy::prelude::*;

/// Vertical limits expressed as edges: `ceiling` bounds the top edge,
/// `floor` bounds the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalBounds {
    pub ceiling: f32,
    pub floor: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundaryContact {
    pub ceiling: bool,
    pub floor: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clamped {
    pub position: Vec2,
    pub velocity: Vec2,
    pub contact: BoundaryContact,
}

/// Correct a body centre and velocity against `bounds`.
///
/// The ceiling is resolved first. Hitting it snaps the top edge onto the
/// ceiling and leaves the body moving down by at least `separation`.
/// Hitting the floor snaps the bottom edge onto it and cancels any downward
/// speed. An in-bounds body comes back untouched.
pub fn clamp_vertical(
    position: Vec2,
    velocity: Vec2,
    half_height: f32,
    bounds: VerticalBounds,
    separation: f32,
) -> Clamped {
    let mut position = position;
    let mut velocity = velocity;
    let mut contact = BoundaryContact::default();

    if position.y + half_height > bounds.ceiling {
        position.y = bounds.ceiling - half_height;
        velocity.y = velocity.y.min(-separation);
        contact.ceiling = true;
    }

    if position.y - half_height < bounds.floor {
        position.y = bounds.floor + half_height;
        if velocity.y < 0.0 {
            velocity.y = 0.0;
        }
        contact.floor = true;
    }

    Clamped {
        position,
        velocity,
        contact,
    }
}

/// Ceiling for the current tick. With a visible camera top edge the ceiling
/// follows the camera, never dropping below the fixed value.
pub fn effective_ceiling(fixed_ceiling: f32, camera_top: Option<f32>, padding: f32) -> f32 {
    match camera_top {
        Some(top) => (top - padding).max(fixed_ceiling),
        None => fixed_ceiling,
    }
}
