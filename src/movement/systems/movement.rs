//! Movement domain: fixed-rate physics step for the runner.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::camera::visible_top_edge;
use crate::movement::boundary::{BoundaryContact, VerticalBounds, clamp_vertical, effective_ceiling};
use crate::movement::{MovementTuning, Player, RunIntents, RunStartedEvent, RunnerState};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// `started` flipped to true during this tick
    pub started_now: bool,
    pub launched: bool,
    pub contact: BoundaryContact,
}

/// One simulation tick for the runner body, in a fixed order:
/// start, horizontal travel, launch, ceiling, floor.
pub fn step_runner(
    state: &mut RunnerState,
    intents: &mut RunIntents,
    position: &mut Vec2,
    velocity: &mut Vec2,
    half_height: f32,
    bounds: VerticalBounds,
    tuning: &MovementTuning,
) -> StepOutcome {
    let mut outcome = StepOutcome::default();

    if intents.start_requested {
        intents.start_requested = false;
        if !state.started {
            state.started = true;
            outcome.started_now = true;
        }
        velocity.x = state.travel_velocity(tuning.move_speed);
    }

    if state.started {
        velocity.x = state.travel_velocity(tuning.move_speed);
    }

    if intents.jump_requested {
        intents.jump_requested = false;
        velocity.y = tuning.launch_velocity;
        outcome.launched = true;
    }

    let clamped = clamp_vertical(
        *position,
        *velocity,
        half_height,
        bounds,
        tuning.ceiling_separation,
    );
    *position = clamped.position;
    *velocity = clamped.velocity;
    outcome.contact = clamped.contact;

    outcome
}

/// Half height of the runner's box collider, or the tuned one for other shapes.
pub fn body_half_height(collider: &Collider, tuning: &MovementTuning) -> f32 {
    match collider.shape_scaled().as_cuboid() {
        Some(c) => c.half_extents.y,
        None => tuning.half_height(),
    }
}

pub(crate) fn apply_runner_step(
    tuning: Res<MovementTuning>,
    mut intents: ResMut<RunIntents>,
    mut camera_warned: Local<bool>,
    camera_query: Query<(&Transform, &Projection), With<Camera2d>>,
    mut runner_query: Query<
        (&mut RunnerState, &mut Position, &mut LinearVelocity, &Collider),
        With<Player>,
    >,
    mut started_events: MessageWriter<RunStartedEvent>,
) {
    let Ok((mut state, mut position, mut velocity, collider)) = runner_query.single_mut() else {
        return;
    };

    // Re-derived every tick: the camera keeps moving.
    let camera_top = if tuning.camera_relative_ceiling {
        let top = camera_query
            .single()
            .ok()
            .and_then(|(transform, projection)| visible_top_edge(transform, projection));
        if top.is_none() && !*camera_warned {
            warn!("No orthographic camera for the runner ceiling, using fixed ceiling");
            *camera_warned = true;
        }
        top
    } else {
        None
    };

    let bounds = VerticalBounds {
        ceiling: effective_ceiling(tuning.ceiling_y, camera_top, tuning.ceiling_padding),
        floor: tuning.floor_y,
    };

    let half_height = body_half_height(collider, &tuning);

    let mut pos = position.0;
    let mut vel = velocity.0;
    let outcome = step_runner(
        &mut state,
        &mut intents,
        &mut pos,
        &mut vel,
        half_height,
        bounds,
        &tuning,
    );
    position.0 = pos;
    velocity.0 = vel;

    if outcome.started_now {
        info!("Run started: direction={:?}", state.direction);
        started_events.write(RunStartedEvent);
    }
    if outcome.launched {
        debug!("Launch: vy={}", velocity.y);
    }
}
