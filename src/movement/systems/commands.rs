//! Movement domain: externally driven runner commands.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{
    Player, RunDirection, RunIntents, RunnerState, SetDirectionEvent, SetStartedEvent,
};

pub fn set_direction(state: &mut RunnerState, direction: RunDirection) {
    state.direction = direction;
}

/// Starting goes through the start intent so the next tick still performs
/// the one-time start. Stopping halts horizontal travel immediately.
pub fn set_started(
    state: &mut RunnerState,
    intents: &mut RunIntents,
    velocity: &mut Vec2,
    started: bool,
) {
    if started {
        if !state.started {
            intents.request_start();
        }
        return;
    }

    state.started = false;
    intents.start_requested = false;
    velocity.x = 0.0;
}

pub(crate) fn apply_runner_commands(
    mut direction_events: MessageReader<SetDirectionEvent>,
    mut started_events: MessageReader<SetStartedEvent>,
    mut intents: ResMut<RunIntents>,
    mut runner_query: Query<(&mut RunnerState, &mut LinearVelocity), With<Player>>,
) {
    let Ok((mut state, mut velocity)) = runner_query.single_mut() else {
        let dropped = direction_events.read().count() + started_events.read().count();
        if dropped > 0 {
            debug!("Dropped {} runner commands: no runner present", dropped);
        }
        return;
    };

    for event in direction_events.read() {
        set_direction(&mut state, event.direction);
        debug!("Runner direction set to {:?}", event.direction);
    }

    for event in started_events.read() {
        set_started(&mut state, &mut intents, &mut velocity.0, event.started);
        debug!("Runner started set to {}", event.started);
    }
}
