//! Level domain: death policy for the test course.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::PlayerDiedEvent;
use crate::level::resources::SpawnPoint;
use crate::movement::{Player, RunIntents, RunnerState, set_started};

/// Put the runner back at the spawn point, stopped, waiting for a new start.
pub(crate) fn respawn_after_death(
    mut died_events: MessageReader<PlayerDiedEvent>,
    spawn_point: Res<SpawnPoint>,
    mut intents: ResMut<RunIntents>,
    mut runner_query: Query<(&mut RunnerState, &mut Position, &mut LinearVelocity), With<Player>>,
) {
    let Some(event) = died_events.read().last() else {
        return;
    };

    let Ok((mut state, mut position, mut velocity)) = runner_query.single_mut() else {
        warn!("Runner died but no runner to respawn");
        return;
    };

    set_started(&mut state, &mut intents, &mut velocity.0, false);
    intents.clear();
    velocity.0 = Vec2::ZERO;
    position.0 = spawn_point.position;

    info!("Respawning runner after {:?} contact", event.kind);
}
