//! Movement domain: grounded probe and hazard contact forwarding.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::PlayerDiedEvent;
use crate::movement::{GameLayer, Hazard, MovementTuning, Player};

/// Length of the downward grounded probe cast from the body centre.
pub fn ground_probe_length(half_height: f32, margin: f32) -> f32 {
    half_height + margin.max(0.0)
}

/// Whether solid ground lies within probe range under `origin`.
/// Pure query, safe to call mid-tick.
pub fn is_grounded(
    spatial_query: &SpatialQuery,
    origin: Vec2,
    half_height: f32,
    tuning: &MovementTuning,
) -> bool {
    // Filter to only hit Ground layer entities (not hazards or the runner)
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    spatial_query
        .cast_ray(
            origin,
            Dir2::NEG_Y,
            ground_probe_length(half_height, tuning.ground_probe_margin),
            true,
            &ground_filter,
        )
        .is_some()
}

/// Forward the first terminal contact of the frame as a single death signal.
pub(crate) fn forward_hazard_contacts(
    mut collision_events: MessageReader<CollisionStart>,
    player_query: Query<(), With<Player>>,
    hazard_query: Query<&Hazard>,
    mut died_events: MessageWriter<PlayerDiedEvent>,
) {
    let mut reported = false;

    for event in collision_events.read() {
        if reported {
            continue;
        }

        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player_entity, other) in pairs {
            if !player_query.contains(player_entity) {
                continue;
            }
            let Ok(hazard) = hazard_query.get(other) else {
                continue;
            };

            info!("Runner hit {:?} hazard", hazard.0);
            died_events.write(PlayerDiedEvent { kind: hazard.0 });
            reported = true;
            break;
        }
    }
}
