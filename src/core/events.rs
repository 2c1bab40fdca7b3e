//! Core domain: events crossing from the runner core to game flow.

use bevy::ecs::message::Message;

use crate::movement::HazardKind;

/// Fired when the runner touches terminal geometry.
/// What death means (reload, respawn) is decided by whoever reads it.
#[derive(Debug, Clone, Copy)]
pub struct PlayerDiedEvent {
    pub kind: HazardKind,
}

impl Message for PlayerDiedEvent {}
