//! Movement domain: runner commands and notifications.

use bevy::ecs::message::Message;

use crate::movement::RunDirection;

/// Command: change the runner's travel direction.
#[derive(Debug, Clone, Copy)]
pub struct SetDirectionEvent {
    pub direction: RunDirection,
}

impl Message for SetDirectionEvent {}

/// Command: start or stop constant horizontal travel.
#[derive(Debug, Clone, Copy)]
pub struct SetStartedEvent {
    pub started: bool,
}

impl Message for SetStartedEvent {}

/// Fired once, on the tick the run starts (hide the start prompt).
#[derive(Debug, Clone, Copy)]
pub struct RunStartedEvent;

impl Message for RunStartedEvent {}
