//! Suspension domain: requests from the UI layer and protocol notifications.

use bevy::ecs::message::Message;

#[derive(Debug, Clone, Copy)]
pub struct PauseRequestedEvent;

impl Message for PauseRequestedEvent {}

#[derive(Debug, Clone, Copy)]
pub struct ResumeRequestedEvent;

impl Message for ResumeRequestedEvent {}

/// A countdown number to display; `remaining == 0` means the countdown ended.
#[derive(Debug, Clone, Copy)]
pub struct CountdownTickEvent {
    pub remaining: u32,
}

impl Message for CountdownTickEvent {}

/// The simulation clock is running again.
#[derive(Debug, Clone, Copy)]
pub struct SimulationResumedEvent;

impl Message for SimulationResumedEvent {}
