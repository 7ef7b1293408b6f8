//! Rooms domain: progression events.

use bevy::ecs::message::Message;

/// A boundary's census reached zero and it no longer blocks the rail
#[derive(Debug)]
pub struct BoundaryLiftedEvent {
    pub index: usize,
}

impl Message for BoundaryLiftedEvent {}

/// A boundary's regions were spawned
#[derive(Debug)]
pub struct RegionsActivatedEvent {
    pub boundary: usize,
    pub spawned: usize,
}

impl Message for RegionsActivatedEvent {}
