//! Combat domain: combat-related events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// One completed dash: a fixed amount applied to every target it registered.
#[derive(Debug, Clone)]
pub struct DashStrikeEvent {
    pub source: Entity,
    pub amount: f32,
    pub targets: Vec<Entity>,
}

impl Message for DashStrikeEvent {}

/// Emitted once when an enemy's health reaches zero
#[derive(Debug)]
pub struct EnemyDiedEvent {
    pub entity: Entity,
}

impl Message for EnemyDiedEvent {}

/// External death signal for the player
#[derive(Debug)]
pub struct PlayerKilledEvent {
    pub player: Entity,
}

impl Message for PlayerKilledEvent {}
