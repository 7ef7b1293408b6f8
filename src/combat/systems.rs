//! Combat domain: applying dash strikes and retiring dead enemies.

use bevy::prelude::*;

use crate::combat::components::{Enemy, Health};
use crate::combat::events::{DashStrikeEvent, EnemyDiedEvent};

pub(crate) fn apply_dash_strikes(
    mut strike_events: MessageReader<DashStrikeEvent>,
    mut death_events: MessageWriter<EnemyDiedEvent>,
    mut query: Query<&mut Health, With<Enemy>>,
) {
    for event in strike_events.read() {
        debug!(
            "Dash strike from {:?}: {} to {} targets",
            event.source,
            event.amount,
            event.targets.len()
        );
        for &target in &event.targets {
            // Targets may already be gone; they simply miss
            let Ok(mut health) = query.get_mut(target) else {
                continue;
            };
            if health.strike(event.amount) {
                death_events.write(EnemyDiedEvent { entity: target });
            }
        }
    }
}

pub(crate) fn despawn_dead_enemies(
    mut commands: Commands,
    mut death_events: MessageReader<EnemyDiedEvent>,
    enemy_query: Query<Entity, With<Enemy>>,
) {
    for event in death_events.read() {
        if let Ok(entity) = enemy_query.get(event.entity) {
            commands.entity(entity).despawn();
        }
    }
}
