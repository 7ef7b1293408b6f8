//! Combat domain: enemy health, dash strike resolution and death signals.

mod components;
mod events;
mod systems;


pub use components::{Enemy, EnemyArchetype, Health, RailPosition};
pub use events::{DashStrikeEvent, EnemyDiedEvent, PlayerKilledEvent};

use bevy::prelude::*;

use crate::combat::systems::{apply_dash_strikes, despawn_dead_enemies};
use crate::core::TickSet;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<DashStrikeEvent>()
            .add_message::<EnemyDiedEvent>()
            .add_message::<PlayerKilledEvent>()
            .add_systems(FixedUpdate, apply_dash_strikes.in_set(TickSet::Combat))
            .add_systems(FixedUpdate, despawn_dead_enemies.in_set(TickSet::Census));
    }
}
