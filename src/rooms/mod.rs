//! Rooms domain: rail regions, their enemy census and the boundaries that
//! gate progress.

mod events;
mod gate;
mod spawn;
mod systems;

#[cfg(test)]
mod tests;

pub use events::{BoundaryLiftedEvent, RegionsActivatedEvent};
pub use gate::{Boundary, BoundaryGate, EnemySpawner, Region};
pub use spawn::SpawnRng;

use bevy::prelude::*;

use crate::content::ContentLoadSet;
use crate::core::TickSet;
use crate::rooms::systems::{activate_pending_regions, handle_enemy_deaths, setup_boundary_gate};

pub struct RoomsPlugin;

impl Plugin for RoomsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<BoundaryLiftedEvent>()
            .add_message::<RegionsActivatedEvent>()
            .add_systems(Startup, setup_boundary_gate.after(ContentLoadSet))
            .add_systems(FixedUpdate, activate_pending_regions.in_set(TickSet::Spawn))
            .add_systems(FixedUpdate, handle_enemy_deaths.in_set(TickSet::Census));
    }
}
