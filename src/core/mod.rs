//! Core domain: fixed tick cadence and cross-domain system ordering.

mod systems;

use bevy::prelude::*;

use crate::core::systems::setup_camera;

/// Simulation ticks per second
pub const TICK_HZ: f64 = 60.0;

/// Per-tick ordering shared by every domain. Region spawns land before the
/// player moves, dash strikes resolve after the trajectory advances, and the
/// census sees deaths from the same tick.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSet {
    Spawn,
    Locomotion,
    Combat,
    Census,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
            .add_systems(Startup, setup_camera)
            .configure_sets(
                FixedUpdate,
                (
                    TickSet::Spawn,
                    TickSet::Locomotion,
                    TickSet::Combat,
                    TickSet::Census,
                )
                    .chain(),
            );
    }
}
