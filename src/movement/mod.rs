//! Movement domain: rail-constrained locomotion, jumping and the dash attack.

mod bootstrap;
mod components;
mod curve;
mod dash;
mod hit_registry;
mod locomotion;
mod probe;
mod resources;
mod systems;
mod track;


pub use components::{AnimatorParams, Facing, GameLayer, Ground, Locomotion, Player, PlayerState};
pub use curve::EasingCurve;
pub use dash::{DashStep, DashTrajectory};
pub use hit_registry::HitRegistry;
pub use locomotion::{
    Collaborators, CombatLocomotion, LocomotionRuntime, LocomotionSignal, TickReport,
};
pub use probe::{AreaProbe, DamageSink, ProbeMask, ProbeQuery};
pub use resources::{LocomotionParams, MovementInput};
pub use track::{BoundaryService, RailTrack, TrackCursor};

use bevy::prelude::*;

use crate::content::ContentLoadSet;
use crate::core::TickSet;
use crate::movement::bootstrap::bootstrap_player_from_data;
use crate::movement::systems::{advance_locomotion, handle_player_killed, read_input};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .add_systems(Startup, bootstrap_player_from_data.after(ContentLoadSet))
            .add_systems(Update, read_input)
            .add_systems(
                FixedUpdate,
                (handle_player_killed, advance_locomotion)
                    .chain()
                    .in_set(TickSet::Locomotion),
            );
    }
}
