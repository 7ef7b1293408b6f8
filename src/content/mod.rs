//! Content domain: RON-authored locomotion tuning and track layout.

mod data;
mod error;
mod loader;
mod validation;

pub use data::{BoundaryDef, EnemyArchetypeDef, RegionDef, TrackDef};
pub use error::ConfigError;
pub(crate) use error::{require_non_negative, require_positive};
pub use loader::load_all_content;
pub use validation::validate_track;

use bevy::prelude::*;
use std::path::Path;

/// Directory holding locomotion.ron and track.ron
pub const CONTENT_DIR: &str = "assets/data";

/// Startup systems that need loaded content run after this set.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentLoadSet;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_content.in_set(ContentLoadSet));
    }
}

/// Load content into `LocomotionParams` and `TrackDef` resources.
/// Any configuration error is fatal: all of them are logged and the app exits.
fn load_content(mut commands: Commands, mut exit: MessageWriter<AppExit>) {
    match load_all_content(Path::new(CONTENT_DIR)) {
        Ok((params, track)) => {
            info!(
                "Content loaded: rail_length={}, boundaries={}, regions={}, archetypes={}",
                track.rail_length,
                track.boundaries.len(),
                track.regions.len(),
                track.archetypes.len()
            );
            commands.insert_resource(params);
            commands.insert_resource(track);
        }
        Err(errors) => {
            for e in &errors {
                error!("Configuration error: {}", e);
            }
            exit.write(AppExit::error());
        }
    }
}
