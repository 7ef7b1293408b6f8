//! Core domain: session-wide startup systems.

use bevy::prelude::*;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
