mod combat;
mod content;
mod core;
mod movement;
mod rooms;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Railbound".to_string(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins((PhysicsPlugins::default(), PhysicsDebugPlugin::default()))
        .add_plugins((
            core::CorePlugin,
            content::ContentPlugin,
            movement::MovementPlugin,
            combat::CombatPlugin,
            rooms::RoomsPlugin,
        ))
        .run();
}
