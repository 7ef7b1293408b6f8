//! Movement domain: player and rail bootstrap from loaded content.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::TrackDef;
use crate::movement::{
    AnimatorParams, CombatLocomotion, GameLayer, Ground, Locomotion, LocomotionParams, Player,
    RailTrack, TrackCursor,
};

/// Ground slab thickness under the rail
const GROUND_THICKNESS: f32 = 1.0;

/// Insert the rail, lay ground under it and spawn the player at the
/// authored start position.
pub(crate) fn bootstrap_player_from_data(
    mut commands: Commands,
    params: Option<Res<LocomotionParams>>,
    track_def: Option<Res<TrackDef>>,
    existing_player: Query<Entity, With<Player>>,
    mut exit: MessageWriter<AppExit>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }
    let (Some(params), Some(track_def)) = (params, track_def) else {
        warn!("Content not loaded, player not spawned");
        return;
    };

    let origin = Vec2::new(track_def.origin.0, track_def.origin.1);
    let rail = RailTrack::new(origin, track_def.rail_length, track_def.player_start);

    let locomotion = match CombatLocomotion::new(params.clone(), rail.current_position()) {
        Ok(locomotion) => locomotion,
        Err(e) => {
            error!("Locomotion configuration rejected: {}", e);
            exit.write(AppExit::error());
            return;
        }
    };

    commands.spawn((
        Ground,
        RigidBody::Static,
        Collider::rectangle(track_def.rail_length, GROUND_THICKNESS),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Enemy]),
        Transform::from_translation(
            (origin + Vec2::new(track_def.rail_length / 2.0, -GROUND_THICKNESS / 2.0))
                .extend(0.0),
        ),
    ));

    let placed = rail.place(rail.current_position(), 0.0);
    commands.spawn((
        Player,
        Locomotion(locomotion),
        AnimatorParams::default(),
        Transform::from_translation(placed.extend(0.0)),
    ));

    info!(
        "Spawning player at rail {:.2} of {:.2} (move_speed={}, max_jumps={}, dash_distance={})",
        rail.current_position(),
        rail.rail_length(),
        params.move_speed,
        params.max_jump_amount,
        params.dash_distance
    );

    commands.insert_resource(rail);
}
