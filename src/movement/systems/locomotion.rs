//! Movement domain: fixed-tick systems driving the locomotion state machine.

use bevy::prelude::*;

use crate::combat::{DashStrikeEvent, PlayerKilledEvent};
use crate::movement::probe::{SpatialProbe, StrikeWriter};
use crate::movement::{
    AnimatorParams, Collaborators, Locomotion, MovementInput, Player, RailTrack, TrackCursor,
};
use crate::rooms::BoundaryGate;

pub(crate) fn advance_locomotion(
    time: Res<Time>,
    mut input: ResMut<MovementInput>,
    track: Option<ResMut<RailTrack>>,
    gate: Option<ResMut<BoundaryGate<Entity>>>,
    probe: SpatialProbe,
    mut strikes: MessageWriter<DashStrikeEvent>,
    mut players: Query<
        (Entity, &mut Locomotion, &mut Transform, &mut AnimatorParams),
        With<Player>,
    >,
) {
    let (Some(mut track), Some(mut gate)) = (track, gate) else {
        return;
    };
    let dt = time.delta_secs();
    for (entity, mut locomotion, mut transform, mut animator) in &mut players {
        let mut sink = StrikeWriter {
            writer: &mut strikes,
            source: entity,
        };
        let mut env = Collaborators {
            track: &mut *track,
            boundary: &mut *gate,
            probe: &probe,
            damage: &mut sink,
        };
        let report = locomotion.0.tick(&input, dt, &mut env);
        animator.apply(&report.signals);

        let placed = track.place(
            track.current_position(),
            locomotion.0.runtime().vertical_offset,
        );
        transform.translation.x = placed.x;
        transform.translation.y = placed.y;
    }

    input.clear_edges();
}

pub(crate) fn handle_player_killed(
    mut killed_events: MessageReader<PlayerKilledEvent>,
    mut players: Query<&mut Locomotion, With<Player>>,
) {
    for event in killed_events.read() {
        if let Ok(mut locomotion) = players.get_mut(event.player) {
            locomotion.0.kill();
            info!("Player {:?} killed; locomotion frozen", event.player);
        }
    }
}
