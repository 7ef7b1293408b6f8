//! Rooms domain: gate setup, region activation and the enemy census.

use bevy::prelude::*;

use crate::combat::EnemyDiedEvent;
use crate::content::TrackDef;
use crate::movement::RailTrack;
use crate::rooms::events::{BoundaryLiftedEvent, RegionsActivatedEvent};
use crate::rooms::gate::BoundaryGate;
use crate::rooms::spawn::{CommandSpawner, SpawnRng};

/// Build the gate and spawn RNG once the track is loaded.
pub(crate) fn setup_boundary_gate(
    mut commands: Commands,
    track_def: Option<Res<TrackDef>>,
    mut exit: MessageWriter<AppExit>,
) {
    let Some(track_def) = track_def else {
        warn!("Track not loaded, boundary gate not created");
        return;
    };

    match BoundaryGate::<Entity>::from_def(&track_def) {
        Ok(gate) => {
            info!(
                "Boundary gate ready: {} boundaries, {} regions (seed {})",
                gate.boundaries().len(),
                gate.regions().len(),
                track_def.seed
            );
            commands.insert_resource(gate);
            commands.insert_resource(SpawnRng::from_seed(track_def.seed));
        }
        Err(e) => {
            error!("Track layout rejected: {}", e);
            exit.write(AppExit::error());
        }
    }
}

pub(crate) fn activate_pending_regions(
    mut commands: Commands,
    gate: Option<ResMut<BoundaryGate<Entity>>>,
    rng: Option<ResMut<SpawnRng>>,
    track_def: Option<Res<TrackDef>>,
    rail: Option<Res<RailTrack>>,
    mut activated_events: MessageWriter<RegionsActivatedEvent>,
    mut lifted_events: MessageWriter<BoundaryLiftedEvent>,
) {
    let (Some(mut gate), Some(mut rng), Some(track_def), Some(rail)) = (gate, rng, track_def, rail)
    else {
        return;
    };
    let Some(index) = gate.take_pending_activation() else {
        return;
    };

    let mut spawner = CommandSpawner {
        commands: &mut commands,
        track_def: &track_def,
        rail: &rail,
    };
    let lifted = gate.activate_boundary(index, &mut spawner, &mut rng.0);

    activated_events.write(RegionsActivatedEvent {
        boundary: index,
        spawned: gate.census_for_boundary(index),
    });
    if let Some(index) = lifted {
        lifted_events.write(BoundaryLiftedEvent { index });
    }
}

/// Census: every dead enemy leaves its region, possibly lifting a boundary.
pub(crate) fn handle_enemy_deaths(
    mut death_events: MessageReader<EnemyDiedEvent>,
    mut gate: Option<ResMut<BoundaryGate<Entity>>>,
    mut lifted_events: MessageWriter<BoundaryLiftedEvent>,
) {
    for event in death_events.read() {
        let Some(gate) = gate.as_mut() else {
            continue;
        };
        for index in gate.remove_enemy(event.entity) {
            lifted_events.write(BoundaryLiftedEvent { index });
        }
    }
}
