//! Rooms domain: enemy instantiation for activated regions.

use avian2d::prelude::*;
use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::combat::{Enemy, EnemyArchetype, Health, RailPosition};
use crate::content::TrackDef;
use crate::movement::{GameLayer, RailTrack, TrackCursor};
use crate::rooms::gate::EnemySpawner;

/// Fallback body for an archetype missing from the table
const FALLBACK_HEALTH: f32 = 1.0;
const FALLBACK_RADIUS: f32 = 0.5;

/// Seeded source for region spawn offsets
#[derive(Resource)]
pub struct SpawnRng(pub ChaCha8Rng);

impl SpawnRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

/// Spawns enemy bodies resting on the rail through `Commands`.
pub(crate) struct CommandSpawner<'a, 'w, 's> {
    pub commands: &'a mut Commands<'w, 's>,
    pub track_def: &'a TrackDef,
    pub rail: &'a RailTrack,
}

impl EnemySpawner<Entity> for CommandSpawner<'_, '_, '_> {
    fn spawn(&mut self, archetype: &str, rail_position: f32) -> Entity {
        let (health, radius) = match self.track_def.archetype(archetype) {
            Some(def) => (def.health, def.radius),
            None => {
                warn!("Unknown enemy archetype '{}', using fallback body", archetype);
                (FALLBACK_HEALTH, FALLBACK_RADIUS)
            }
        };

        let placed = self.rail.place(rail_position, radius);
        self.commands
            .spawn((
                Enemy,
                EnemyArchetype(archetype.to_string()),
                RailPosition(rail_position),
                Health::new(health),
                RigidBody::Static,
                Collider::circle(radius),
                CollisionLayers::new(GameLayer::Enemy, [GameLayer::Player, GameLayer::Ground]),
                Transform::from_translation(placed.extend(0.0)),
            ))
            .id()
    }
}
