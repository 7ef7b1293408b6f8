//! Data definitions for the track content file.
//!
//! These structs mirror the structure in assets/data/track.ron and are used
//! for deserialization. Locomotion tuning lives next to the movement domain
//! in `LocomotionParams`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// Track (track.ron)
// ============================================================================

/// Authored layout of one rail: its length, progression boundaries and the
/// regions that populate them with enemies.
#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
pub struct TrackDef {
    pub rail_length: f32,
    /// World placement of rail position 0
    #[serde(default)]
    pub origin: (f32, f32),
    #[serde(default)]
    pub player_start: f32,
    /// Seed for spawn offsets
    #[serde(default)]
    pub seed: u64,
    pub archetypes: Vec<EnemyArchetypeDef>,
    /// Ordered along the rail; a boundary's index is its position in this list
    pub boundaries: Vec<BoundaryDef>,
    pub regions: Vec<RegionDef>,
}

impl TrackDef {
    pub fn archetype(&self, id: &str) -> Option<&EnemyArchetypeDef> {
        self.archetypes.iter().find(|a| a.id == id)
    }
}

// ============================================================================
// Enemy archetypes
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EnemyArchetypeDef {
    pub id: String,
    pub health: f32,
    pub radius: f32,
}

// ============================================================================
// Boundaries and regions
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BoundaryDef {
    pub rail_limit: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegionDef {
    pub id: String,
    pub archetype: String,
    pub spawn_count: u32,
    pub rail_position: f32,
    /// Uniform spawn offset along the rail, inclusive on both ends
    pub offset_range: (f32, f32),
    pub boundary_index: usize,
}
