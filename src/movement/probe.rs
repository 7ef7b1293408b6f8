//! Movement domain: area probes for ground contact and dash hits, and the
//! damage hand-off at the end of a dash.

use avian2d::prelude::*;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::combat::{DashStrikeEvent, Enemy};
use crate::movement::{Facing, GameLayer, LocomotionParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeMask {
    Ground,
    Damageable,
}

impl ProbeMask {
    fn layer(self) -> GameLayer {
        match self {
            ProbeMask::Ground => GameLayer::Ground,
            ProbeMask::Damageable => GameLayer::Enemy,
        }
    }
}

/// A circle swept `max_distance` along `direction`; zero distance is a plain
/// overlap test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeQuery {
    pub origin: Vec2,
    pub radius: f32,
    pub direction: Vec2,
    pub max_distance: f32,
    pub mask: ProbeMask,
}

impl ProbeQuery {
    pub fn ground(origin: Vec2, radius: f32) -> Self {
        Self {
            origin,
            radius,
            direction: Vec2::NEG_Y,
            max_distance: 0.0,
            mask: ProbeMask::Ground,
        }
    }

    /// Short sweep from `anchor` out to `hit_probe_reach` in the facing
    /// direction.
    pub fn strike(anchor: Vec2, facing: Facing, params: &LocomotionParams) -> Self {
        Self {
            origin: anchor,
            radius: params.hit_probe_radius,
            direction: Vec2::new(facing.sign(), 0.0),
            max_distance: params.hit_probe_reach,
            mask: ProbeMask::Damageable,
        }
    }

    /// Centre of the circle at the far end of the sweep.
    pub fn end(&self) -> Vec2 {
        self.origin + self.direction * self.max_distance
    }
}

/// Synchronous area query service. An empty result is a miss, not an error.
pub trait AreaProbe<T> {
    /// Candidate handles in detection order.
    fn probe(&self, query: &ProbeQuery) -> Vec<T>;

    /// The damageable target a handle belongs to, if any.
    fn resolve_damageable(&self, handle: T) -> Option<T>;
}

/// Receives the single aggregate damage application of a completed dash.
pub trait DamageSink<T> {
    fn apply_damage(&mut self, amount: f32, targets: &[T]);
}

// -----------------------------------------------------------------------------
// avian2d adapters
// -----------------------------------------------------------------------------

/// Probe backed by the physics spatial query pipeline.
#[derive(SystemParam)]
pub(crate) struct SpatialProbe<'w, 's> {
    spatial: SpatialQuery<'w, 's>,
    enemies: Query<'w, 's, (), With<Enemy>>,
    bodies: Query<'w, 's, &'static ColliderOf>,
}

impl AreaProbe<Entity> for SpatialProbe<'_, '_> {
    fn probe(&self, query: &ProbeQuery) -> Vec<Entity> {
        let filter = SpatialQueryFilter::from_mask(query.mask.layer());
        let shape = Collider::circle(query.radius);

        if query.max_distance <= 0.0 {
            return self
                .spatial
                .shape_intersections(&shape, query.origin, 0.0, &filter);
        }

        let Ok(direction) = Dir2::new(query.direction) else {
            return Vec::new();
        };
        self.spatial
            .shape_hits(
                &shape,
                query.origin,
                0.0,
                direction,
                u32::MAX,
                &ShapeCastConfig::from_max_distance(query.max_distance),
                &filter,
            )
            .into_iter()
            .map(|hit| hit.entity)
            .collect()
    }

    fn resolve_damageable(&self, handle: Entity) -> Option<Entity> {
        if self.enemies.contains(handle) {
            return Some(handle);
        }
        // Child colliders resolve to the enemy body that owns them
        self.bodies
            .get(handle)
            .ok()
            .map(|collider_of| collider_of.body)
            .filter(|body| self.enemies.contains(*body))
    }
}

/// Damage sink that forwards each completed dash as one strike message.
pub(crate) struct StrikeWriter<'a, 'w> {
    pub writer: &'a mut MessageWriter<'w, DashStrikeEvent>,
    pub source: Entity,
}

impl DamageSink<Entity> for StrikeWriter<'_, '_> {
    fn apply_damage(&mut self, amount: f32, targets: &[Entity]) {
        if targets.is_empty() {
            return;
        }
        self.writer.write(DashStrikeEvent {
            source: self.source,
            amount,
            targets: targets.to_vec(),
        });
    }
}
