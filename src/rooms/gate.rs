//! Rooms domain: the boundary gate that tracks live enemies per region and
//! unlocks forward progress along the rail once a boundary's regions clear.

use bevy::prelude::*;
use rand::Rng;
use std::fmt::Debug;
use std::hash::Hash;

use crate::content::{ConfigError, TrackDef, validate_track};
use crate::movement::BoundaryService;

/// Creates one enemy for a region and hands back its identifier.
pub trait EnemySpawner<T> {
    fn spawn(&mut self, archetype: &str, rail_position: f32) -> T;
}

/// A rail segment populated once on activation. `live` keeps spawn order and
/// only ever shrinks afterwards.
#[derive(Debug, Clone)]
pub struct Region<T> {
    pub id: String,
    pub archetype: String,
    pub spawn_count: u32,
    pub rail_position: f32,
    pub offset_range: (f32, f32),
    pub boundary_index: usize,
    live: Vec<T>,
}

impl<T> Region<T> {
    pub fn live(&self) -> &[T] {
        &self.live
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    pub rail_limit: f32,
    pub lifted: bool,
    pub activated: bool,
}

/// Per-boundary census of live enemies. A boundary lifts the moment its
/// census reaches zero and never locks again.
#[derive(Resource, Debug)]
pub struct BoundaryGate<T> {
    rail_length: f32,
    boundaries: Vec<Boundary>,
    regions: Vec<Region<T>>,
    current: usize,
    pending_activation: Option<usize>,
}

impl<T> BoundaryGate<T>
where
    T: Copy + Eq + Hash + Debug,
{
    /// Build the gate for a track. Boundary 0 is queued for activation.
    pub fn from_def(track: &TrackDef) -> Result<Self, ConfigError> {
        if let Some(first) = validate_track(track).into_iter().next() {
            return Err(first);
        }

        let boundaries = track
            .boundaries
            .iter()
            .map(|def| Boundary {
                rail_limit: def.rail_limit,
                lifted: false,
                activated: false,
            })
            .collect::<Vec<_>>();

        let regions = track
            .regions
            .iter()
            .map(|def| Region {
                id: def.id.clone(),
                archetype: def.archetype.clone(),
                spawn_count: def.spawn_count,
                rail_position: def.rail_position,
                offset_range: def.offset_range,
                boundary_index: def.boundary_index,
                live: Vec::new(),
            })
            .collect();

        let pending_activation = (!boundaries.is_empty()).then_some(0);

        Ok(Self {
            rail_length: track.rail_length,
            boundaries,
            regions,
            current: 0,
            pending_activation,
        })
    }

    pub fn boundaries(&self) -> &[Boundary] {
        &self.boundaries
    }

    pub fn regions(&self) -> &[Region<T>] {
        &self.regions
    }

    pub fn region(&self, id: &str) -> Option<&Region<T>> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Live enemies across every region tagged with `index`.
    pub fn census_for_boundary(&self, index: usize) -> usize {
        self.regions
            .iter()
            .filter(|r| r.boundary_index == index)
            .map(|r| r.live.len())
            .sum()
    }

    pub fn is_lifted(&self, index: usize) -> bool {
        self.boundaries.get(index).is_some_and(|b| b.lifted)
    }

    /// One-way unlock. Returns true only on the call that lifted it.
    pub fn lift_boundary(&mut self, index: usize) -> bool {
        let Some(boundary) = self.boundaries.get_mut(index) else {
            return false;
        };
        if boundary.lifted {
            return false;
        }
        boundary.lifted = true;
        info!("Boundary {} lifted at rail {:.2}", index, boundary.rail_limit);
        true
    }

    /// Remove `id` from whichever region holds it and lift any boundary whose
    /// census drops to zero. Unknown ids re-check the active boundary.
    /// Returns the boundaries lifted by this call.
    pub fn remove_enemy(&mut self, id: T) -> Vec<usize> {
        let mut touched = Vec::new();
        for region in &mut self.regions {
            let before = region.live.len();
            region.live.retain(|live| *live != id);
            if region.live.len() != before && !touched.contains(&region.boundary_index) {
                touched.push(region.boundary_index);
            }
        }

        if touched.is_empty() {
            touched.push(self.current);
        } else {
            debug!("Enemy {:?} removed from boundaries {:?}", id, touched);
        }

        touched
            .into_iter()
            .filter(|&index| self.try_lift(index))
            .collect()
    }

    /// Spawn every region tagged with `index`. Regions populate only once;
    /// a boundary whose regions yield no enemies lifts straight away.
    /// Returns `Some(index)` when activation lifted the boundary.
    pub fn activate_boundary<R>(
        &mut self,
        index: usize,
        spawner: &mut dyn EnemySpawner<T>,
        rng: &mut R,
    ) -> Option<usize>
    where
        R: Rng,
    {
        let boundary = self.boundaries.get_mut(index)?;
        if boundary.activated {
            return None;
        }
        boundary.activated = true;

        let rail_length = self.rail_length;
        for region in self.regions.iter_mut().filter(|r| r.boundary_index == index) {
            let (min, max) = region.offset_range;
            for _ in 0..region.spawn_count {
                let offset = rng.random_range(min..=max);
                let position = (region.rail_position + offset).clamp(0.0, rail_length);
                let id = spawner.spawn(&region.archetype, position);
                region.live.push(id);
            }
            debug!(
                "Region '{}' spawned {} '{}'",
                region.id,
                region.live.len(),
                region.archetype
            );
        }

        info!(
            "Boundary {} activated with {} enemies",
            index,
            self.census_for_boundary(index)
        );

        self.try_lift(index).then_some(index)
    }

    /// Boundary whose regions still have to be spawned, if any.
    pub fn take_pending_activation(&mut self) -> Option<usize> {
        self.pending_activation.take()
    }

    fn try_lift(&mut self, index: usize) -> bool {
        let activated = self.boundaries.get(index).is_some_and(|b| b.activated);
        activated && self.census_for_boundary(index) == 0 && self.lift_boundary(index)
    }
}

impl<T> BoundaryService for BoundaryGate<T>
where
    T: Copy + Eq + Hash + Debug,
{
    fn clamp_to_active_boundary(&self, position: f32) -> f32 {
        match self.boundaries.get(self.current) {
            Some(boundary) if !boundary.lifted => position.min(boundary.rail_limit),
            _ => position,
        }
    }

    fn check_within_boundary(&mut self, position: f32) {
        let Some(boundary) = self.boundaries.get(self.current) else {
            return;
        };
        if !boundary.lifted || position <= boundary.rail_limit {
            return;
        }

        self.current += 1;
        if self.current < self.boundaries.len() {
            info!(
                "Passed boundary {}, queueing boundary {}",
                self.current - 1,
                self.current
            );
            self.pending_activation = Some(self.current);
        } else {
            info!("Passed the last boundary");
        }
    }

    fn current_boundary_index(&self) -> usize {
        self.current
    }
}
