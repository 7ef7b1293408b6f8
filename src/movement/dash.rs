//! Movement domain: the resumable dash trajectory.

use bevy::prelude::*;
use std::fmt::Debug;
use std::hash::Hash;

use crate::movement::hit_registry::HitRegistry;
use crate::movement::locomotion::Collaborators;
use crate::movement::probe::ProbeQuery;
use crate::movement::{Facing, LocomotionParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashStep {
    Running,
    Completed,
}

/// A dash in flight, advanced once per tick.
///
/// Discarding it cancels the dash: no damage is applied and any pending
/// stutter is dropped.
#[derive(Debug, Clone)]
pub struct DashTrajectory<T> {
    start: f32,
    facing: Facing,
    lerp_time: f32,
    stutter_remaining: f32,
    registry: HitRegistry<T>,
}

impl<T: Copy + Eq + Hash + Debug> DashTrajectory<T> {
    pub fn new(start: f32, facing: Facing) -> Self {
        Self {
            start,
            facing,
            lerp_time: 0.0,
            stutter_remaining: 0.0,
            registry: HitRegistry::new(),
        }
    }

    pub fn start(&self) -> f32 {
        self.start
    }

    /// Normalized time, reaching 1 when the trajectory has run its duration
    pub fn lerp_time(&self) -> f32 {
        self.lerp_time
    }

    pub fn is_stuttering(&self) -> bool {
        self.stutter_remaining > 0.0
    }

    pub fn registry(&self) -> &HitRegistry<T> {
        &self.registry
    }

    pub fn into_registry(self) -> HitRegistry<T> {
        self.registry
    }

    /// Advance by one tick.
    ///
    /// While a hit stutter is pending the tick is spent waiting. Otherwise the
    /// eased position is written and the strike probe runs; every target not
    /// seen before this dash is registered and adds one stutter interval.
    pub fn advance(
        &mut self,
        dt: f32,
        params: &LocomotionParams,
        vertical_offset: f32,
        env: &mut Collaborators<'_, T>,
    ) -> DashStep {
        if self.stutter_remaining > 0.0 {
            self.stutter_remaining = (self.stutter_remaining - dt).max(0.0);
            return self.step();
        }

        self.lerp_time += dt / params.dash_duration;
        let progress = params.dash_curve.evaluate(self.lerp_time);
        let target = self.start + self.facing.sign() * params.dash_distance * progress;
        let position = env.write_position(target);

        let anchor = env.track.place(position, vertical_offset);
        let query = ProbeQuery::strike(anchor, self.facing, params);
        let mut new_hits = 0u32;
        for handle in env.probe.probe(&query) {
            let Some(target) = env.probe.resolve_damageable(handle) else {
                continue;
            };
            if self.registry.register(target) {
                new_hits += 1;
                debug!(
                    "Dash hit {:?} at rail {:.2} ({} registered)",
                    target,
                    position,
                    self.registry.len()
                );
            }
        }
        self.stutter_remaining = new_hits as f32 * params.dash_stutter_time;

        self.step()
    }

    fn step(&self) -> DashStep {
        if self.stutter_remaining > 0.0 || self.lerp_time < 1.0 {
            DashStep::Running
        } else {
            DashStep::Completed
        }
    }
}
