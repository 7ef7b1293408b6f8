//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::content::{ConfigError, require_non_negative, require_positive};
use crate::movement::curve::EasingCurve;

/// Immutable per-session locomotion tuning, loaded from locomotion.ron.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LocomotionParams {
    /// Rail units per second
    pub move_speed: f32,
    pub jump_height: f32,
    /// Total jumps available before landing (1 = no double jump)
    pub max_jump_amount: u32,
    /// Signed; negative pulls down
    pub gravity: f32,
    pub ground_check_radius: f32,
    /// Implicit damping per axis; only the vertical component is integrated
    pub drag: (f32, f32),
    pub dash_distance: f32,
    pub dash_duration: f32,
    /// Pause applied per newly hit target
    pub dash_stutter_time: f32,
    /// Cooldown started when a dash completes
    pub dash_delay: f32,
    pub dash_damage: f32,
    /// Time-fraction to progress-fraction mapping for the dash
    pub dash_curve: EasingCurve,
    /// Walk input is ignored while the cooldown is within this much of `dash_delay`
    pub dash_lockout_window: f32,
    pub hit_probe_radius: f32,
    /// Forward offset of the hit probe from the player anchor
    pub hit_probe_reach: f32,
}

impl Default for LocomotionParams {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            jump_height: 2.0,
            max_jump_amount: 1,
            gravity: -9.81,
            ground_check_radius: 0.2,
            drag: (0.0, 0.0),
            dash_distance: 5.0,
            dash_duration: 0.5,
            dash_stutter_time: 0.05,
            dash_delay: 1.0,
            dash_damage: 10.0,
            dash_curve: EasingCurve::ease_out(),
            dash_lockout_window: 1.0,
            hit_probe_radius: 1.0,
            hit_probe_reach: 0.5,
        }
    }
}

impl LocomotionParams {
    /// Check every field, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("dash_duration", self.dash_duration)?;
        require_positive("dash_delay", self.dash_delay)?;
        require_positive("ground_check_radius", self.ground_check_radius)?;
        require_positive("hit_probe_radius", self.hit_probe_radius)?;

        require_non_negative("move_speed", self.move_speed)?;
        require_non_negative("jump_height", self.jump_height)?;
        require_non_negative("dash_distance", self.dash_distance)?;
        require_non_negative("dash_stutter_time", self.dash_stutter_time)?;
        require_non_negative("dash_damage", self.dash_damage)?;
        require_non_negative("dash_lockout_window", self.dash_lockout_window)?;
        require_non_negative("hit_probe_reach", self.hit_probe_reach)?;
        require_non_negative("drag.x", self.drag.0)?;
        require_non_negative("drag.y", self.drag.1)?;

        if !self.gravity.is_finite() {
            return Err(ConfigError::NotFinite { field: "gravity" });
        }

        self.dash_curve.validate()
    }

    /// Launch velocity for a jump reaching `jump_height`: sqrt(2 * h * |g|)
    pub fn jump_velocity(&self) -> f32 {
        (self.jump_height * 2.0 * self.gravity.abs()).sqrt()
    }
}

/// Normalized input for the next fixed tick.
///
/// Button fields are edges latched by the input sampler and cleared once a
/// fixed tick has consumed them.
#[derive(Resource, Debug, Default, Clone)]
pub struct MovementInput {
    /// Horizontal axis in [-1, 1]
    pub horizontal: f32,
    pub jump_just_pressed: bool,
    pub dash_just_pressed: bool,
}

impl MovementInput {
    pub fn clear_edges(&mut self) {
        self.jump_just_pressed = false;
        self.dash_just_pressed = false;
    }
}
