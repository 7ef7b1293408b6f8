//! Movement domain: the player's combat locomotion state machine.
//!
//! One call to [`CombatLocomotion::tick`] is one fixed simulation step:
//! ground probe, dash cooldown, walking, jump and dash arbitration, vertical
//! integration, the rail position write and finally the dash trajectory.

use bevy::prelude::*;
use std::fmt::Debug;
use std::hash::Hash;

use crate::content::ConfigError;
use crate::movement::dash::{DashStep, DashTrajectory};
use crate::movement::probe::{AreaProbe, DamageSink, ProbeQuery};
use crate::movement::track::{BoundaryService, TrackCursor, write_rail_position};
use crate::movement::{Facing, LocomotionParams, MovementInput, PlayerState};

/// External services a tick reads from and writes to.
pub struct Collaborators<'a, T> {
    pub track: &'a mut dyn TrackCursor,
    pub boundary: &'a mut dyn BoundaryService,
    pub probe: &'a dyn AreaProbe<T>,
    pub damage: &'a mut dyn DamageSink<T>,
}

impl<T> Collaborators<'_, T> {
    /// Clamp to rail and boundary, then write through the cursor.
    pub fn write_position(&mut self, target: f32) -> f32 {
        write_rail_position(&mut *self.track, &mut *self.boundary, target)
    }
}

/// Fire-and-forget animation signals produced by a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocomotionSignal {
    Grounded(bool),
    Movement(f32),
    /// Only full-height jumps pulse this; extra jumps stay silent
    JumpTriggered,
    Dashing(bool),
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct TickReport {
    pub signals: Vec<LocomotionSignal>,
}

/// Mutable per-character locomotion values.
#[derive(Debug, Clone, PartialEq)]
pub struct LocomotionRuntime {
    /// Last position written through the track cursor
    pub rail_position: f32,
    pub vertical_offset: f32,
    pub vertical_velocity: f32,
    /// Rail delta applied this tick; recomputed every tick, never integrated
    pub horizontal_velocity: f32,
    pub facing: Facing,
    pub jumps_remaining: u32,
    pub dash_cooldown: f32,
    pub grounded: bool,
}

impl LocomotionRuntime {
    pub fn is_airborne(&self) -> bool {
        !self.grounded
    }
}

#[derive(Debug)]
pub struct CombatLocomotion<T> {
    params: LocomotionParams,
    state: PlayerState,
    runtime: LocomotionRuntime,
    dash: Option<DashTrajectory<T>>,
}

impl<T: Copy + Eq + Hash + Debug> CombatLocomotion<T> {
    /// Validates `params`; a bad configuration never reaches the tick loop.
    pub fn new(params: LocomotionParams, start_position: f32) -> Result<Self, ConfigError> {
        params.validate()?;
        let runtime = LocomotionRuntime {
            rail_position: start_position,
            vertical_offset: 0.0,
            vertical_velocity: 0.0,
            horizontal_velocity: 0.0,
            facing: Facing::Forward,
            jumps_remaining: params.max_jump_amount,
            dash_cooldown: 0.0,
            grounded: true,
        };
        Ok(Self {
            params,
            state: PlayerState::Idle,
            runtime,
            dash: None,
        })
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn runtime(&self) -> &LocomotionRuntime {
        &self.runtime
    }

    pub fn dash(&self) -> Option<&DashTrajectory<T>> {
        self.dash.as_ref()
    }

    /// External death signal. Any dash in flight is dropped without damage.
    pub fn kill(&mut self) {
        if let Some(dash) = self.dash.take() {
            debug!(
                "Dash dropped on death with {} pending targets",
                dash.registry().len()
            );
        }
        self.state = PlayerState::Dead;
    }

    pub fn tick(
        &mut self,
        input: &MovementInput,
        dt: f32,
        env: &mut Collaborators<'_, T>,
    ) -> TickReport {
        let mut report = TickReport::default();
        if self.state == PlayerState::Dead {
            return report;
        }

        let horizontal = input.horizontal.clamp(-1.0, 1.0);
        let position = env.track.current_position();
        self.runtime.rail_position = position;

        let feet = env.track.place(position, self.runtime.vertical_offset);
        let ground = ProbeQuery::ground(feet, self.params.ground_check_radius);
        self.runtime.grounded = !env.probe.probe(&ground).is_empty();
        report
            .signals
            .push(LocomotionSignal::Grounded(self.runtime.grounded));

        let lockout = self.cool_down_dash(dt);

        // Walk
        if self.state != PlayerState::Dashing {
            if horizontal != 0.0 {
                self.state = PlayerState::Moving;
                self.runtime.facing = if horizontal > 0.0 {
                    Facing::Forward
                } else {
                    Facing::Reversed
                };
                self.runtime.horizontal_velocity =
                    self.runtime.facing.sign() * self.params.move_speed * dt;
            } else {
                self.state = PlayerState::Idle;
                self.runtime.horizontal_velocity = 0.0;
            }
            report.signals.push(LocomotionSignal::Movement(horizontal));
        }
        if lockout {
            self.runtime.horizontal_velocity = 0.0;
        }

        // Jump, including extra jumps while airborne
        if input.jump_just_pressed
            && self.state != PlayerState::Dashing
            && self.runtime.jumps_remaining > 0
        {
            self.jump(&mut report);
        }

        if input.dash_just_pressed && self.runtime.dash_cooldown <= 0.0 {
            self.start_dash(position, &mut report);
        }

        self.integrate_vertical(dt);

        if self.state != PlayerState::Dashing {
            self.runtime.rail_position =
                env.write_position(position + self.runtime.horizontal_velocity);
        }

        if let Some(dash) = self.dash.as_mut() {
            let step = dash.advance(dt, &self.params, self.runtime.vertical_offset, env);
            self.runtime.rail_position = env.track.current_position();
            if step == DashStep::Completed {
                self.finish_dash(env, &mut report);
            }
        }

        debug_assert!(self.runtime.jumps_remaining <= self.params.max_jump_amount);
        report
    }

    /// Counts the cooldown down and reports whether walk input is locked out.
    fn cool_down_dash(&mut self, dt: f32) -> bool {
        if self.runtime.dash_cooldown <= 0.0 {
            self.runtime.dash_cooldown = 0.0;
            return false;
        }
        let lockout = self.runtime.dash_cooldown
            > self.params.dash_delay - self.params.dash_lockout_window;
        self.runtime.dash_cooldown = (self.runtime.dash_cooldown - dt).max(0.0);
        lockout
    }

    fn jump(&mut self, report: &mut TickReport) {
        if self.runtime.jumps_remaining == self.params.max_jump_amount {
            report.signals.push(LocomotionSignal::JumpTriggered);
        }
        self.runtime.vertical_velocity = self.params.jump_velocity();
        self.runtime.grounded = false;
        self.runtime.jumps_remaining -= 1;
        self.state = PlayerState::Jumping;
        debug!(
            "Jump: velocity={:.2}, jumps_remaining={}",
            self.runtime.vertical_velocity, self.runtime.jumps_remaining
        );
    }

    fn start_dash(&mut self, position: f32, report: &mut TickReport) {
        if let Some(cancelled) = self.dash.take() {
            debug!(
                "Dash cancelled at t={:.2}; {} registered targets dropped",
                cancelled.lerp_time(),
                cancelled.registry().len()
            );
        }
        self.dash = Some(DashTrajectory::new(position, self.runtime.facing));
        self.runtime.horizontal_velocity = 0.0;
        self.state = PlayerState::Dashing;
        report.signals.push(LocomotionSignal::Dashing(true));
        debug!(
            "Dash started at rail {:.2} facing {:?}",
            position, self.runtime.facing
        );
    }

    /// Gravity, then implicit drag: v = (v + g*dt) / (1 + drag*dt).
    /// Landing resets the vertical velocity and the jump count.
    fn integrate_vertical(&mut self, dt: f32) {
        let runtime = &mut self.runtime;
        runtime.vertical_velocity += self.params.gravity * dt;
        runtime.vertical_velocity /= 1.0 + self.params.drag.1 * dt;

        if runtime.grounded && runtime.vertical_velocity < 0.0 {
            runtime.vertical_velocity = 0.0;
            runtime.jumps_remaining = self.params.max_jump_amount;
        }

        runtime.vertical_offset += runtime.vertical_velocity * dt;
    }

    fn finish_dash(&mut self, env: &mut Collaborators<'_, T>, report: &mut TickReport) {
        let Some(dash) = self.dash.take() else {
            return;
        };
        let registry = dash.into_registry();

        report.signals.push(LocomotionSignal::Dashing(false));
        self.state = PlayerState::Idle;
        self.runtime.dash_cooldown = self.params.dash_delay;

        if registry.is_empty() {
            debug!(
                "Dash completed at rail {:.2} without hits",
                self.runtime.rail_position
            );
        } else {
            debug!(
                "Dash completed at rail {:.2}; striking {} targets for {}",
                self.runtime.rail_position,
                registry.len(),
                self.params.dash_damage
            );
        }
        env.damage
            .apply_damage(self.params.dash_damage, registry.targets());
    }
}
