//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::locomotion::{CombatLocomotion, LocomotionSignal};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground under the rail
    Ground,
    /// Player character
    Player,
    /// Damageable enemies
    Enemy,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Discrete locomotion state. Exactly one is active; `Dead` is absorbing.
///
/// Being airborne is tracked separately by the grounded flag, so a player can
/// be mid-air while tagged `Idle` or `Moving`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerState {
    #[default]
    Idle,
    Moving,
    Jumping,
    Dashing,
    Dead,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Forward,
    Reversed,
}

impl Facing {
    /// +1 along the rail when facing forward, -1 when reversed
    pub fn sign(self) -> f32 {
        match self {
            Facing::Forward => 1.0,
            Facing::Reversed => -1.0,
        }
    }
}

/// The player's locomotion state machine.
#[derive(Component, Debug)]
pub struct Locomotion(pub CombatLocomotion<Entity>);

/// Read surface for the external animator, folded from each tick's signals.
#[derive(Component, Debug, Default, Clone, PartialEq)]
pub struct AnimatorParams {
    pub grounded: bool,
    pub movement: f32,
    /// Pulse: true only for the tick a full-height jump started
    pub jump_trigger: bool,
    pub dashing: bool,
}

impl AnimatorParams {
    pub fn apply(&mut self, signals: &[LocomotionSignal]) {
        self.jump_trigger = false;
        for signal in signals {
            match *signal {
                LocomotionSignal::Grounded(grounded) => self.grounded = grounded,
                LocomotionSignal::Movement(movement) => self.movement = movement,
                LocomotionSignal::JumpTriggered => self.jump_trigger = true,
                LocomotionSignal::Dashing(dashing) => self.dashing = dashing,
            }
        }
    }
}
