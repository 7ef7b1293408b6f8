//! Combat domain: enemy components.

use bevy::prelude::*;

/// Marks a damageable enemy body
#[derive(Component, Debug)]
pub struct Enemy;

/// Archetype id from the track's archetype table
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct EnemyArchetype(pub String);

/// Where on the rail an enemy was placed at spawn
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct RailPosition(pub f32);

/// Health component for damageable entities
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max }
    }

    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.max(0.0).min(self.current);
        self.current -= actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    /// Apply `amount` and report whether this strike is the one that killed.
    pub fn strike(&mut self, amount: f32) -> bool {
        if self.is_dead() {
            return false;
        }
        self.take_damage(amount);
        self.is_dead()
    }
}
