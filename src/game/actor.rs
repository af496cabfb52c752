//! Actor state controller: per-tick velocity from intent, clamped health.
//!
//! The actor never moves itself. Position integration belongs to
//! [`crate::game::physics`], which runs after [`Actor::tick`] each tick.

use bevy::prelude::*;

use super::errors::ActorError;
use super::intent::Intent;
use super::stats::types::{Health, Speed};

/// Movement and health record for one independently controlled entity.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Actor {
    position: Vec2,
    velocity: Vec2,
    speed: Speed,
    health: Health,
}

impl Actor {
    /// New actor at `spawn` with zero velocity and `health` refilled to max.
    pub fn new(spawn: Vec2, speed: Speed, health: Health) -> Self {
        Self {
            position: spawn,
            velocity: Vec2::ZERO,
            speed,
            health: health.refilled(),
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Written by the integration step.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn speed(&self) -> f32 {
        self.speed.get()
    }

    pub fn health(&self) -> u32 {
        self.health.current()
    }

    pub fn max_health(&self) -> u32 {
        self.health.max()
    }

    /// Recompute velocity from `intent`. Touches nothing but velocity.
    pub fn tick(&mut self, intent: &Intent) {
        self.velocity = intent.velocity(self.speed.get());
    }

    /// health ← max(0, health − amount). Returns the new health.
    pub fn apply_damage(&mut self, amount: i32) -> Result<u32, ActorError> {
        let amount = non_negative("damage", amount)?;
        self.health = self.health.sub_clamped(amount);
        Ok(self.health.current())
    }

    /// health ← min(max_health, health + amount). Returns the new health.
    pub fn apply_heal(&mut self, amount: i32) -> Result<u32, ActorError> {
        let amount = non_negative("heal", amount)?;
        self.health = self.health.add_clamped(amount);
        Ok(self.health.current())
    }

    pub fn is_alive(&self) -> bool {
        self.health.is_alive()
    }
}

fn non_negative(operation: &'static str, amount: i32) -> Result<u32, ActorError> {
    u32::try_from(amount).map_err(|_| ActorError::InvalidArgument { operation, amount })
}
