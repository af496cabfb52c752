use bevy::prelude::*;

/// Health changes routed from combat/trigger sources to actors.
///
/// Amounts are signed so that bad input reaches the actor and is rejected
/// there instead of being silently wrapped.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthEvent {
    Damage { target: Entity, amount: i32 },
    Heal { target: Entity, amount: i32 },
}

impl HealthEvent {
    pub fn target(&self) -> Entity {
        match *self {
            Self::Damage { target, .. } | Self::Heal { target, .. } => target,
        }
    }
}
