use bevy::prelude::*;

use super::actor::Actor;
use super::errors::ActorError;
use super::events::HealthEvent;

/// Apply one health event to `actor`. Returns the resulting health.
pub fn apply_health_event(actor: &mut Actor, event: &HealthEvent) -> Result<u32, ActorError> {
    match *event {
        HealthEvent::Damage { amount, .. } => actor.apply_damage(amount),
        HealthEvent::Heal { amount, .. } => actor.apply_heal(amount),
    }
}

/// EventApplySet: apply Damage/Heal messages to actor health.
/// Rejected events are logged and dropped; the tick carries on.
pub fn apply_health_events(mut events: MessageReader<HealthEvent>, mut actors: Query<&mut Actor>) {
    for event in events.read() {
        let Ok(mut actor) = actors.get_mut(event.target()) else {
            debug!("health event for missing actor {:?}", event.target());
            continue;
        };
        match apply_health_event(&mut actor, event) {
            Ok(hp) => debug!("{:?} -> hp={}", event, hp),
            Err(e) => warn!("dropping {:?}: {e}", event),
        }
    }
}

/// Read and drop health messages while the round is over.
pub fn discard_health_events(mut events: MessageReader<HealthEvent>) {
    let dropped = events.read().count();
    if dropped > 0 {
        debug!("game over, dropping {dropped} health event(s)");
    }
}
