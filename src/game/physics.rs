use bevy::prelude::*;

use super::actor::Actor;
use super::intent::Intent;
use super::stats::types::Tick;

/// Recompute every actor's velocity from its intent. Runs before integration.
pub fn tick_actors(mut query: Query<(&mut Actor, &Intent)>) {
    for (mut actor, intent) in &mut query {
        actor.tick(intent);
    }
}

/// One integration step: velocity is a per-tick displacement.
pub fn integrate(actor: &mut Actor) {
    let next = actor.position() + actor.velocity();
    actor.set_position(next);
}

/// PhysicsSet: integrate velocity → position.
pub fn integrate_positions(mut query: Query<&mut Actor>, mut tick: Local<Tick>) {
    *tick = tick.next();
    let log_this_tick = tick.0 % 60 == 0;

    for mut actor in &mut query {
        integrate(&mut actor);
        if log_this_tick && actor.velocity() != Vec2::ZERO {
            debug!(
                "[Move] pos=({:.1}, {:.1}) vel=({:.1}, {:.1})",
                actor.position().x,
                actor.position().y,
                actor.velocity().x,
                actor.velocity().y
            );
        }
    }
}

/// Copy actor positions onto their sprites.
pub fn sync_transforms(mut query: Query<(&Actor, &mut Transform), Changed<Actor>>) {
    for (actor, mut transform) in &mut query {
        let position = actor.position();
        transform.translation.x = position.x;
        transform.translation.y = position.y;
    }
}
