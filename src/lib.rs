//! Two-player top-down dungeon game: each player drives an actor with its own
//! key set, with clamped health bookkeeping per actor.

pub mod config;
pub mod game;
pub mod plugins;

pub use config::tuning::{Tuning, TuningError};
pub use game::actor::Actor;
pub use game::errors::ActorError;
pub use game::intent::Intent;
pub use game::stats::types::{Direction, Health, Speed};
