pub mod actor;
pub mod arena;
pub mod combat;
pub mod components;
pub mod errors;
pub mod events;
pub mod input;
pub mod intent;
pub mod physics;
pub mod stats;
