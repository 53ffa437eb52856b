// Game domain module
// Contains the match entity, its value objects, and domain events

#![allow(clippy::module_inception)]

pub mod events;
pub mod game;
pub mod value_objects;

// Re-export main types for convenience
pub use events::GameEvent;
pub use game::Game;
pub use value_objects::{MatchKey, Score, TeamName};
