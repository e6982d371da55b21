//! Wayfarer - simulation core of a tile-based exploration game
//!
//! A small entity registry, an overworld terrain generator, a dungeon
//! carver and a fog of war tracker, wired together by a game session.

pub mod data;
pub mod ecs;
pub mod entities;
pub mod game;
pub mod world;

// Re-export commonly used types
pub use data::{ConfigError, WorldConfig};
pub use ecs::{ComponentKind, Entity, Registry};
pub use game::{Game, InputSnapshot};
pub use world::{ActiveMap, FogOfWar, FogState, Location};
