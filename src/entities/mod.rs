//! Entity creation
//!
//! Turns generated grids into registry entities and spawns the actors.

pub mod enemies;
pub mod player;
pub mod terrain;

pub use enemies::{spawn_enemies, spawn_enemy};
pub use player::spawn_player;
pub use terrain::{materialize_dungeon, materialize_overworld};
