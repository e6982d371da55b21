//! Procedural map generation
//!
//! Overworld terrain from layered value noise, dungeons from a drunken walk.

pub mod biomes;
pub mod dungeon;
pub mod terrain;

pub use biomes::BiomeThresholds;
pub use dungeon::{DungeonConfig, DungeonGenerator};
pub use terrain::{TerrainConfig, TerrainGenerator};
