//! World module
//!
//! Contains grids, tiles, procedural generation and fog of war.

pub mod fog;
pub mod generation;
pub mod map;
pub mod noise;
pub mod tile;

pub use fog::{FogOfWar, FogState};
pub use map::{ActiveMap, Grid, Location, PLACEMENT_ATTEMPTS};
pub use tile::{Biome, DungeonCell, TerrainTile, TileType};
