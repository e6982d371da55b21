//! Tile definitions
//!
//! Overworld tiles carry a biome and elevation; dungeon cells are bare
//! wall/floor symbols.

use serde::{Deserialize, Serialize};

/// One overworld cell as produced by the terrain generator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerrainTile {
    pub tile_type: TileType,
    pub biome: Biome,
    /// Normalized elevation in `[0, 1]`
    pub elevation: f32,
}

impl TerrainTile {
    pub fn is_walkable(&self) -> bool {
        self.tile_type.is_walkable()
    }
}

/// Renderable overworld palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    Water,
    Sand,
    Grass,
    Forest,
    Snow,
    Mountain,
}

impl TileType {
    pub const ALL: [TileType; 6] = [
        TileType::Water,
        TileType::Sand,
        TileType::Grass,
        TileType::Forest,
        TileType::Snow,
        TileType::Mountain,
    ];

    pub fn is_walkable(&self) -> bool {
        !matches!(self, TileType::Water | TileType::Mountain)
    }

    pub fn glyph(&self) -> char {
        match self {
            TileType::Water => '~',
            TileType::Sand => ':',
            TileType::Grass => '.',
            TileType::Forest => '♣',
            TileType::Snow => '*',
            TileType::Mountain => '^',
        }
    }
}

/// Fine-grained climate classification of an overworld tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Biome {
    Ocean,
    Beach,
    // Highland
    Scorched,
    Bare,
    Tundra,
    Snow,
    // Upland
    TemperateDesert,
    Shrubland,
    Taiga,
    // Lowland
    SubtropicalDesert,
    Grassland,
    Forest,
    Rainforest,
}

impl Biome {
    /// Collapse into the renderable palette (before the mountain override)
    pub fn tile_type(&self) -> TileType {
        match self {
            Biome::Ocean => TileType::Water,
            Biome::Beach | Biome::TemperateDesert | Biome::SubtropicalDesert => TileType::Sand,
            Biome::Forest | Biome::Rainforest => TileType::Forest,
            Biome::Snow | Biome::Tundra => TileType::Snow,
            Biome::Scorched | Biome::Bare | Biome::Shrubland | Biome::Taiga | Biome::Grassland => {
                TileType::Grass
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Biome::Ocean => "Ocean",
            Biome::Beach => "Beach",
            Biome::Scorched => "Scorched",
            Biome::Bare => "Bare",
            Biome::Tundra => "Tundra",
            Biome::Snow => "Snow",
            Biome::TemperateDesert => "Temperate Desert",
            Biome::Shrubland => "Shrubland",
            Biome::Taiga => "Taiga",
            Biome::SubtropicalDesert => "Subtropical Desert",
            Biome::Grassland => "Grassland",
            Biome::Forest => "Forest",
            Biome::Rainforest => "Rainforest",
        }
    }
}

/// A dungeon cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DungeonCell {
    #[default]
    Wall,
    Floor,
}

impl DungeonCell {
    pub fn is_walkable(&self) -> bool {
        *self == DungeonCell::Floor
    }

    pub fn glyph(&self) -> char {
        match self {
            DungeonCell::Wall => '#',
            DungeonCell::Floor => '.',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_collapse() {
        assert_eq!(Biome::Ocean.tile_type(), TileType::Water);
        assert_eq!(Biome::Beach.tile_type(), TileType::Sand);
        assert_eq!(Biome::TemperateDesert.tile_type(), TileType::Sand);
        assert_eq!(Biome::Rainforest.tile_type(), TileType::Forest);
        assert_eq!(Biome::Tundra.tile_type(), TileType::Snow);
        assert_eq!(Biome::Taiga.tile_type(), TileType::Grass);
        assert_eq!(Biome::Scorched.tile_type(), TileType::Grass);
    }

    #[test]
    fn test_walkability() {
        assert!(!TileType::Water.is_walkable());
        assert!(!TileType::Mountain.is_walkable());
        assert!(TileType::Forest.is_walkable());
        assert!(DungeonCell::Floor.is_walkable());
        assert!(!DungeonCell::default().is_walkable());
    }
}
