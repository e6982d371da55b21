//! ECS Components
//!
//! The closed set of components the registry stores. Each kind gets its
//! own typed table inside [`ComponentTables`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::registry::{Component, Entity};
use crate::world::{Biome, DungeonCell, TileType};

// ============================================================================
// Position
// ============================================================================

/// Position in world space (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Top-left corner of a tile
    pub fn from_tile(tile_x: i32, tile_y: i32, tile_size: i32) -> Self {
        Self::new((tile_x * tile_size) as f32, (tile_y * tile_size) as f32)
    }

    /// Tile containing this point
    pub fn tile(&self, tile_size: i32) -> (i32, i32) {
        let size = tile_size as f32;
        ((self.x / size).floor() as i32, (self.y / size).floor() as i32)
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// What an entity looks like to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sprite {
    Terrain(TileType),
    Dungeon(DungeonCell),
    Tree,
    Player,
    Enemy,
}

impl Sprite {
    /// Ground sprites are drawn beneath everything else
    pub fn is_ground(&self) -> bool {
        match self {
            Sprite::Terrain(tile) => matches!(tile, TileType::Grass | TileType::Sand | TileType::Snow),
            Sprite::Dungeon(cell) => *cell == DungeonCell::Floor,
            _ => false,
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            Sprite::Terrain(tile) => tile.glyph(),
            Sprite::Dungeon(cell) => cell.glyph(),
            Sprite::Tree => '♣',
            Sprite::Player => '@',
            Sprite::Enemy => 'e',
        }
    }
}

/// Visual representation of an entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Renderable {
    pub sprite: Sprite,
}

impl Renderable {
    pub fn new(sprite: Sprite) -> Self {
        Self { sprite }
    }
}

// ============================================================================
// Identity
// ============================================================================

/// Marks an entity as the player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player;

/// Marks an entity as an enemy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy;

// ============================================================================
// Stats
// ============================================================================

/// Actor stats. Only stored here; the combat rules that read them live elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub hp: i32,
    pub max_hp: i32,
    pub damage: i32,
    pub xp: u32,
}

impl Stats {
    pub fn new(max_hp: i32, damage: i32) -> Self {
        Self {
            hp: max_hp,
            max_hp,
            damage,
            xp: 0,
        }
    }

    pub fn player_base() -> Self {
        Self::new(100, 10)
    }

    pub fn enemy_base() -> Self {
        Self::new(20, 5)
    }
}

// ============================================================================
// Terrain
// ============================================================================

/// Overworld data copied from the generated tile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerrainInfo {
    pub biome: Biome,
    pub elevation: f32,
}

// ============================================================================
// Tables
// ============================================================================

macro_rules! component_tables {
    ($($ty:ident => $field:ident : $name:literal),* $(,)?) => {
        /// Tag naming one component table
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum ComponentKind {
            $($ty),*
        }

        impl ComponentKind {
            pub const ALL: &'static [ComponentKind] = &[$(ComponentKind::$ty),*];

            pub fn name(&self) -> &'static str {
                match self {
                    $(ComponentKind::$ty => $name),*
                }
            }
        }

        /// One entity-keyed table per component kind
        #[derive(Debug, Default)]
        pub struct ComponentTables {
            $($field: HashMap<Entity, $ty>),*
        }

        impl ComponentTables {
            pub(crate) fn contains(&self, entity: Entity, kind: ComponentKind) -> bool {
                match kind {
                    $(ComponentKind::$ty => self.$field.contains_key(&entity)),*
                }
            }

            pub(crate) fn remove(&mut self, entity: Entity, kind: ComponentKind) {
                match kind {
                    $(ComponentKind::$ty => {
                        self.$field.remove(&entity);
                    }),*
                }
            }

            pub(crate) fn remove_all(&mut self, entity: Entity) {
                $(self.$field.remove(&entity);)*
            }

            pub(crate) fn len(&self, kind: ComponentKind) -> usize {
                match kind {
                    $(ComponentKind::$ty => self.$field.len()),*
                }
            }

            pub(crate) fn clear(&mut self) {
                $(self.$field.clear();)*
            }
        }

        $(
            impl Component for $ty {
                const KIND: ComponentKind = ComponentKind::$ty;

                fn table(tables: &ComponentTables) -> &HashMap<Entity, Self> {
                    &tables.$field
                }

                fn table_mut(tables: &mut ComponentTables) -> &mut HashMap<Entity, Self> {
                    &mut tables.$field
                }
            }
        )*
    };
}

component_tables! {
    Position => positions: "position",
    Renderable => renderables: "renderable",
    Player => players: "player",
    Enemy => enemies: "enemy",
    Stats => stats: "stats",
    TerrainInfo => terrain: "terrain",
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_tile() {
        let pos = Position::new(160.0, 175.5);
        assert_eq!(pos.tile(32), (5, 5));
        assert_eq!(Position::from_tile(3, 4, 32), Position::new(96.0, 128.0));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ComponentKind::Position.name(), "position");
        assert_eq!(ComponentKind::TerrainInfo.to_string(), "terrain");
        assert_eq!(ComponentKind::ALL.len(), 6);
    }

    #[test]
    fn test_ground_sprites() {
        assert!(Sprite::Terrain(TileType::Grass).is_ground());
        assert!(Sprite::Dungeon(DungeonCell::Floor).is_ground());
        assert!(!Sprite::Terrain(TileType::Water).is_ground());
        assert!(!Sprite::Player.is_ground());
    }
}
