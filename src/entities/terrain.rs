//! Level materialization
//!
//! Copies generated grids into the registry, one entity per tile. The
//! registry keeps no reference to the grid afterwards.

use crate::ecs::{Entity, Position, Registry, Renderable, Sprite, TerrainInfo};
use crate::world::{DungeonCell, Grid, TerrainTile, TileType};

/// Create tile entities for an overworld; forests also get a tree on top.
///
/// Returns the number of entities created.
pub fn materialize_overworld<C>(
    registry: &mut Registry<C>,
    grid: &Grid<TerrainTile>,
    tile_size: i32,
) -> usize {
    let mut created = 0;

    for (x, y, tile) in grid.iter() {
        let pos = Position::from_tile(x, y, tile_size);
        // Trees are drawn over grass
        let ground = match tile.tile_type {
            TileType::Forest => TileType::Grass,
            other => other,
        };

        let entity = registry.create_entity();
        registry.add_component(entity, pos);
        registry.add_component(entity, Renderable::new(Sprite::Terrain(ground)));
        registry.add_component(
            entity,
            TerrainInfo {
                biome: tile.biome,
                elevation: tile.elevation,
            },
        );
        created += 1;

        if tile.tile_type == TileType::Forest {
            spawn_tree(registry, pos);
            created += 1;
        }
    }

    log::debug!("Materialized {}x{} overworld into {} entities", grid.width(), grid.height(), created);
    created
}

/// Create one entity per dungeon cell
pub fn materialize_dungeon<C>(
    registry: &mut Registry<C>,
    grid: &Grid<DungeonCell>,
    tile_size: i32,
) -> usize {
    for (x, y, cell) in grid.iter() {
        let entity = registry.create_entity();
        registry.add_component(entity, Position::from_tile(x, y, tile_size));
        registry.add_component(entity, Renderable::new(Sprite::Dungeon(*cell)));
    }

    let created = (grid.width() * grid.height()) as usize;
    log::debug!("Materialized {}x{} dungeon into {} entities", grid.width(), grid.height(), created);
    created
}

fn spawn_tree<C>(registry: &mut Registry<C>, pos: Position) -> Entity {
    let tree = registry.create_entity();
    registry.add_component(tree, pos);
    registry.add_component(tree, Renderable::new(Sprite::Tree));
    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::ComponentKind;
    use crate::world::Biome;

    fn tile(tile_type: TileType, biome: Biome) -> TerrainTile {
        TerrainTile {
            tile_type,
            biome,
            elevation: 0.5,
        }
    }

    #[test]
    fn test_forest_gets_tree() {
        let grid = Grid::from_fn(2, 1, |x, _| {
            if x == 0 {
                tile(TileType::Forest, Biome::Forest)
            } else {
                tile(TileType::Sand, Biome::Beach)
            }
        });
        let mut registry = Registry::<()>::new();
        assert_eq!(materialize_overworld(&mut registry, &grid, 32), 3);

        let terrain = registry.query(&[ComponentKind::TerrainInfo]);
        assert_eq!(terrain.len(), 2);
        let forest_floor = registry.get_component::<Renderable>(terrain[0]).unwrap();
        assert_eq!(forest_floor.sprite, Sprite::Terrain(TileType::Grass));

        let trees: Vec<_> = registry
            .query(&[ComponentKind::Renderable])
            .into_iter()
            .filter(|&e| registry.get_component::<Renderable>(e).map(|r| r.sprite) == Some(Sprite::Tree))
            .collect();
        assert_eq!(trees.len(), 1);
        assert_eq!(registry.get_component::<Position>(trees[0]), Some(&Position::new(0.0, 0.0)));
    }

    #[test]
    fn test_dungeon_one_entity_per_cell() {
        let grid = Grid::filled(4, 3, DungeonCell::Wall);
        let mut registry = Registry::<()>::new();
        assert_eq!(materialize_dungeon(&mut registry, &grid, 32), 12);
        assert_eq!(registry.query(&[ComponentKind::Position, ComponentKind::Renderable]).len(), 12);
        let last = *registry.entities().last().unwrap();
        assert_eq!(registry.get_component::<Position>(last), Some(&Position::new(96.0, 64.0)));
    }
}
