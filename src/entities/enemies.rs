//! Enemy entity creation
//!
//! Enemies are dropped onto random standable tiles. The search for a tile
//! is capped; an enemy that finds no spot is simply not spawned.

use rand::Rng;

use crate::ecs::{Enemy, Entity, Position, Registry, Renderable, Sprite, Stats};
use crate::world::Grid;

/// Spawn a single enemy
pub fn spawn_enemy<C>(registry: &mut Registry<C>, pos: Position) -> Entity {
    let entity = registry.create_entity();
    registry.add_component(entity, pos);
    registry.add_component(entity, Renderable::new(Sprite::Enemy));
    registry.add_component(entity, Stats::enemy_base());
    registry.add_component(entity, Enemy);
    entity
}

/// Spawn up to `count` enemies on cells accepted by `can_stand`
pub fn spawn_enemies<C, T>(
    registry: &mut Registry<C>,
    grid: &Grid<T>,
    rng: &mut impl Rng,
    count: u32,
    tile_size: i32,
    mut can_stand: impl FnMut(&T) -> bool,
) -> Vec<Entity> {
    let mut spawned = Vec::with_capacity(count as usize);

    for _ in 0..count {
        match grid.random_position_where(rng, &mut can_stand) {
            Some((x, y)) => {
                let pos = Position::from_tile(x, y, tile_size);
                spawned.push(spawn_enemy(registry, pos));
            }
            None => log::debug!("No free tile for enemy, skipping"),
        }
    }

    spawned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::ComponentKind;
    use crate::world::DungeonCell;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_enemies_land_on_floor() {
        let mut grid = Grid::filled(20, 20, DungeonCell::Wall);
        for y in 5..15 {
            for x in 5..15 {
                grid.set(x, y, DungeonCell::Floor);
            }
        }
        let mut registry = Registry::<()>::new();
        let mut rng = StdRng::seed_from_u64(4);

        let enemies = spawn_enemies(&mut registry, &grid, &mut rng, 10, 32, |c| c.is_walkable());
        assert_eq!(enemies.len(), 10);
        for enemy in enemies {
            let (x, y) = registry.get_component::<Position>(enemy).unwrap().tile(32);
            assert_eq!(grid.get(x, y), Some(&DungeonCell::Floor));
            assert_eq!(registry.get_component::<Stats>(enemy), Some(&Stats::enemy_base()));
        }
    }

    #[test]
    fn test_no_room_skips_silently() {
        let grid = Grid::filled(8, 8, DungeonCell::Wall);
        let mut registry = Registry::<()>::new();
        let mut rng = StdRng::seed_from_u64(4);

        let enemies = spawn_enemies(&mut registry, &grid, &mut rng, 5, 32, |c| c.is_walkable());
        assert!(enemies.is_empty());
        assert!(registry.query(&[ComponentKind::Enemy]).is_empty());
    }
}
