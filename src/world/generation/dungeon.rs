//! Dungeon generator using a drunken walk
//!
//! A cursor starts at the centre and wanders for a fixed number of steps,
//! turning every cell it visits into floor. The outermost ring of cells is
//! never visited, so the map is always walled in.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::world::{DungeonCell, Grid};

/// Tunables for dungeon carving
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    /// Number of walk steps
    pub steps: u32,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self { steps: 400 }
    }
}

/// Produces wall/floor grids
#[derive(Debug, Clone, Default)]
pub struct DungeonGenerator {
    config: DungeonConfig,
}

impl DungeonGenerator {
    pub fn new(config: DungeonConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DungeonConfig {
        &self.config
    }

    /// Carve a dungeon with a drunken walk
    pub fn generate(&self, width: i32, height: i32, rng: &mut impl Rng) -> Grid<DungeonCell> {
        let mut map = Grid::filled(width, height, DungeonCell::Wall);

        // Needs at least one interior cell inside the wall ring
        if width < 3 || height < 3 {
            log::debug!("Dungeon {}x{} has no interior, leaving it solid", width, height);
            return map;
        }

        let mut x = width / 2;
        let mut y = height / 2;

        for _ in 0..self.config.steps {
            map.set(x, y, DungeonCell::Floor);

            match rng.gen_range(0..4) {
                0 => y -= 1,
                1 => y += 1,
                2 => x -= 1,
                _ => x += 1,
            }

            x = x.clamp(1, width - 2);
            y = y.clamp(1, height - 2);
        }

        log::debug!(
            "Carved {}x{} dungeon: {} floor cells",
            width,
            height,
            map.iter().filter(|(_, _, c)| c.is_walkable()).count()
        );
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn is_border(x: i32, y: i32, w: i32, h: i32) -> bool {
        x == 0 || y == 0 || x == w - 1 || y == h - 1
    }

    #[test]
    fn test_border_stays_wall() {
        let mut rng = StdRng::seed_from_u64(12);
        let generator = DungeonGenerator::default();
        for &(w, h) in &[(3, 3), (4, 7), (40, 40), (80, 25)] {
            let map = generator.generate(w, h, &mut rng);
            assert_eq!(map.width(), w);
            assert_eq!(map.height(), h);
            for (x, y, cell) in map.iter() {
                if is_border(x, y, w, h) {
                    assert_eq!(*cell, DungeonCell::Wall, "border floor at ({}, {}) in {}x{}", x, y, w, h);
                }
            }
        }
    }

    #[test]
    fn test_center_is_floor() {
        let mut rng = StdRng::seed_from_u64(99);
        let map = DungeonGenerator::default().generate(40, 40, &mut rng);
        assert_eq!(map.get(20, 20), Some(&DungeonCell::Floor));
    }

    #[test]
    fn test_zero_steps_is_solid() {
        let mut rng = StdRng::seed_from_u64(1);
        let map = DungeonGenerator::new(DungeonConfig { steps: 0 }).generate(10, 10, &mut rng);
        assert!(map.iter().all(|(_, _, c)| *c == DungeonCell::Wall));
    }

    #[test]
    fn test_floor_bounded_by_steps() {
        let mut rng = StdRng::seed_from_u64(5);
        let map = DungeonGenerator::new(DungeonConfig { steps: 25 }).generate(40, 40, &mut rng);
        let floors = map.iter().filter(|(_, _, c)| c.is_walkable()).count();
        assert!(floors >= 1 && floors <= 25);
    }

    #[test]
    fn test_tiny_map_is_solid() {
        let mut rng = StdRng::seed_from_u64(1);
        let map = DungeonGenerator::default().generate(2, 5, &mut rng);
        assert_eq!(map.rows().count(), 5);
        assert!(map.iter().all(|(_, _, c)| *c == DungeonCell::Wall));
    }
}
