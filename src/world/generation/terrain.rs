//! Overworld terrain generator
//!
//! Multi-octave value noise gives elevation, an offset sample of the same
//! field gives moisture, and the two together pick a biome per tile.

use noise::NoiseFn;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::biomes::BiomeThresholds;
use crate::world::noise::ValueNoise;
use crate::world::{Grid, TerrainTile, TileType};

/// Tunables for overworld generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Noise frequency in tiles⁻¹
    pub frequency: f64,
    /// Octave weights; octave `n` samples at `frequency * 2^n`
    pub octave_weights: Vec<f64>,
    /// Offset applied to both axes for the moisture sample
    pub moisture_offset: f64,
    /// Anything strictly above this elevation renders as mountain
    pub mountain_elevation: f64,
    pub thresholds: BiomeThresholds,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            frequency: 0.1,
            octave_weights: vec![1.0, 0.5, 0.25],
            moisture_offset: 100.0,
            mountain_elevation: 0.70,
            thresholds: BiomeThresholds::default(),
        }
    }
}

/// Produces overworld grids
#[derive(Debug, Clone, Default)]
pub struct TerrainGenerator {
    config: TerrainConfig,
}

impl TerrainGenerator {
    pub fn new(config: TerrainConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Generate with a fresh seed drawn from `rng`
    pub fn generate(&self, width: i32, height: i32, rng: &mut impl Rng) -> Grid<TerrainTile> {
        let seed: u64 = rng.gen();
        log::debug!("Generating {}x{} overworld with seed {}", width, height, seed);
        self.generate_with_seed(width, height, seed)
    }

    /// Reproducible generation from a fixed seed
    pub fn generate_with_seed(&self, width: i32, height: i32, seed: u64) -> Grid<TerrainTile> {
        self.generate_from_noise(width, height, &ValueNoise::new(seed))
    }

    /// Generate from any `[0, 1]` noise source
    pub fn generate_from_noise<N>(&self, width: i32, height: i32, noise: &N) -> Grid<TerrainTile>
    where
        N: NoiseFn<f64, 2>,
    {
        let cfg = &self.config;
        let total_weight: f64 = cfg.octave_weights.iter().sum();

        Grid::from_fn(width, height, |x, y| {
            let nx = x as f64 * cfg.frequency;
            let ny = y as f64 * cfg.frequency;

            let mut elevation = 0.0_f64;
            let mut scale = 1.0_f64;
            for weight in &cfg.octave_weights {
                elevation += weight * noise.get([nx * scale, ny * scale]);
                scale *= 2.0;
            }
            if total_weight > 0.0 {
                elevation /= total_weight;
            }
            let elevation = elevation.clamp(0.0, 1.0);

            let moisture = noise.get([nx + cfg.moisture_offset, ny + cfg.moisture_offset]);

            let biome = cfg.thresholds.classify(elevation, moisture);
            let tile_type = if elevation > cfg.mountain_elevation {
                TileType::Mountain
            } else {
                biome.tile_type()
            };

            TerrainTile {
                tile_type,
                biome,
                elevation: elevation as f32,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Biome;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Constant field, handy for pinning the classification
    struct Flat(f64);

    impl NoiseFn<f64, 2> for Flat {
        fn get(&self, _point: [f64; 2]) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_dimensions_and_ranges() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = TerrainGenerator::default().generate(50, 40, &mut rng);
        assert_eq!(grid.height(), 40);
        assert_eq!(grid.rows().count(), 40);
        assert!(grid.rows().all(|row| row.len() == 50));
        for (_, _, tile) in grid.iter() {
            assert!((0.0..=1.0).contains(&tile.elevation));
            assert!(TileType::ALL.contains(&tile.tile_type));
        }
    }

    #[test]
    fn test_seed_reproducible() {
        let generator = TerrainGenerator::default();
        let a = generator.generate_with_seed(20, 20, 77);
        let b = generator.generate_with_seed(20, 20, 77);
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_width_has_empty_rows() {
        let grid = TerrainGenerator::default().generate_with_seed(0, 5, 1);
        assert_eq!(grid.rows().count(), 5);
        assert!(grid.rows().all(|row| row.is_empty()));
    }

    #[test]
    fn test_mountain_override() {
        let generator = TerrainGenerator::default();
        let grid = generator.generate_from_noise(3, 3, &Flat(0.75));
        for (_, _, tile) in grid.iter() {
            // 0.75 sits in the upland band but renders as mountain
            assert_eq!(tile.tile_type, TileType::Mountain);
            assert_eq!(tile.biome, Biome::Taiga);
        }
    }

    #[test]
    fn test_flat_lowland() {
        let generator = TerrainGenerator::default();
        let grid = generator.generate_from_noise(2, 2, &Flat(0.5));
        let tile = grid.get(1, 1).unwrap();
        assert_eq!(tile.biome, Biome::Forest);
        assert_eq!(tile.tile_type, TileType::Forest);
        assert!((tile.elevation - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_flat_ocean() {
        let grid = TerrainGenerator::default().generate_from_noise(2, 2, &Flat(0.1));
        assert!(grid.iter().all(|(_, _, t)| t.tile_type == TileType::Water));
    }
}
