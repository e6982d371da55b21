//! World configuration
//!
//! Every tunable the generators, the fog tracker and the session read.

use serde::{Deserialize, Serialize};

use super::loader::ConfigError;
use crate::world::generation::{DungeonConfig, TerrainConfig};

/// Width and height in tiles (or pixels for the viewport)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapSize {
    pub width: i32,
    pub height: i32,
}

impl MapSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Top-level world settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Pixels per tile; world positions are divided by this to get tiles
    pub tile_size: i32,
    /// Fog of war sight radius in tiles
    pub view_radius: i32,
    pub overworld_size: MapSize,
    pub dungeon_size: MapSize,
    pub terrain: TerrainConfig,
    pub dungeon: DungeonConfig,
    /// Pixels per second
    pub player_speed: f32,
    /// Overworld spawn (pixels) when no walkable tile turns up
    pub overworld_start: (f32, f32),
    /// Enemies placed in each dungeon
    pub enemy_count: u32,
    /// Seconds per in-game day
    pub day_duration: f32,
    /// Screen size in pixels, for the camera
    pub viewport: MapSize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            tile_size: 32,
            view_radius: 8,
            overworld_size: MapSize::new(50, 40),
            dungeon_size: MapSize::new(40, 40),
            terrain: TerrainConfig::default(),
            dungeon: DungeonConfig::default(),
            player_speed: 150.0,
            overworld_start: (100.0, 100.0),
            enemy_count: 10,
            day_duration: 60.0,
            viewport: MapSize::new(800, 600),
        }
    }
}

impl WorldConfig {
    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_size <= 0 {
            return Err(ConfigError::Invalid(format!(
                "tile_size must be positive, got {}",
                self.tile_size
            )));
        }
        if self.view_radius < 0 {
            return Err(ConfigError::Invalid(format!(
                "view_radius must not be negative, got {}",
                self.view_radius
            )));
        }
        for (name, size) in [("overworld_size", self.overworld_size), ("dungeon_size", self.dungeon_size)] {
            if size.width <= 0 || size.height <= 0 {
                return Err(ConfigError::Invalid(format!(
                    "{} must be positive, got {}x{}",
                    name, size.width, size.height
                )));
            }
        }
        if !(self.day_duration > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "day_duration must be positive, got {}",
                self.day_duration
            )));
        }
        let total_weight: f64 = self.terrain.octave_weights.iter().sum();
        if !(total_weight > 0.0) {
            return Err(ConfigError::Invalid(
                "terrain.octave_weights must sum to a positive value".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate RON text
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let config: WorldConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Pretty RON for writing back to disk
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_world_constants() {
        let config = WorldConfig::default();
        assert_eq!(config.tile_size, 32);
        assert_eq!(config.view_radius, 8);
        assert_eq!(config.dungeon.steps, 400);
        assert_eq!(config.terrain.frequency, 0.1);
        assert_eq!(config.terrain.octave_weights, vec![1.0, 0.5, 0.25]);
        assert_eq!(config.terrain.thresholds.highland_moisture, [0.10, 0.20, 0.50]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ron_round_trip() {
        let mut config = WorldConfig::default();
        config.view_radius = 5;
        config.dungeon.steps = 900;

        let text = config.to_ron_string().unwrap();
        assert_eq!(WorldConfig::from_ron_str(&text).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = WorldConfig::from_ron_str("(view_radius: 3, dungeon: (steps: 50))").unwrap();
        assert_eq!(config.view_radius, 3);
        assert_eq!(config.dungeon.steps, 50);
        assert_eq!(config.tile_size, 32);
        assert_eq!(config.overworld_size, MapSize::new(50, 40));
    }

    #[test]
    fn test_rejects_bad_tile_size() {
        let err = WorldConfig::from_ron_str("(tile_size: 0)").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_garbage() {
        let err = WorldConfig::from_ron_str("(tile_size: \"big\")").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
