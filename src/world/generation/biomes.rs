//! Biome classification
//!
//! Elevation picks the band first, then moisture picks the biome inside it.

use serde::{Deserialize, Serialize};

use crate::world::Biome;

/// Elevation and moisture cut-offs used to classify a tile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiomeThresholds {
    /// Below this elevation: ocean
    pub ocean: f64,
    /// Below this elevation: beach
    pub beach: f64,
    /// Above this elevation: highland band
    pub highland: f64,
    /// Above this elevation: upland band
    pub upland: f64,
    /// Moisture cut-offs for scorched / bare / tundra (rest is snow)
    pub highland_moisture: [f64; 3],
    /// Moisture cut-offs for temperate desert / shrubland (rest is taiga)
    pub upland_moisture: [f64; 2],
    /// Moisture cut-offs for subtropical desert / grassland / forest (rest is rainforest)
    pub lowland_moisture: [f64; 3],
}

impl Default for BiomeThresholds {
    fn default() -> Self {
        Self {
            ocean: 0.30,
            beach: 0.35,
            highland: 0.80,
            upland: 0.60,
            highland_moisture: [0.10, 0.20, 0.50],
            upland_moisture: [0.33, 0.66],
            lowland_moisture: [0.16, 0.33, 0.66],
        }
    }
}

impl BiomeThresholds {
    /// Classify a tile from its elevation and moisture
    pub fn classify(&self, elevation: f64, moisture: f64) -> Biome {
        if elevation < self.ocean {
            Biome::Ocean
        } else if elevation < self.beach {
            Biome::Beach
        } else if elevation > self.highland {
            let [scorched, bare, tundra] = self.highland_moisture;
            if moisture < scorched {
                Biome::Scorched
            } else if moisture < bare {
                Biome::Bare
            } else if moisture < tundra {
                Biome::Tundra
            } else {
                Biome::Snow
            }
        } else if elevation > self.upland {
            let [desert, shrubland] = self.upland_moisture;
            if moisture < desert {
                Biome::TemperateDesert
            } else if moisture < shrubland {
                Biome::Shrubland
            } else {
                Biome::Taiga
            }
        } else {
            let [desert, grassland, forest] = self.lowland_moisture;
            if moisture < desert {
                Biome::SubtropicalDesert
            } else if moisture < grassland {
                Biome::Grassland
            } else if moisture < forest {
                Biome::Forest
            } else {
                Biome::Rainforest
            }
        }
    }
}
