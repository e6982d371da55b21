//! Fog of war
//!
//! Tri-state memory per tile. Each update demotes what was visible to
//! remembered, then lights up a disc around the viewer. Walls do not block
//! sight; this is a radius test, not a shadowcast.

use serde::{Deserialize, Serialize};

/// Visibility memory of a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum FogState {
    #[default]
    Unseen,
    Remembered,
    Visible,
}

/// Per-tile visibility tracker for the active map
#[derive(Debug, Clone)]
pub struct FogOfWar {
    width: i32,
    height: i32,
    tile_size: i32,
    view_radius: i32,
    cells: Vec<FogState>,
}

impl FogOfWar {
    /// `tile_size` converts world coordinates to tiles and must be positive
    pub fn new(width: i32, height: i32, tile_size: i32, view_radius: i32) -> Self {
        let mut fog = Self {
            width: 0,
            height: 0,
            tile_size: tile_size.max(1),
            view_radius: view_radius.max(0),
            cells: Vec::new(),
        };
        fog.reset(width, height);
        fog
    }

    /// Reallocate for a new map with every tile unseen
    pub fn reset(&mut self, width: i32, height: i32) {
        self.width = width.max(0);
        self.height = height.max(0);
        self.cells = vec![FogState::Unseen; (self.width * self.height) as usize];
    }

    /// Recompute visibility around a viewer standing at a world position
    pub fn update(&mut self, world_x: f32, world_y: f32) {
        let size = self.tile_size as f32;
        let cx = (world_x / size).floor() as i32;
        let cy = (world_y / size).floor() as i32;

        for cell in self.cells.iter_mut() {
            if *cell == FogState::Visible {
                *cell = FogState::Remembered;
            }
        }

        // Scan only the part of the disc's bounding box that lies on the map
        let r = i64::from(self.view_radius);
        let (cx, cy) = (i64::from(cx), i64::from(cy));
        let x_range = (cx - r).max(0)..=(cx + r).min(i64::from(self.width) - 1);
        let y_range = (cy - r).max(0)..=(cy + r).min(i64::from(self.height) - 1);

        for y in y_range {
            for x in x_range.clone() {
                let (dx, dy) = (x - cx, y - cy);
                if dx * dx + dy * dy > r * r {
                    continue;
                }
                let idx = (y * i64::from(self.width) + x) as usize;
                self.cells[idx] = FogState::Visible;
            }
        }
    }

    pub fn is_visible(&self, x: i32, y: i32) -> bool {
        self.state(x, y) == Some(FogState::Visible)
    }

    /// Currently visible or seen before
    pub fn is_revealed(&self, x: i32, y: i32) -> bool {
        self.state(x, y).map_or(false, |s| s > FogState::Unseen)
    }

    /// State of a tile, `None` outside the map
    pub fn state(&self, x: i32, y: i32) -> Option<FogState> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Number of tiles in a given state
    pub fn count(&self, state: FogState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn tile_size(&self) -> i32 {
        self.tile_size
    }

    pub fn view_radius(&self) -> i32 {
        self.view_radius
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width && y >= 0 && y < self.height {
            Some((y * self.width + x) as usize)
        } else {
            None
        }
    }
}
