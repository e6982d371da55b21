//! Map data structures
//!
//! A row-major 2D grid shared by both generators, and the active map the
//! session plays on.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::tile::{DungeonCell, TerrainTile};

/// Maximum random draws when searching for a placement tile
pub const PLACEMENT_ATTEMPTS: u32 = 100;

/// Immutable snapshot of a generated level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid<T> {
    width: i32,
    height: i32,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `fill`
    pub fn filled(width: i32, height: i32, fill: T) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            cells: vec![fill; (width * height) as usize],
        }
    }
}

impl<T> Grid<T> {
    /// Build a grid from a per-cell function, row by row
    pub fn from_fn(width: i32, height: i32, mut f: impl FnMut(i32, i32) -> T) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let mut cells = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self { width, height, cells }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    pub fn xy_to_idx(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&T> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.xy_to_idx(x, y)])
        } else {
            None
        }
    }

    /// Overwrite a cell; out-of-bounds writes are ignored
    pub fn set(&mut self, x: i32, y: i32, value: T) {
        if self.in_bounds(x, y) {
            let idx = self.xy_to_idx(x, y);
            self.cells[idx] = value;
        }
    }

    /// One row of cells
    pub fn row(&self, y: i32) -> Option<&[T]> {
        if y >= 0 && y < self.height {
            let start = (y * self.width) as usize;
            Some(&self.cells[start..start + self.width as usize])
        } else {
            None
        }
    }

    /// Exactly `height` rows, empty ones for a zero-width grid
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        (0..self.height).map(move |y| self.row(y).unwrap_or(&[]))
    }

    /// Every cell with its coordinates, row-major
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, &T)> {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| (idx as i32 % width, idx as i32 / width, cell))
    }

    /// Pick random cells until one satisfies `accept`.
    ///
    /// Gives up after `PLACEMENT_ATTEMPTS` draws; callers skip the placement
    /// when this returns `None`.
    pub fn random_position_where(
        &self,
        rng: &mut impl Rng,
        mut accept: impl FnMut(&T) -> bool,
    ) -> Option<(i32, i32)> {
        if self.cells.is_empty() {
            return None;
        }
        for _ in 0..PLACEMENT_ATTEMPTS {
            let x = rng.gen_range(0..self.width);
            let y = rng.gen_range(0..self.height);
            if self.get(x, y).map_or(false, |cell| accept(cell)) {
                return Some((x, y));
            }
        }
        None
    }
}

/// Which kind of level is loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    Overworld,
    Dungeon,
}

/// The level the session currently plays on
#[derive(Debug, Clone)]
pub enum ActiveMap {
    Overworld(Grid<TerrainTile>),
    Dungeon(Grid<DungeonCell>),
}

impl ActiveMap {
    pub fn location(&self) -> Location {
        match self {
            ActiveMap::Overworld(_) => Location::Overworld,
            ActiveMap::Dungeon(_) => Location::Dungeon,
        }
    }

    pub fn width(&self) -> i32 {
        match self {
            ActiveMap::Overworld(grid) => grid.width(),
            ActiveMap::Dungeon(grid) => grid.width(),
        }
    }

    pub fn height(&self) -> i32 {
        match self {
            ActiveMap::Overworld(grid) => grid.height(),
            ActiveMap::Dungeon(grid) => grid.height(),
        }
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width() && y >= 0 && y < self.height()
    }

    /// Water, mountains and walls stop movement; so does the void outside the map
    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        match self {
            ActiveMap::Overworld(grid) => grid.get(x, y).map_or(true, |t| !t.is_walkable()),
            ActiveMap::Dungeon(grid) => grid.get(x, y).map_or(true, |c| !c.is_walkable()),
        }
    }

    pub fn glyph(&self, x: i32, y: i32) -> Option<char> {
        match self {
            ActiveMap::Overworld(grid) => grid.get(x, y).map(|t| t.tile_type.glyph()),
            ActiveMap::Dungeon(grid) => grid.get(x, y).map(|c| c.glyph()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_grid_shape() {
        let grid = Grid::from_fn(4, 3, |x, y| x + y * 10);
        assert_eq!(grid.rows().count(), 3);
        assert!(grid.rows().all(|row| row.len() == 4));
        assert_eq!(grid.get(3, 2), Some(&23));
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.row(1), Some(&[10, 11, 12, 13][..]));
    }

    #[test]
    fn test_zero_width_grid_keeps_its_rows() {
        let grid = Grid::filled(0, 5, DungeonCell::Wall);
        assert_eq!(grid.height(), 5);
        assert_eq!(grid.rows().count(), 5);
        assert!(grid.rows().all(|row| row.is_empty()));
        assert_eq!(grid.row(4), Some(&[][..]));
    }

    #[test]
    fn test_set_ignores_out_of_bounds() {
        let mut grid = Grid::filled(2, 2, DungeonCell::Wall);
        grid.set(5, 5, DungeonCell::Floor);
        grid.set(1, 1, DungeonCell::Floor);
        assert_eq!(grid.iter().filter(|(_, _, c)| **c == DungeonCell::Floor).count(), 1);
    }

    #[test]
    fn test_placement_gives_up() {
        let grid = Grid::filled(10, 10, DungeonCell::Wall);
        let mut rng = StdRng::seed_from_u64(3);
        let mut draws = 0;
        let found = grid.random_position_where(&mut rng, |c| {
            draws += 1;
            c.is_walkable()
        });
        assert_eq!(found, None);
        assert_eq!(draws, PLACEMENT_ATTEMPTS);
    }

    #[test]
    fn test_placement_finds_tile() {
        let mut grid = Grid::filled(3, 3, DungeonCell::Floor);
        grid.set(0, 0, DungeonCell::Wall);
        let mut rng = StdRng::seed_from_u64(9);
        let (x, y) = grid.random_position_where(&mut rng, |c| c.is_walkable()).unwrap();
        assert!(grid.get(x, y).unwrap().is_walkable());
    }

    #[test]
    fn test_active_map_blocking() {
        let mut grid = Grid::filled(3, 3, DungeonCell::Wall);
        grid.set(1, 1, DungeonCell::Floor);
        let map = ActiveMap::Dungeon(grid);
        assert!(!map.is_blocked(1, 1));
        assert!(map.is_blocked(0, 1));
        assert!(map.is_blocked(-1, 1));
        assert_eq!(map.location(), Location::Dungeon);
        assert_eq!(map.glyph(1, 1), Some('.'));
    }
}
