//! Game session
//!
//! Owns the registry, the tick context and the session RNG, and swaps the
//! active level when the player asks to go underground.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::data::WorldConfig;
use crate::ecs::{
    camera_system, environment_system, fog_system, movement_system, Entity, Position, Registry,
};
use crate::entities::{materialize_dungeon, materialize_overworld, spawn_enemies, spawn_player};
use crate::world::generation::{DungeonGenerator, TerrainGenerator};
use crate::world::{ActiveMap, FogOfWar, Location};

use super::{Camera, DayCycle, Encounter, InputSnapshot, TickContext};

/// One running world
pub struct Game {
    /// Entities and the system schedule
    registry: Registry<TickContext>,
    /// Map, fog, camera and clock shared with the systems
    ctx: TickContext,
    /// Random number generator (seeded for reproducibility)
    rng: StdRng,
    config: WorldConfig,
    terrain: TerrainGenerator,
    dungeon: DungeonGenerator,
    /// The player entity
    player: Option<Entity>,
    /// Ticks run since the session started
    ticks: u64,
}

impl Game {
    /// Start on a fresh overworld. `seed` makes the whole session reproducible.
    pub fn new(config: WorldConfig, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };

        let terrain = TerrainGenerator::new(config.terrain.clone());
        let dungeon = DungeonGenerator::new(config.dungeon.clone());
        let size = config.overworld_size;
        let grid = terrain.generate(size.width, size.height, &mut rng);

        let ctx = TickContext::new(
            ActiveMap::Overworld(grid),
            FogOfWar::new(size.width, size.height, config.tile_size, config.view_radius),
            Camera::new(config.viewport.width as f32, config.viewport.height as f32),
            DayCycle::new(config.day_duration),
            config.tile_size,
            config.player_speed,
        );

        let mut registry = Registry::new();
        registry.add_system(movement_system);
        registry.add_system(environment_system);
        registry.add_system(camera_system);
        registry.add_system(fog_system);

        let mut game = Self {
            registry,
            ctx,
            rng,
            config,
            terrain,
            dungeon,
            player: None,
            ticks: 0,
        };
        game.load_overworld();
        game
    }

    /// Replace the input snapshot read by the next tick
    pub fn set_input(&mut self, input: InputSnapshot) {
        self.ctx.input = input;
    }

    /// Run one tick, then service a pending dungeon request
    pub fn update(&mut self, dt: f32) {
        self.ctx.encounters.clear();
        self.registry.update_with(dt, &mut self.ctx);
        self.ticks += 1;

        if self.ctx.dungeon_requested {
            self.ctx.dungeon_requested = false;
            if self.ctx.map.location() == Location::Overworld {
                self.load_dungeon();
            }
        }
    }

    fn load_overworld(&mut self) {
        let ActiveMap::Overworld(grid) = &self.ctx.map else {
            return;
        };
        let tile_size = self.config.tile_size;

        let tiles = materialize_overworld(&mut self.registry, grid, tile_size);
        let start = grid
            .random_position_where(&mut self.rng, |tile| tile.is_walkable())
            .map(|(x, y)| Position::from_tile(x, y, tile_size))
            .unwrap_or_else(|| {
                let (x, y) = self.config.overworld_start;
                log::warn!("No walkable tile found, spawning at ({}, {})", x, y);
                Position::new(x, y)
            });
        self.player = Some(spawn_player(&mut self.registry, start));

        log::info!(
            "Generated {}x{} overworld ({} tile entities)",
            grid.width(),
            grid.height(),
            tiles
        );
        self.reset_view(start);
    }

    /// Tear down the overworld and drop the player into a new dungeon
    fn load_dungeon(&mut self) {
        self.registry.clear_entities();

        let size = self.config.dungeon_size;
        let tile_size = self.config.tile_size;
        let grid = self.dungeon.generate(size.width, size.height, &mut self.rng);

        materialize_dungeon(&mut self.registry, &grid, tile_size);
        let start = Position::new(
            (size.width * tile_size) as f32 / 2.0,
            (size.height * tile_size) as f32 / 2.0,
        );
        self.player = Some(spawn_player(&mut self.registry, start));
        let enemies = spawn_enemies(
            &mut self.registry,
            &grid,
            &mut self.rng,
            self.config.enemy_count,
            tile_size,
            |cell| cell.is_walkable(),
        );

        log::info!(
            "Entered {}x{} dungeon with {} enemies",
            size.width,
            size.height,
            enemies.len()
        );
        self.ctx.map = ActiveMap::Dungeon(grid);
        self.reset_view(start);
    }

    /// Fresh fog for the active map, already lit around `viewer`
    fn reset_view(&mut self, viewer: Position) {
        self.ctx.fog.reset(self.ctx.map.width(), self.ctx.map.height());
        self.ctx.fog.update(viewer.x, viewer.y);
        self.ctx.camera.center_on(viewer);
    }

    /// Drain the encounters recorded by the last tick
    pub fn take_encounters(&mut self) -> Vec<Encounter> {
        std::mem::take(&mut self.ctx.encounters)
    }

    pub fn player(&self) -> Option<Entity> {
        self.player
    }

    pub fn player_position(&self) -> Option<Position> {
        self.player
            .and_then(|p| self.registry.get_component::<Position>(p))
            .copied()
    }

    pub fn location(&self) -> Location {
        self.ctx.map.location()
    }

    pub fn registry(&self) -> &Registry<TickContext> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry<TickContext> {
        &mut self.registry
    }

    pub fn context(&self) -> &TickContext {
        &self.ctx
    }

    pub fn map(&self) -> &ActiveMap {
        &self.ctx.map
    }

    pub fn fog(&self) -> &FogOfWar {
        &self.ctx.fog
    }

    pub fn clock(&self) -> &DayCycle {
        &self.ctx.clock
    }

    pub fn camera(&self) -> &Camera {
        &self.ctx.camera
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
