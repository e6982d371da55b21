//! Tick context
//!
//! Everything outside the registry that systems read or write during a
//! tick. Passed explicitly instead of living in globals.

use crate::ecs::{Entity, Position};
use crate::world::{ActiveMap, FogOfWar};

use super::DayCycle;

/// Directional and action keys held this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Enter a dungeon from the overworld
    pub enter: bool,
}

impl InputSnapshot {
    /// Per-axis direction in `{-1, 0, 1}`; opposite keys cancel out
    pub fn direction(&self) -> (f32, f32) {
        let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f32;
        (axis(self.left, self.right), axis(self.up, self.down))
    }

    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

/// Viewport origin in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub x: f32,
    pub y: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl Camera {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            viewport_width,
            viewport_height,
        }
    }

    /// Put `pos` in the middle of the viewport
    pub fn center_on(&mut self, pos: Position) {
        self.x = pos.x - self.viewport_width / 2.0;
        self.y = pos.y - self.viewport_height / 2.0;
    }

    /// World to screen coordinates
    pub fn to_screen(&self, pos: Position) -> (f32, f32) {
        (pos.x - self.x, pos.y - self.y)
    }
}

/// The player walked into an enemy; resolved by the combat layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encounter {
    pub player: Entity,
    pub enemy: Entity,
}

/// Shared state handed to every system
#[derive(Debug)]
pub struct TickContext {
    pub input: InputSnapshot,
    pub map: ActiveMap,
    pub fog: FogOfWar,
    pub camera: Camera,
    pub clock: DayCycle,
    pub tile_size: i32,
    /// Player speed in pixels per second
    pub player_speed: f32,
    /// Bumps recorded this tick; cleared when the next tick starts
    pub encounters: Vec<Encounter>,
    /// Set by movement when the player asks to go underground
    pub dungeon_requested: bool,
}

impl TickContext {
    pub fn new(
        map: ActiveMap,
        fog: FogOfWar,
        camera: Camera,
        clock: DayCycle,
        tile_size: i32,
        player_speed: f32,
    ) -> Self {
        Self {
            input: InputSnapshot::default(),
            map,
            fog,
            camera,
            clock,
            tile_size,
            player_speed,
            encounters: Vec::new(),
            dungeon_requested: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction() {
        let input = InputSnapshot { left: true, down: true, ..Default::default() };
        assert_eq!(input.direction(), (-1.0, 1.0));

        let cancel = InputSnapshot { left: true, right: true, ..Default::default() };
        assert_eq!(cancel.direction(), (0.0, 0.0));
        assert!(InputSnapshot::default().is_idle());
    }

    #[test]
    fn test_camera_center() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.center_on(Position::new(1000.0, 500.0));
        assert_eq!((camera.x, camera.y), (600.0, 200.0));
        assert_eq!(camera.to_screen(Position::new(1000.0, 500.0)), (400.0, 300.0));
    }
}
