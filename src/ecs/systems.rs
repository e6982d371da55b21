//! ECS Systems
//!
//! Per-tick game logic. Each system takes the registry, the frame delta in
//! seconds and the shared [`TickContext`].

use crate::ecs::{ComponentKind, Entity, Position, Registry};
use crate::game::{Encounter, TickContext};
use crate::world::Location;

/// Move the player from the input snapshot.
///
/// Water, mountains and walls block the step. Stepping onto an enemy
/// blocks it too and records an [`Encounter`] for the combat layer.
pub fn movement_system(registry: &mut Registry<TickContext>, dt: f32, ctx: &mut TickContext) {
    let (dir_x, dir_y) = ctx.input.direction();
    let tile = ctx.tile_size as f32;
    let half = tile / 2.0;
    let step = ctx.player_speed * dt;
    let max_x = ((ctx.map.width() - 1) as f32 * tile).max(0.0);
    let max_y = ((ctx.map.height() - 1) as f32 * tile).max(0.0);

    // Collect enemies first (positions may change below)
    let enemies: Vec<(Entity, Position)> = registry
        .query(&[ComponentKind::Enemy, ComponentKind::Position])
        .into_iter()
        .filter_map(|e| registry.get_component::<Position>(e).map(|p| (e, *p)))
        .collect();

    for player in registry.query(&[ComponentKind::Position, ComponentKind::Player]) {
        if ctx.input.enter && ctx.map.location() == Location::Overworld {
            ctx.dungeon_requested = true;
        }

        if dir_x == 0.0 && dir_y == 0.0 {
            continue;
        }

        let pos = match registry.get_component::<Position>(player) {
            Some(pos) => *pos,
            None => continue,
        };

        let new_x = (pos.x + dir_x * step).clamp(0.0, max_x);
        let new_y = (pos.y + dir_y * step).clamp(0.0, max_y);

        // Collide on the tile under the sprite's centre
        let tile_x = ((new_x + half) / tile).floor() as i32;
        let tile_y = ((new_y + half) / tile).floor() as i32;
        if !ctx.map.in_bounds(tile_x, tile_y) {
            continue;
        }

        let bumped = enemies
            .iter()
            .find(|(_, e)| (e.x - new_x).abs() < half && (e.y - new_y).abs() < half);
        if let Some(&(enemy, _)) = bumped {
            ctx.encounters.push(Encounter { player, enemy });
            continue;
        }

        if ctx.map.is_blocked(tile_x, tile_y) {
            continue;
        }

        if let Some(pos) = registry.get_component_mut::<Position>(player) {
            pos.x = new_x;
            pos.y = new_y;
        }
    }
}

/// Keep the camera centred on the player
pub fn camera_system(registry: &mut Registry<TickContext>, _dt: f32, ctx: &mut TickContext) {
    if let Some(pos) = first_player_position(registry) {
        ctx.camera.center_on(pos);
    }
}

/// Refresh fog of war around the player
pub fn fog_system(registry: &mut Registry<TickContext>, _dt: f32, ctx: &mut TickContext) {
    if let Some(pos) = first_player_position(registry) {
        ctx.fog.update(pos.x, pos.y);
    }
}

/// Advance ambient time
pub fn environment_system(_registry: &mut Registry<TickContext>, dt: f32, ctx: &mut TickContext) {
    ctx.clock.update(dt);
}

fn first_player_position(registry: &Registry<TickContext>) -> Option<Position> {
    registry
        .query(&[ComponentKind::Player, ComponentKind::Position])
        .first()
        .and_then(|&player| registry.get_component::<Position>(player).copied())
}
