//! Player entity creation

use crate::ecs::{Entity, Player, Position, Registry, Renderable, Sprite, Stats};

/// Spawn the player entity
pub fn spawn_player<C>(registry: &mut Registry<C>, pos: Position) -> Entity {
    let entity = registry.create_entity();
    registry.add_component(entity, pos);
    registry.add_component(entity, Renderable::new(Sprite::Player));
    registry.add_component(entity, Stats::player_base());
    registry.add_component(entity, Player);
    entity
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::ComponentKind;

    #[test]
    fn test_spawn_player() {
        let mut registry = Registry::<()>::new();
        let player = spawn_player(&mut registry, Position::new(100.0, 100.0));

        assert_eq!(registry.query(&[ComponentKind::Player, ComponentKind::Position]), vec![player]);
        let stats = registry.get_component::<Stats>(player).unwrap();
        assert_eq!((stats.hp, stats.max_hp, stats.damage, stats.xp), (100, 100, 10, 0));
    }
}
