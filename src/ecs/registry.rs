//! Entity registry
//!
//! Owns entity identities, the component tables and the per-tick system
//! schedule. Destruction requested during a tick is applied only after every
//! system has run, so no system ever sees a half-removed entity.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::components::{ComponentKind, ComponentTables};

/// Opaque entity identifier. Assigned in increasing order, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Entity(u64);

impl Entity {
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A value that lives in one of the registry's tables
pub trait Component: Sized + 'static {
    const KIND: ComponentKind;

    fn table(tables: &ComponentTables) -> &HashMap<Entity, Self>;
    fn table_mut(tables: &mut ComponentTables) -> &mut HashMap<Entity, Self>;
}

/// A per-tick behavior: `(registry, delta seconds, context)`
pub type SystemFn<C> = Box<dyn FnMut(&mut Registry<C>, f32, &mut C)>;

/// Entity/component store plus the ordered system schedule.
///
/// `C` is the context handed to every system alongside the registry; it
/// carries whatever outside state the systems need (input, map, camera).
pub struct Registry<C = ()> {
    /// Live entities in creation order
    entities: Vec<Entity>,
    tables: ComponentTables,
    systems: Vec<SystemFn<C>>,
    next_id: u64,
    /// Queue order for the flush
    pending_destroy: Vec<Entity>,
    /// Same entities, for constant-time dedup
    pending_set: HashSet<Entity>,
}

impl<C> Registry<C> {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            tables: ComponentTables::default(),
            systems: Vec::new(),
            next_id: 1,
            pending_destroy: Vec::new(),
            pending_set: HashSet::new(),
        }
    }

    /// Allocate a fresh entity
    pub fn create_entity(&mut self) -> Entity {
        let entity = Entity(self.next_id);
        self.next_id += 1;
        self.entities.push(entity);
        entity
    }

    /// Queue an entity for removal at the end of the current tick
    pub fn destroy_entity(&mut self, entity: Entity) {
        if self.pending_set.insert(entity) {
            self.pending_destroy.push(entity);
        }
    }

    /// Insert or overwrite a component.
    ///
    /// The entity is not checked: attaching to an unknown or already
    /// destroyed id stores an orphaned value that no query will return.
    pub fn add_component<T: Component>(&mut self, entity: Entity, value: T) {
        T::table_mut(&mut self.tables).insert(entity, value);
    }

    pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
        T::table(&self.tables).get(&entity)
    }

    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        T::table_mut(&mut self.tables).get_mut(&entity)
    }

    pub fn has_component(&self, entity: Entity, kind: ComponentKind) -> bool {
        self.tables.contains(entity, kind)
    }

    /// Typed shorthand for [`Registry::has_component`]
    pub fn has<T: Component>(&self, entity: Entity) -> bool {
        self.has_component(entity, T::KIND)
    }

    /// Remove a component if present
    pub fn remove_component(&mut self, entity: Entity, kind: ComponentKind) {
        self.tables.remove(entity, kind);
    }

    /// Remove a component and hand it back
    pub fn take_component<T: Component>(&mut self, entity: Entity) -> Option<T> {
        T::table_mut(&mut self.tables).remove(&entity)
    }

    /// Append a system to the schedule
    pub fn add_system<F>(&mut self, system: F)
    where
        F: FnMut(&mut Registry<C>, f32, &mut C) + 'static,
    {
        self.systems.push(Box::new(system));
    }

    /// Live entities that carry every listed kind.
    ///
    /// Entities queued for destruction are still live until the tick ends.
    /// An empty list matches everything.
    pub fn query(&self, kinds: &[ComponentKind]) -> Vec<Entity> {
        self.entities
            .iter()
            .copied()
            .filter(|&entity| kinds.iter().all(|&kind| self.has_component(entity, kind)))
            .collect()
    }

    /// Run one tick with an explicit context
    pub fn update_with(&mut self, dt: f32, ctx: &mut C) {
        let mut systems = std::mem::take(&mut self.systems);
        for system in systems.iter_mut() {
            system(self, dt, ctx);
        }
        // Systems added mid-tick join the schedule from the next tick
        systems.append(&mut self.systems);
        self.systems = systems;

        self.flush_destroyed();
    }

    /// Apply every pending destruction
    fn flush_destroyed(&mut self) {
        if self.pending_destroy.is_empty() {
            return;
        }

        let doomed = std::mem::take(&mut self.pending_set);
        self.pending_destroy.clear();
        let before = self.entities.len();
        self.entities.retain(|entity| !doomed.contains(entity));
        for &entity in &doomed {
            self.tables.remove_all(entity);
        }

        log::debug!(
            "Destroyed {} entities ({} requested)",
            before - self.entities.len(),
            doomed.len()
        );
    }

    /// Drop every entity and component, keeping the schedule and the id counter
    pub fn clear_entities(&mut self) {
        self.entities.clear();
        self.tables.clear();
        self.pending_destroy.clear();
        self.pending_set.clear();
    }

    /// Live entities in creation order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.entities.binary_search(&entity).is_ok()
    }

    /// Entities queued for removal this tick
    pub fn pending_destruction(&self) -> &[Entity] {
        &self.pending_destroy
    }

    /// Number of values stored under a kind (orphans included)
    pub fn component_count(&self, kind: ComponentKind) -> usize {
        self.tables.len(kind)
    }

    pub fn system_count(&self) -> usize {
        self.systems.len()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl Registry {
    /// Run one tick for a registry without context
    pub fn update(&mut self, dt: f32) {
        self.update_with(dt, &mut ());
    }
}

impl<C> Default for Registry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for Registry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("entities", &self.entities.len())
            .field("systems", &self.systems.len())
            .field("next_id", &self.next_id)
            .field("pending_destroy", &self.pending_destroy)
            .finish()
    }
}
