//! Entity Component System module
//!
//! The registry, the component set and the gameplay systems that run on it.

pub mod components;
pub mod registry;
pub mod systems;

pub use components::*;
pub use registry::{Component, Entity, Registry, SystemFn};
pub use systems::{camera_system, environment_system, fog_system, movement_system};
