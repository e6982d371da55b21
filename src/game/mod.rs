//! Game module - session state, tick context and the day clock

mod context;
mod state;
mod time;

pub use context::{Camera, Encounter, InputSnapshot, TickContext};
pub use state::Game;
pub use time::DayCycle;
