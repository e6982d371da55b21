//! Configuration data
//!
//! World tunables live in a RON file, with hardcoded defaults whenever the
//! file is missing or broken.

pub mod config;
pub mod loader;

pub use config::{MapSize, WorldConfig};
pub use loader::{default_config_path, load_config, load_or_default, save_config, ConfigError};
