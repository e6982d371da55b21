//! RON config loader
//!
//! Loads the world config from an external RON file, with fallback to
//! hardcoded defaults.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::config::WorldConfig;

const CONFIG_FILE: &str = "world.ron";

/// Failure reading, parsing or validating a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] ron::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Where the config lives when no path is given
pub fn default_config_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "wayfarer", "Wayfarer") {
        let mut path = proj_dirs.config_dir().to_path_buf();
        path.push(CONFIG_FILE);
        path
    } else {
        // Fallback to current directory
        PathBuf::from(".").join(CONFIG_FILE)
    }
}

/// Read, parse and validate a config file
pub fn load_config(path: &Path) -> Result<WorldConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    WorldConfig::from_ron_str(&content)
}

/// Write a config as pretty RON, creating parent directories
pub fn save_config(config: &WorldConfig, path: &Path) -> Result<(), ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }
    let content = config.to_ron_string()?;
    fs::write(path, content).map_err(io_err)
}

/// Load from `path` (or the default location), falling back to defaults
pub fn load_or_default(path: Option<&Path>) -> WorldConfig {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        log::info!("No config at {}, using defaults", path.display());
        return WorldConfig::default();
    }

    match load_config(&path) {
        Ok(config) => {
            log::info!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            WorldConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("wayfarer-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_save_then_load() {
        let dir = scratch_dir("save");
        let path = dir.join("nested").join(CONFIG_FILE);

        let mut config = WorldConfig::default();
        config.enemy_count = 3;
        save_config(&config, &path).unwrap();
        assert_eq!(load_config(&path).unwrap(), config);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = scratch_dir("missing").join(CONFIG_FILE);
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_broken_file_falls_back_to_defaults() {
        let dir = scratch_dir("broken");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, "(tile_size: -4)").unwrap();

        assert_eq!(load_or_default(Some(&path)), WorldConfig::default());
        assert_eq!(load_or_default(Some(&dir.join("absent.ron"))), WorldConfig::default());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_default_path_names_file() {
        assert!(default_config_path().ends_with(CONFIG_FILE));
    }
}
