//! Map request parameters and their validation.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The fixed item and exit offset tables address interior tiles up to index 8.
pub const MIN_ROOM_SIDE: usize = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("map must be at least 1x1 rooms, got {width}x{height}")]
    EmptyMap { width: usize, height: usize },

    #[error("rooms must be at least {min}x{min} tiles, got {width}x{height}", min = MIN_ROOM_SIDE)]
    RoomTooSmall { width: usize, height: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub seed: u32,
    pub map_width: usize,
    pub map_height: usize,
    pub room_width: usize,
    pub room_height: usize,
}

impl Default for MapConfig {
    /// The first released level at its shipped dimensions.
    fn default() -> Self {
        Self { seed: 100, map_width: 11, map_height: 11, room_width: 10, room_height: 10 }
    }
}

impl MapConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.display().to_string(), source })?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.map_width == 0 || self.map_height == 0 {
            return Err(ConfigError::EmptyMap { width: self.map_width, height: self.map_height });
        }
        if self.room_width < MIN_ROOM_SIDE || self.room_height < MIN_ROOM_SIDE {
            return Err(ConfigError::RoomTooSmall {
                width: self.room_width,
                height: self.room_height,
            });
        }
        Ok(())
    }
}
