pub mod config;
pub mod mapgen;
pub mod types;

pub use config::{ConfigError, MapConfig};
pub use mapgen::{GeneratedMap, GeneratedRoom, MapGenerator, generate_map};
pub use types::*;
