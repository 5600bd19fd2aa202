//! Room-grid map generation split into coherent submodules.

pub mod exits;
pub mod levels;
pub mod model;
pub mod sequence;

mod cache;
mod generator;
mod objects;
mod placement;
mod reachability;
mod room;

pub use cache::RoomCache;
pub use generator::MapGenerator;
pub use levels::{LevelTables, Palette, RELEASED_SEEDS, TileArt};
pub use model::{GeneratedMap, GeneratedRoom, room_colour};
pub use objects::ObjectTable;
pub use placement::place_item;
pub use reachability::{VisitedSet, explore};
pub use room::{Room, build_room};
pub use sequence::ByteSequence;

use crate::config::{ConfigError, MapConfig};

pub fn generate_map(config: MapConfig) -> Result<GeneratedMap, ConfigError> {
    Ok(MapGenerator::new(config)?.generate())
}
