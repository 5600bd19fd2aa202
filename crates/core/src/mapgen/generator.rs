//! High-level map generation orchestration that composes rooms, items and reachability.

use crate::config::{ConfigError, MapConfig};
use crate::types::RoomCoord;

use super::cache::RoomCache;
use super::levels::LevelTables;
use super::model::{GeneratedMap, GeneratedRoom};
use super::objects::ObjectTable;
use super::placement::place_item;
use super::reachability::{VisitedSet, explore};

pub struct MapGenerator {
    config: MapConfig,
    tables: LevelTables,
}

impl MapGenerator {
    pub fn new(config: MapConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, tables: LevelTables::for_seed(config.seed) })
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn tables(&self) -> &LevelTables {
        &self.tables
    }

    pub fn generate(&self) -> GeneratedMap {
        let config = &self.config;
        let tables = &self.tables;

        let objects = ObjectTable::build(tables, config.map_width, config.map_height);
        let mut cache = RoomCache::new(config, tables);
        cache.fill();

        let mut placements = Vec::with_capacity(config.map_width * config.map_height);
        for row in 0..config.map_height {
            for column in 0..config.map_width {
                let coord = RoomCoord::new(column, row);
                let item_code = objects.item_for(coord);
                placements.push(place_item(cache.room(coord), &tables.palette, item_code));
            }
        }

        let start = self.start_room();
        let (visited, start_tile) = match start {
            Some(start) => {
                let centre = cache.room(start).center();
                (explore(&mut cache, start, centre), Some(centre))
            }
            None => {
                tracing::debug!(seed = config.seed, "start room outside map, reachability skipped");
                (VisitedSet::new(), None)
            }
        };

        let rooms: Vec<GeneratedRoom> = cache
            .into_rooms()
            .into_values()
            .zip(placements)
            .map(|(room, item)| {
                let reachable = visited.contains(&room.coord);
                GeneratedRoom::from_room(&room, item, reachable)
            })
            .collect();

        tracing::debug!(
            seed = config.seed,
            rooms = rooms.len(),
            reachable = visited.len(),
            items = rooms.iter().filter(|room| room.item.is_some()).count(),
            "map generated"
        );

        GeneratedMap {
            config: *config,
            level_index: tables.level_index,
            palette: tables.palette.clone(),
            start_room: start,
            start_tile,
            exit_room: tables.exit_room,
            key_room: tables.key_room,
            rooms,
            visited,
        }
    }

    /// The seed's start room, if it lies inside this map.
    fn start_room(&self) -> Option<RoomCoord> {
        self.tables
            .start_room
            .filter(|room| room.column < self.config.map_width && room.row < self.config.map_height)
    }
}
