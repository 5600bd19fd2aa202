//! Per-run memo of built rooms.

use std::collections::BTreeMap;

use crate::config::MapConfig;
use crate::types::RoomCoord;

use super::levels::LevelTables;
use super::room::{Room, build_room};

/// Rooms are built on first access and never rebuilt, so marker bits written by the
/// reachability pass stay with the room for the rest of the run.
pub struct RoomCache<'a> {
    config: &'a MapConfig,
    tables: &'a LevelTables,
    rooms: BTreeMap<RoomCoord, Room>,
}

impl<'a> RoomCache<'a> {
    pub fn new(config: &'a MapConfig, tables: &'a LevelTables) -> Self {
        Self { config, tables, rooms: BTreeMap::new() }
    }

    pub fn config(&self) -> &MapConfig {
        self.config
    }

    pub fn tables(&self) -> &LevelTables {
        self.tables
    }

    pub fn room(&mut self, coord: RoomCoord) -> &Room {
        self.room_mut(coord)
    }

    pub fn room_mut(&mut self, coord: RoomCoord) -> &mut Room {
        let (config, tables) = (self.config, self.tables);
        self.rooms.entry(coord).or_insert_with(|| build_room(config, tables, coord))
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Builds every room not yet cached, in row-major order.
    pub fn fill(&mut self) {
        for row in 0..self.config.map_height {
            for column in 0..self.config.map_width {
                self.room(RoomCoord::new(column, row));
            }
        }
    }

    pub fn into_rooms(self) -> BTreeMap<RoomCoord, Room> {
        self.rooms
    }
}
