//! Public data models handed to renderers: rooms, item placements and the reachable set.

use serde::Serialize;
use xxhash_rust::xxh3::xxh3_64;

use crate::config::MapConfig;
use crate::types::{ItemPlacement, RoomCoord, TileCode, TilePos, base_code};

use super::exits::Exits;
use super::levels::Palette;
use super::reachability::VisitedSet;
use super::room::Room;

/// Logical colour per `(row ^ column) & 3`, used to tint each room.
pub const ROOM_COLOURS: [u8; 4] = [1, 6, 5, 7];

pub fn room_colour(coord: RoomCoord) -> u8 {
    ROOM_COLOURS[(coord.row ^ coord.column) & 3]
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GeneratedRoom {
    pub coord: RoomCoord,
    pub exits: Exits,
    pub colour: u8,
    pub reachable: bool,
    pub item: Option<ItemPlacement>,
    /// Row-major tile codes with visited markers already stripped.
    pub tiles: Vec<TileCode>,
}

impl GeneratedRoom {
    pub(super) fn from_room(room: &Room, item: Option<ItemPlacement>, reachable: bool) -> Self {
        Self {
            coord: room.coord,
            exits: room.exits,
            colour: room_colour(room.coord),
            reachable,
            item,
            tiles: room.tiles().iter().map(|&tile| base_code(tile)).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GeneratedMap {
    pub config: MapConfig,
    pub level_index: u8,
    pub palette: Palette,
    pub start_room: Option<RoomCoord>,
    pub start_tile: Option<TilePos>,
    pub exit_room: Option<RoomCoord>,
    pub key_room: Option<RoomCoord>,
    /// Row-major, one entry per room.
    pub rooms: Vec<GeneratedRoom>,
    pub visited: VisitedSet,
}

impl GeneratedMap {
    pub fn room(&self, coord: RoomCoord) -> &GeneratedRoom {
        assert!(
            coord.column < self.config.map_width && coord.row < self.config.map_height,
            "room {coord:?} outside {}x{} map",
            self.config.map_width,
            self.config.map_height
        );
        &self.rooms[coord.row * self.config.map_width + coord.column]
    }

    pub fn tile(&self, coord: RoomCoord, pos: TilePos) -> TileCode {
        let width = self.config.room_width;
        assert!(pos.x < width && pos.y < self.config.room_height, "tile {pos:?} outside room");
        self.room(coord).tiles[pos.y * width + pos.x]
    }

    pub fn placements(&self) -> impl Iterator<Item = &ItemPlacement> {
        self.rooms.iter().filter_map(|room| room.item.as_ref())
    }

    pub fn is_reachable(&self, coord: RoomCoord) -> bool {
        self.visited.contains(&coord)
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend(self.config.seed.to_le_bytes());
        for dimension in [
            self.config.map_width,
            self.config.map_height,
            self.config.room_width,
            self.config.room_height,
        ] {
            bytes.extend((dimension as u32).to_le_bytes());
        }
        for room in &self.rooms {
            bytes.extend(room.tiles.iter().copied());
            bytes.extend(room.exits.to_array().map(u8::from));
            bytes.push(u8::from(room.reachable));
            match room.item {
                Some(item) => {
                    bytes.push(item.item_code);
                    bytes.push(item.tile.x as u8);
                    bytes.push(item.tile.y as u8);
                }
                None => bytes.extend([0, 0, 0]),
            }
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}
