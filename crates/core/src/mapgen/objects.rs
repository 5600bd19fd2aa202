//! Map-wide item table: one item code per room, drawn from a single sequence.

use serde::Serialize;

use crate::types::{KEY_ITEM_CODE, RoomCoord};

use super::levels::LevelTables;
use super::sequence::ByteSequence;

pub const TREASURE_TABLE: [u8; 32] = [
    6, 5, 7, 1, 1, 5, 2, 7, 6, 2, 1, 7, 1, 7, 8, 7, 0, 7, 6, 7, 7, 7, 5, 0, 6, 3, 7, 7, 5, 7, 5, 0,
];

/// Treasure values at or below this are weapons, unlocked level by level.
const HIGHEST_WEAPON: u8 = 3;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ObjectTable {
    map_width: usize,
    map_height: usize,
    items: Vec<u8>,
}

impl ObjectTable {
    pub fn build(tables: &LevelTables, map_width: usize, map_height: usize) -> Self {
        let seed = tables.seed;
        let mut sequence =
            ByteSequence::from_seeds(seed.wrapping_add(1) & 31, seed.wrapping_add(2) & 31);
        let level = tables.level_index;

        let mut items = Vec::with_capacity(map_width * map_height);
        for row in 0..map_height {
            for column in 0..map_width {
                let room_index = items.len();
                if tables.key_room == Some(RoomCoord::new(column, row)) {
                    items.push(KEY_ITEM_CODE);
                    continue;
                }
                let item = sequence.next_byte() & 15;
                items.push(item_code(item, room_index, level));
            }
        }

        Self { map_width, map_height, items }
    }

    /// Item code for `coord`; 0 means the room holds nothing.
    pub fn item_for(&self, coord: RoomCoord) -> u8 {
        assert!(
            coord.column < self.map_width && coord.row < self.map_height,
            "room {coord:?} outside {}x{} object table",
            self.map_width,
            self.map_height
        );
        self.items[coord.row * self.map_width + coord.column]
    }

    pub fn items(&self) -> &[u8] {
        &self.items
    }
}

fn item_code(item: u8, room_index: usize, level: u8) -> u8 {
    if item == 0 {
        return 0;
    }
    let treasure = TREASURE_TABLE[(item as usize + room_index) & 31];
    if treasure <= HIGHEST_WEAPON {
        if treasure <= level + 1 { treasure + 1 } else { 0 }
    } else {
        treasure + 1
    }
}
