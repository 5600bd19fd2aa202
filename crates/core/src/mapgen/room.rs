//! Single-room tile generation: border walls, doorway gaps and the interior stream.

use std::iter;

use serde::Serialize;

use crate::config::MapConfig;
use crate::types::{RoomCoord, TileCode, TilePos, WALL_CODE};

use super::exits::Exits;
use super::levels::LevelTables;
use super::sequence::ByteSequence;

/// Translates raw interior values into palette tile codes.
pub const TILE_VALUES_MAP: [TileCode; 11] = [0, 1, 0, 0, 0, 0, 2, 3, 4, 5, 6];

/// Exit tile position per `(row ^ column) & 15`, encoded as `y * 10 + x`.
pub const EXIT_ROOM_OFFSETS: [u8; 16] =
    [35, 66, 63, 56, 34, 44, 64, 33, 36, 55, 65, 53, 45, 46, 54, 43];

const WARM_UP_VALUES: usize = 10;
const SPECIAL_CORNERS: [(u8, u8); 4] = [(1, 1), (1, 8), (8, 1), (8, 8)];
const START_MARKER: u8 = 7;
const KEY_MARKER: u8 = 1;
const EXIT_MARKER: u8 = 8;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Room {
    pub coord: RoomCoord,
    pub width: usize,
    pub height: usize,
    pub exits: Exits,
    tiles: Vec<TileCode>,
}

impl Room {
    pub fn tile(&self, pos: TilePos) -> TileCode {
        self.tiles[self.index(pos)]
    }

    pub fn set_tile(&mut self, pos: TilePos, code: TileCode) {
        let index = self.index(pos);
        self.tiles[index] = code;
    }

    pub fn row(&self, y: usize) -> &[TileCode] {
        assert!(y < self.height, "row {y} outside room of height {}", self.height);
        &self.tiles[y * self.width..(y + 1) * self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[TileCode]> {
        self.tiles.chunks(self.width)
    }

    pub fn tiles(&self) -> &[TileCode] {
        &self.tiles
    }

    pub fn center(&self) -> TilePos {
        TilePos { y: self.height / 2 - 1, x: self.width / 2 - 1 }
    }

    fn index(&self, pos: TilePos) -> usize {
        assert!(
            pos.x < self.width && pos.y < self.height,
            "tile ({}, {}) outside {}x{} room {:?}",
            pos.x,
            pos.y,
            self.width,
            self.height,
            self.coord
        );
        pos.y * self.width + pos.x
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SpecialKind {
    Start,
    Exit,
    Key,
}

/// Raw interior values, consumed row-major across the room's interior.
enum InteriorStream {
    Ordinary(ByteSequence),
    Special { kind: SpecialKind, marker: u8, exit_offset: u8, x: u8, y: u8 },
}

impl InteriorStream {
    fn next_raw(&mut self) -> u8 {
        match self {
            Self::Ordinary(sequence) => (sequence.next_byte() % 9) & 7,
            Self::Special { kind, marker, exit_offset, x, y } => {
                let value = if SPECIAL_CORNERS.contains(&(*x, *y)) {
                    *marker
                } else if *kind == SpecialKind::Exit
                    && *x == *exit_offset % 10
                    && *y == *exit_offset / 10
                {
                    EXIT_MARKER
                } else {
                    0
                };
                // The cursor assumes an eight-tile interior whatever the room size.
                *x += 1;
                if *x == 9 {
                    *x = 1;
                    *y = y.wrapping_add(1);
                }
                value
            }
        }
    }
}

fn special_kind(tables: &LevelTables, coord: RoomCoord) -> Option<SpecialKind> {
    if tables.key_room == Some(coord) {
        Some(SpecialKind::Key)
    } else if tables.exit_room == Some(coord) {
        Some(SpecialKind::Exit)
    } else if tables.start_room == Some(coord) {
        Some(SpecialKind::Start)
    } else {
        None
    }
}

fn interior_stream(config: &MapConfig, tables: &LevelTables, coord: RoomCoord) -> InteriorStream {
    let first = coord.column as u32;
    let second = config.seed.wrapping_sub(coord.row as u32);
    let mut sequence = ByteSequence::from_seeds(first, second);
    sequence.skip_warm_up(WARM_UP_VALUES);

    match special_kind(tables, coord) {
        None => InteriorStream::Ordinary(sequence),
        Some(kind) => {
            let marker = if kind == SpecialKind::Key { KEY_MARKER } else { START_MARKER };
            let exit_offset = EXIT_ROOM_OFFSETS[(coord.row ^ coord.column) & 15];
            InteriorStream::Special { kind, marker, exit_offset, x: 1, y: 1 }
        }
    }
}

fn horizontal_border(width: usize, solid: bool) -> Vec<TileCode> {
    let cx = width / 2 - 2;
    if solid {
        return vec![WALL_CODE; width];
    }
    let mut row = vec![WALL_CODE; cx];
    row.extend(iter::repeat_n(0, width - 2 * cx));
    row.extend(iter::repeat_n(WALL_CODE, cx));
    row
}

pub fn build_room(config: &MapConfig, tables: &LevelTables, coord: RoomCoord) -> Room {
    assert!(
        coord.column < config.map_width && coord.row < config.map_height,
        "room {coord:?} outside {}x{} map",
        config.map_width,
        config.map_height
    );

    let width = config.room_width;
    let height = config.room_height;
    let exits = Exits::for_room(coord.row, coord.column, config.map_width, config.map_height);
    let mut stream = interior_stream(config, tables, coord);
    let cy = height / 2 - 2;

    let mut tiles = Vec::with_capacity(width * height);
    tiles.extend(horizontal_border(width, exits.top));
    for ry in 1..height - 1 {
        let closed_span = ry < cy || ry > height - cy - 1;
        tiles.push(if exits.left || closed_span { WALL_CODE } else { 0 });
        for _ in 1..width - 1 {
            tiles.push(TILE_VALUES_MAP[stream.next_raw() as usize]);
        }
        tiles.push(if exits.right || closed_span { WALL_CODE } else { 0 });
    }
    tiles.extend(horizontal_border(width, exits.bottom));

    let mut room = Room { coord, width, height, exits, tiles };
    for patch in tables.decorations_for(coord) {
        room.set_tile(patch.tile, patch.code);
    }

    tracing::trace!(?coord, ?exits, "built room");
    room
}
