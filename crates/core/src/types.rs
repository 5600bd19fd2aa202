use serde::{Deserialize, Serialize};

/// Raw tile byte as stored in a room grid. The top bit doubles as the visited marker.
pub type TileCode = u8;

pub const VISITED_MARKER: TileCode = 0x80;
pub const BASE_CODE_MASK: TileCode = 0x7F;

/// Wall tile code shared by every palette.
pub const WALL_CODE: TileCode = 2;

/// Item code stored for the level key.
pub const KEY_ITEM_CODE: u8 = 5;

pub fn base_code(tile: TileCode) -> TileCode {
    tile & BASE_CODE_MASK
}

pub fn is_marked(tile: TileCode) -> bool {
    tile & VISITED_MARKER != 0
}

/// Address of a room inside the map grid. Ordering is row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoomCoord {
    pub row: usize,
    pub column: usize,
}

impl RoomCoord {
    pub const fn new(column: usize, row: usize) -> Self {
        Self { row, column }
    }
}

/// Tile position inside a single room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TilePos {
    pub y: usize,
    pub x: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPlacement {
    pub room: RoomCoord,
    pub tile: TilePos,
    pub item_code: u8,
}
