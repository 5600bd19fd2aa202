//! Fixed per-seed tables: special rooms, level indices, palettes and decorative patches.
//!
//! Lookups are exact matches on the seed. Seeds without an entry get no special rooms,
//! level index 0 and the default palette.

use serde::Serialize;

use crate::types::{RoomCoord, TileCode, TilePos};

/// Seeds of the released levels, in play order.
pub const RELEASED_SEEDS: [u32; 4] = [100, 239, 183, 144];

const START_ROOMS: &[(u32, RoomCoord)] = &[
    (100, RoomCoord::new(5, 5)),
    (36, RoomCoord::new(0, 0)),
    (44, RoomCoord::new(9, 7)),
    (4, RoomCoord::new(7, 0)),
    (5, RoomCoord::new(5, 10)),
    (8, RoomCoord::new(0, 8)),
    (10, RoomCoord::new(0, 10)),
    (17, RoomCoord::new(7, 10)),
    (26, RoomCoord::new(0, 9)),
    (33, RoomCoord::new(10, 0)),
    (127, RoomCoord::new(0, 0)),
    (144, RoomCoord::new(10, 8)),
    (183, RoomCoord::new(5, 1)),
    (239, RoomCoord::new(3, 8)),
];

const EXIT_ROOMS: &[(u32, RoomCoord)] = &[
    (100, RoomCoord::new(7, 0)),
    (36, RoomCoord::new(7, 0)),
    (4, RoomCoord::new(5, 10)),
    (5, RoomCoord::new(9, 6)),
    (8, RoomCoord::new(3, 0)),
    (10, RoomCoord::new(10, 2)),
    (17, RoomCoord::new(9, 0)),
    (26, RoomCoord::new(10, 4)),
    (33, RoomCoord::new(2, 10)),
    (144, RoomCoord::new(0, 10)),
    (183, RoomCoord::new(3, 9)),
    (239, RoomCoord::new(9, 0)),
];

const KEY_ROOMS: &[(u32, RoomCoord)] = &[
    (100, RoomCoord::new(1, 0)),
    (17, RoomCoord::new(0, 0)),
    (26, RoomCoord::new(9, 0)),
    (33, RoomCoord::new(10, 6)),
    (144, RoomCoord::new(1, 4)),
    (183, RoomCoord::new(10, 6)),
    (239, RoomCoord::new(5, 2)),
];

const LEVEL_INDICES: &[(u32, u8)] = &[(100, 0), (239, 1), (183, 2), (144, 3)];

/// Fixed tile edits applied to one room after it is generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecorationPatch {
    pub level_index: u8,
    pub room: RoomCoord,
    pub tile: TilePos,
    pub code: TileCode,
}

/// The final level's exit gate in the top wall.
const DECORATIONS: &[DecorationPatch] = &[
    DecorationPatch {
        level_index: 3,
        room: RoomCoord::new(2, 0),
        tile: TilePos { y: 0, x: 4 },
        code: 5,
    },
    DecorationPatch {
        level_index: 3,
        room: RoomCoord::new(2, 0),
        tile: TilePos { y: 0, x: 5 },
        code: 6,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TileArt {
    Blank,
    Flowers,
    Flowers2,
    Flowers3,
    Leaf1,
    Leaf2,
    Leaf3,
    Leaf4,
    Leaf5,
    Leaf6,
    Exit,
    FinalExitLeft,
    FinalExitRight,
}

const DEFAULT_PALETTE: &[TileArt] =
    &[TileArt::Blank, TileArt::Flowers, TileArt::Leaf1, TileArt::Leaf2];

const PALETTES: &[(u32, &[TileArt])] = &[
    (100, &[TileArt::Blank, TileArt::Flowers, TileArt::Leaf1, TileArt::Leaf2, TileArt::Exit]),
    (239, &[TileArt::Blank, TileArt::Flowers2, TileArt::Leaf6, TileArt::Leaf4, TileArt::Exit]),
    (183, &[TileArt::Blank, TileArt::Flowers2, TileArt::Leaf6, TileArt::Leaf4, TileArt::Exit]),
    (
        144,
        &[
            TileArt::Blank,
            TileArt::Flowers3,
            TileArt::Leaf5,
            TileArt::Leaf3,
            TileArt::Exit,
            TileArt::FinalExitLeft,
            TileArt::FinalExitRight,
        ],
    ),
];

/// Tile artwork for each base code, plus the floor codes derived from it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub tiles: Vec<TileArt>,
    pub floor_codes: Vec<TileCode>,
}

impl Palette {
    pub fn for_seed(seed: u32) -> Self {
        let tiles = lookup(PALETTES, seed).unwrap_or(DEFAULT_PALETTE).to_vec();
        let floor_codes = tiles
            .iter()
            .enumerate()
            .filter(|(_, art)| **art == TileArt::Blank)
            .map(|(code, _)| code as TileCode)
            .collect();
        Self { tiles, floor_codes }
    }

    /// Raw byte comparison: a marked tile is never floor.
    pub fn is_floor(&self, tile: TileCode) -> bool {
        self.floor_codes.contains(&tile)
    }

    pub fn art(&self, code: TileCode) -> Option<TileArt> {
        self.tiles.get(code as usize).copied()
    }
}

/// All seed-selected tables for one map, resolved once per run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelTables {
    pub seed: u32,
    pub level_index: u8,
    pub start_room: Option<RoomCoord>,
    pub exit_room: Option<RoomCoord>,
    pub key_room: Option<RoomCoord>,
    pub palette: Palette,
}

impl LevelTables {
    pub fn for_seed(seed: u32) -> Self {
        Self {
            seed,
            level_index: lookup(LEVEL_INDICES, seed).unwrap_or(0),
            start_room: lookup(START_ROOMS, seed),
            exit_room: lookup(EXIT_ROOMS, seed),
            key_room: lookup(KEY_ROOMS, seed),
            palette: Palette::for_seed(seed),
        }
    }

    pub fn is_released(&self) -> bool {
        RELEASED_SEEDS.contains(&self.seed)
    }

    /// Patches for `room`; only released levels carry any.
    pub fn decorations_for(
        &self,
        room: RoomCoord,
    ) -> impl Iterator<Item = &'static DecorationPatch> {
        let level_index = lookup(LEVEL_INDICES, self.seed);
        DECORATIONS
            .iter()
            .filter(move |patch| Some(patch.level_index) == level_index && patch.room == room)
    }
}

fn lookup<T: Copy>(table: &[(u32, T)], seed: u32) -> Option<T> {
    table.iter().find(|(entry_seed, _)| *entry_seed == seed).map(|(_, value)| *value)
}
