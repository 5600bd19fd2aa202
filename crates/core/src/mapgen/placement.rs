//! Item placement: a short walk over fixed candidate tiles looking for floor.

use crate::types::{ItemPlacement, TilePos, base_code};

use super::levels::Palette;
use super::room::Room;

pub const TREASURE_X: [usize; 16] = [3, 2, 4, 8, 2, 5, 4, 1, 3, 8, 6, 5, 7, 1, 7, 6];
pub const TREASURE_Y: [usize; 16] = [1, 3, 7, 7, 2, 3, 6, 1, 4, 6, 8, 5, 5, 4, 8, 2];

/// Finds the tile that hosts `item_code` in `room`, or `None` when every candidate is blocked.
pub fn place_item(room: &Room, palette: &Palette, item_code: u8) -> Option<ItemPlacement> {
    if item_code == 0 {
        return None;
    }

    let item = (item_code - 1) as usize;
    let coord = room.coord;
    let mut k = ((coord.row ^ coord.column) + item) & 15;
    for _ in 0..TREASURE_X.len() {
        let tile = TilePos { y: TREASURE_Y[k], x: TREASURE_X[k] };
        if palette.is_floor(base_code(room.tile(tile))) {
            return Some(ItemPlacement { room: coord, tile, item_code });
        }
        k = if k > 0 { k - 1 } else { 15 };
    }

    tracing::trace!(?coord, item_code, "no free tile for item");
    None
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::config::MapConfig;
    use crate::mapgen::levels::LevelTables;
    use crate::mapgen::objects::ObjectTable;
    use crate::mapgen::room::build_room;
    use crate::types::{RoomCoord, WALL_CODE};

    fn room(seed: u32, column: usize, row: usize) -> Room {
        let config = MapConfig { seed, ..MapConfig::default() };
        build_room(&config, &LevelTables::for_seed(seed), RoomCoord::new(column, row))
    }

    #[test]
    fn no_item_means_no_placement() {
        let palette = Palette::for_seed(100);
        assert_eq!(place_item(&room(100, 0, 0), &palette, 0), None);
    }

    #[test]
    fn reference_level_one_top_row_placements() {
        let tables = LevelTables::for_seed(100);
        let objects = ObjectTable::build(&tables, 11, 11);
        let expected = [
            (4, 6),
            (5, 3),
            (3, 1),
            (6, 8),
            (6, 8),
            (1, 4),
            (1, 1),
            (7, 5),
            (6, 2),
            (3, 1),
            (2, 3),
        ];
        for (column, (x, y)) in expected.into_iter().enumerate() {
            let coord = RoomCoord::new(column, 0);
            let item_code = objects.item_for(coord);
            let placement = place_item(&room(100, column, 0), &tables.palette, item_code)
                .expect("every top-row room of level one has a free candidate");
            assert_eq!(placement.tile, TilePos { y, x }, "room {column}");
            assert_eq!(placement.item_code, item_code);
        }
    }

    #[test]
    fn visited_marker_does_not_block_placement() {
        let palette = Palette::for_seed(100);
        let mut marked = room(100, 5, 5);
        let first = place_item(&marked, &palette, 3).expect("start room is mostly floor");
        marked.set_tile(first.tile, 0x80);
        assert_eq!(place_item(&marked, &palette, 3), Some(first));
    }

    #[test]
    fn walks_backwards_with_wraparound_until_floor() {
        let palette = Palette::for_seed(100);
        let mut blocked = room(100, 5, 5);
        // (5 ^ 5) + 0 starts the walk at candidate 0, so the next one tried is 15.
        blocked.set_tile(TilePos { y: TREASURE_Y[0], x: TREASURE_X[0] }, WALL_CODE);
        let placement = place_item(&blocked, &palette, 1).expect("candidate 15 is floor");
        assert_eq!(placement.tile, TilePos { y: TREASURE_Y[15], x: TREASURE_X[15] });
    }

    #[test]
    fn fully_blocked_room_drops_the_item() {
        let palette = Palette::for_seed(100);
        let mut blocked = room(100, 5, 5);
        for k in 0..16 {
            blocked.set_tile(TilePos { y: TREASURE_Y[k], x: TREASURE_X[k] }, WALL_CODE);
        }
        assert_eq!(place_item(&blocked, &palette, 4), None);
    }

    proptest! {
        #[test]
        fn placements_never_land_on_walls(
            seed in 0_u32..256,
            column in 0_usize..11,
            row in 0_usize..11,
            item_code in 1_u8..=9,
        ) {
            let palette = Palette::for_seed(seed);
            let built = room(seed, column, row);
            if let Some(placement) = place_item(&built, &palette, item_code) {
                let tile = base_code(built.tile(placement.tile));
                prop_assert!(palette.is_floor(tile));
                prop_assert_ne!(tile, WALL_CODE);
            }
        }
    }
}
