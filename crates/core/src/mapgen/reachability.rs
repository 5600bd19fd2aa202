//! Flood fill over floor tiles that crosses room edges through open doorways.

use std::collections::BTreeSet;

use crate::types::{RoomCoord, Side, TilePos, VISITED_MARKER};

use super::cache::RoomCache;

pub type VisitedSet = BTreeSet<RoomCoord>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Step {
    room: RoomCoord,
    tile: TilePos,
}

/// Marks every floor tile reachable from `start` and returns the rooms that contain one.
///
/// Marked tiles keep their base code under [`VISITED_MARKER`], so the cache can still be
/// rendered afterwards. A start tile that is not floor yields an empty set.
pub fn explore(cache: &mut RoomCache<'_>, start: RoomCoord, start_tile: TilePos) -> VisitedSet {
    let palette = cache.tables().palette.clone();
    let mut visited = VisitedSet::new();
    let mut pending = vec![Step { room: start, tile: start_tile }];
    let mut marked_tiles = 0_usize;

    while let Some(step) = pending.pop() {
        let room = cache.room_mut(step.room);
        let tile = room.tile(step.tile);
        if !palette.is_floor(tile) {
            continue;
        }
        visited.insert(step.room);
        room.set_tile(step.tile, tile | VISITED_MARKER);
        marked_tiles += 1;

        for side in [Side::Left, Side::Right, Side::Top, Side::Bottom] {
            let Some(next) = neighbour(cache, step, side) else {
                continue;
            };
            if palette.is_floor(cache.room(next.room).tile(next.tile)) {
                pending.push(next);
            }
        }
    }

    tracing::debug!(?start, rooms = visited.len(), marked_tiles, "reachability explored");
    visited
}

/// The tile across `side`, stepping into the neighbouring room when the edge has a doorway.
fn neighbour(cache: &mut RoomCache<'_>, step: Step, side: Side) -> Option<Step> {
    let (map_width, map_height) = (cache.config().map_width, cache.config().map_height);
    let room = cache.room(step.room);
    let (width, height, exits) = (room.width, room.height, room.exits);
    let Step { room: coord, tile: TilePos { y, x } } = step;

    let inside = match side {
        Side::Left if x > 0 => Some(TilePos { y, x: x - 1 }),
        Side::Right if x < width - 1 => Some(TilePos { y, x: x + 1 }),
        Side::Top if y > 0 => Some(TilePos { y: y - 1, x }),
        Side::Bottom if y < height - 1 => Some(TilePos { y: y + 1, x }),
        _ => None,
    };
    if let Some(tile) = inside {
        return Some(Step { room: coord, tile });
    }

    if !exits.is_open(side) {
        return None;
    }
    match side {
        Side::Left if coord.column > 0 => Some(Step {
            room: RoomCoord::new(coord.column - 1, coord.row),
            tile: TilePos { y, x: width - 1 },
        }),
        Side::Right if coord.column < map_width - 1 => Some(Step {
            room: RoomCoord::new(coord.column + 1, coord.row),
            tile: TilePos { y, x: 0 },
        }),
        Side::Top if coord.row > 0 => Some(Step {
            room: RoomCoord::new(coord.column, coord.row - 1),
            tile: TilePos { y: height - 1, x },
        }),
        Side::Bottom if coord.row < map_height - 1 => Some(Step {
            room: RoomCoord::new(coord.column, coord.row + 1),
            tile: TilePos { y: 0, x },
        }),
        _ => None,
    }
}
