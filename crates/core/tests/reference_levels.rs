use mapgen_core::mapgen::levels::RELEASED_SEEDS;
use mapgen_core::mapgen::sequence::ByteSequence;
use mapgen_core::{MapConfig, RoomCoord, TilePos, WALL_CODE, generate_map};

fn released_level(seed: u32) -> mapgen_core::GeneratedMap {
    generate_map(MapConfig { seed, ..MapConfig::default() }).expect("released dimensions are valid")
}

#[test]
fn level_one_start_reaches_exit_and_key_rooms() {
    let map = released_level(100);
    assert_eq!(map.start_room, Some(RoomCoord::new(5, 5)));
    assert_eq!(map.exit_room, Some(RoomCoord::new(7, 0)));
    assert_eq!(map.key_room, Some(RoomCoord::new(1, 0)));

    assert!(map.is_reachable(RoomCoord::new(5, 5)));
    assert!(map.is_reachable(RoomCoord::new(7, 0)), "exit room should be reachable");
    assert!(map.is_reachable(RoomCoord::new(1, 0)), "key room should be reachable");
}

#[test]
fn reachable_room_counts_for_released_levels() {
    let expected = [(100, 108), (239, 108), (183, 82), (144, 93)];
    for (seed, rooms) in expected {
        assert_eq!(released_level(seed).visited.len(), rooms, "seed {seed}");
    }
}

#[test]
fn final_level_gate_replaces_top_wall_tiles() {
    let map = released_level(144);
    let gate_room = RoomCoord::new(2, 0);
    assert_eq!(map.tile(gate_room, TilePos { y: 0, x: 3 }), WALL_CODE);
    assert_eq!(map.tile(gate_room, TilePos { y: 0, x: 4 }), 5);
    assert_eq!(map.tile(gate_room, TilePos { y: 0, x: 5 }), 6);
    assert_eq!(map.tile(gate_room, TilePos { y: 0, x: 6 }), WALL_CODE);

    let other_level = released_level(100);
    assert_eq!(other_level.tile(gate_room, TilePos { y: 0, x: 4 }), WALL_CODE);
}

#[test]
fn first_item_of_level_one_matches_sequence_golden_value() {
    let mut sequence = ByteSequence::new(101 & 31, 102 & 31);
    let item = sequence.next_byte() & 15;
    assert_eq!(item, 11);

    let map = released_level(100);
    let first_room = map.room(RoomCoord::new(0, 0));
    let placement = first_room.item.expect("room (0, 0) holds an item");
    assert_eq!(placement.item_code, 8);
    assert_eq!(placement.tile, TilePos { y: 6, x: 4 });
}

#[test]
fn key_rooms_hold_the_key_in_every_released_level() {
    for seed in RELEASED_SEEDS {
        let map = released_level(seed);
        let key_room = map.key_room.expect("released levels have a key room");
        let placement = map.room(key_room).item.expect("key is always placed");
        assert_eq!(placement.item_code, mapgen_core::KEY_ITEM_CODE);
    }
}

#[test]
fn every_placement_sits_on_floor() {
    for seed in RELEASED_SEEDS {
        let map = released_level(seed);
        for placement in map.placements() {
            let tile = map.tile(placement.room, placement.tile);
            assert!(map.palette.floor_codes.contains(&tile), "seed {seed} {placement:?}");
        }
    }
}

#[test]
fn unknown_seed_generates_with_default_tables() {
    let map = generate_map(MapConfig { seed: 7, ..MapConfig::default() }).expect("valid config");
    assert_eq!(map.level_index, 0);
    assert_eq!(map.start_room, None);
    assert!(map.visited.is_empty());
    assert_eq!(map.palette.tiles.len(), 4);
    assert_eq!(map.rooms.len(), 121);
}
