use anyhow::{Result, ensure};
use clap::Parser;
use mapgen_core::{GeneratedMap, GeneratedRoom, MapConfig, Side, WALL_CODE, generate_map};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 200)]
    maps: u32,
}

fn pick(rng: &mut ChaCha8Rng, low: usize, high: usize) -> usize {
    low + rng.next_u64() as usize % (high - low + 1)
}

fn random_config(rng: &mut ChaCha8Rng) -> MapConfig {
    MapConfig {
        // Bias toward the seeds that carry level tables.
        seed: match rng.next_u64() % 4 {
            0 => [100, 239, 183, 144, 36, 127, 4][pick(rng, 0, 6)],
            _ => rng.next_u64() as u32,
        },
        map_width: pick(rng, 1, 12),
        map_height: pick(rng, 1, 12),
        room_width: pick(rng, 10, 18),
        room_height: pick(rng, 10, 18),
    }
}

fn side_tiles(map: &GeneratedMap, room: &GeneratedRoom, side: Side) -> Vec<(usize, u8)> {
    let (width, height) = (map.config.room_width, map.config.room_height);
    let at = |x: usize, y: usize| room.tiles[y * width + x];
    match side {
        Side::Top => (0..width).map(|x| (x, at(x, 0))).collect(),
        Side::Bottom => (0..width).map(|x| (x, at(x, height - 1))).collect(),
        Side::Left => (0..height).map(|y| (y, at(0, y))).collect(),
        Side::Right => (0..height).map(|y| (y, at(width - 1, y))).collect(),
    }
}

fn check(map: &GeneratedMap) -> Result<()> {
    let config = &map.config;
    ensure!(map.rooms.len() == config.map_width * config.map_height, "room count mismatch");

    for room in &map.rooms {
        for side in Side::ALL {
            if !room.exits.flag(side) {
                continue;
            }
            let gated = map.level_index == 3 && side == Side::Top;
            for (offset, tile) in side_tiles(map, room, side) {
                if gated && (offset == 4 || offset == 5) {
                    continue;
                }
                ensure!(
                    tile == WALL_CODE,
                    "Invariant failed: closed {side:?} side of {:?} has tile {tile} at {offset}",
                    room.coord
                );
            }
        }

        if let Some(item) = room.item {
            let tile = room.tiles[item.tile.y * config.room_width + item.tile.x];
            ensure!(
                map.palette.is_floor(tile),
                "Invariant failed: item {} placed on tile {tile} in {:?}",
                item.item_code,
                room.coord
            );
        }

        ensure!(
            room.reachable == map.visited.contains(&room.coord),
            "Invariant failed: reachable flag disagrees with visited set at {:?}",
            room.coord
        );
    }

    if let (Some(start), false) = (map.start_room, map.visited.is_empty()) {
        ensure!(map.visited.contains(&start), "Invariant failed: start room not visited");
    }
    if map.start_room.is_none() {
        ensure!(map.visited.is_empty(), "Invariant failed: visited rooms without a start");
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Starting fuzz harness on seed {} for {} maps...", args.seed, args.maps);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for _ in 0..args.maps {
        let config = random_config(&mut rng);
        let map = generate_map(config)?;
        check(&map).map_err(|err| err.context(format!("config {config:?}")))?;

        let again = generate_map(config)?;
        ensure!(
            again.fingerprint() == map.fingerprint(),
            "Invariant failed: generation is not deterministic for {config:?}"
        );
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
