//! Text preview of a generated map: one character per tile, rooms separated by a gutter.

use mapgen_core::mapgen::TileArt;
use mapgen_core::{GeneratedMap, GeneratedRoom, RoomCoord, TileCode, TilePos};

const PLAYER_GLYPH: char = '@';
const FADE_GLYPH: char = ' ';

fn tile_glyph(art: Option<TileArt>) -> char {
    match art {
        Some(TileArt::Blank) => '.',
        Some(TileArt::Flowers | TileArt::Flowers2 | TileArt::Flowers3) => '*',
        Some(TileArt::Leaf1 | TileArt::Leaf5 | TileArt::Leaf6) => '#',
        Some(TileArt::Leaf2 | TileArt::Leaf3 | TileArt::Leaf4) => '%',
        Some(TileArt::Exit) => 'E',
        Some(TileArt::FinalExitLeft) => '[',
        Some(TileArt::FinalExitRight) => ']',
        None => '?',
    }
}

fn item_glyph(item_code: u8) -> char {
    char::from_digit(u32::from(item_code), 36).unwrap_or('!')
}

fn room_line(map: &GeneratedMap, room: &GeneratedRoom, y: usize) -> String {
    let width = map.config.room_width;
    let mut line = String::with_capacity(width);
    for x in 0..width {
        let tile: TileCode = room.tiles[y * width + x];
        let mut glyph = tile_glyph(map.palette.art(tile));
        if let Some(item) = room.item
            && item.tile == (TilePos { y, x })
        {
            glyph = item_glyph(item.item_code);
        }
        if map.start_room == Some(room.coord) && map.start_tile == Some(TilePos { y, x }) {
            glyph = PLAYER_GLYPH;
        }
        // Unreachable rooms are shaded with a checkerboard, as on the printed maps.
        if map.start_room.is_some() && !room.reachable && (x + y) % 2 == 1 {
            glyph = FADE_GLYPH;
        }
        line.push(glyph);
    }
    line
}

pub fn render(map: &GeneratedMap) -> String {
    let config = &map.config;
    let mut out = String::new();
    for row in 0..config.map_height {
        if row > 0 {
            out.push('\n');
        }
        for y in 0..config.room_height {
            let line: Vec<String> = (0..config.map_width)
                .map(|column| room_line(map, map.room(RoomCoord::new(column, row)), y))
                .collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use mapgen_core::{MapConfig, generate_map};

    use super::*;

    #[test]
    fn preview_has_one_line_per_tile_row_plus_gutters() {
        let map = generate_map(MapConfig { map_width: 3, map_height: 2, ..MapConfig::default() })
            .expect("valid config");
        let text = render(&map);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2 * 10 + 1);
        assert!(lines[10].is_empty());
        let room_lines = lines.iter().filter(|line| !line.is_empty());
        assert!(room_lines.clone().all(|line| line.chars().count() == 32));
    }

    #[test]
    fn start_room_shows_player_and_exit_room_shows_gate() {
        let map = generate_map(MapConfig::default()).expect("valid config");
        let text = render(&map);
        let lines: Vec<&str> = text.lines().collect();
        // Room (5, 5) starts at line 5 * 11 and column 5 * 11; centre tile is (4, 4).
        let start_line: Vec<char> = lines[5 * 11 + 4].chars().collect();
        assert_eq!(start_line[5 * 11 + 4], PLAYER_GLYPH);
        // Exit tile of room (7, 0) sits at (3, 3).
        let exit_line: Vec<char> = lines[3].chars().collect();
        assert_eq!(exit_line[7 * 11 + 3], 'E');
    }

    #[test]
    fn maps_without_start_room_are_not_shaded() {
        let config = MapConfig { seed: 7, map_width: 1, map_height: 1, ..MapConfig::default() };
        let map = generate_map(config).expect("valid config");
        let text = render(&map);
        assert!(!text.lines().next().unwrap_or_default().contains(FADE_GLYPH));
    }

    #[test]
    fn glyphs_cover_every_palette_entry() {
        assert_eq!(tile_glyph(Some(TileArt::Blank)), '.');
        assert_eq!(tile_glyph(Some(TileArt::Leaf1)), '#');
        assert_eq!(tile_glyph(None), '?');
        assert_eq!(item_glyph(5), '5');
        assert_eq!(item_glyph(9), '9');
    }
}
