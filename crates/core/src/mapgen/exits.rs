//! Side rules deciding where neighbouring rooms share a doorway.
//!
//! The bit patterns below are reproduced exactly as the game evaluates them. A rule that
//! reports `true` means the side is drawn as solid wall; `false` leaves a centred doorway.
//! The outer edge of the map always reports `true`.

use serde::{Deserialize, Serialize};

use crate::types::Side;

pub fn top_exit(row: usize, column: usize) -> bool {
    let (i, j) = (row, column);
    if i == 0 {
        return true;
    }
    if i & 7 == j & 7 {
        return false;
    }
    ((i ^ j) + i) == j
}

pub fn left_exit(row: usize, column: usize) -> bool {
    let (i, j) = (row, column);
    if j == 0 {
        return true;
    }
    if i & 3 == j & 3 {
        return false;
    }
    ((i | j) ^ j) == i
}

pub fn right_exit(row: usize, column: usize, map_width: usize) -> bool {
    if column == map_width - 1 {
        return true;
    }
    left_exit(row, column + 1)
}

pub fn bottom_exit(row: usize, column: usize, map_height: usize) -> bool {
    if row == map_height - 1 {
        return true;
    }
    top_exit(row + 1, column)
}

/// The four side flags of one room, as produced by the side rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Exits {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Exits {
    pub fn for_room(row: usize, column: usize, map_width: usize, map_height: usize) -> Self {
        assert!(
            row < map_height && column < map_width,
            "room ({column}, {row}) outside {map_width}x{map_height} map"
        );
        Self {
            top: top_exit(row, column),
            right: right_exit(row, column, map_width),
            bottom: bottom_exit(row, column, map_height),
            left: left_exit(row, column),
        }
    }

    pub fn flag(&self, side: Side) -> bool {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    /// Whether the side has a doorway into the neighbouring room.
    pub fn is_open(&self, side: Side) -> bool {
        !self.flag(side)
    }

    pub fn to_array(self) -> [bool; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn outer_boundary_is_always_solid() {
        for k in 0..11 {
            assert!(top_exit(0, k));
            assert!(left_exit(k, 0));
            assert!(right_exit(k, 10, 11));
            assert!(bottom_exit(10, k, 11));
        }
    }

    #[test]
    fn matching_low_bits_leave_a_doorway() {
        assert!(!top_exit(9, 1));
        assert!(!top_exit(3, 3));
        assert!(!left_exit(5, 1));
        assert!(!left_exit(2, 6));
    }

    #[test]
    fn reference_room_flags() {
        assert_eq!(Exits::for_room(0, 0, 11, 11).to_array(), [true, true, false, true]);
        assert_eq!(Exits::for_room(5, 5, 11, 11).to_array(), [false, false, false, false]);
        assert_eq!(Exits::for_room(0, 7, 11, 11).to_array(), [true, false, true, true]);
        assert_eq!(Exits::for_room(0, 1, 11, 11).to_array(), [true, true, false, true]);
    }

    #[test]
    fn is_open_inverts_flag() {
        let exits = Exits { top: true, right: false, bottom: true, left: false };
        assert!(!exits.is_open(Side::Top));
        assert!(exits.is_open(Side::Right));
        assert!(!exits.is_open(Side::Bottom));
        assert!(exits.is_open(Side::Left));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn out_of_bounds_room_panics() {
        Exits::for_room(11, 0, 11, 11);
    }

    proptest! {
        #[test]
        fn neighbouring_rooms_agree_on_shared_sides(
            width in 2_usize..40,
            height in 2_usize..40,
            row_seed in any::<usize>(),
            column_seed in any::<usize>(),
        ) {
            let row = row_seed % height;
            let column = column_seed % width;
            let here = Exits::for_room(row, column, width, height);
            if column + 1 < width {
                let east = Exits::for_room(row, column + 1, width, height);
                prop_assert_eq!(here.right, east.left);
                prop_assert_eq!(right_exit(row, column, width), left_exit(row, column + 1));
            }
            if row + 1 < height {
                let south = Exits::for_room(row + 1, column, width, height);
                prop_assert_eq!(here.bottom, south.top);
                prop_assert_eq!(bottom_exit(row, column, height), top_exit(row + 1, column));
            }
        }
    }
}
