//! Library of named seed patterns
//!
//! Every pattern is a fixed table of `(row, col)` offsets relative to the
//! stamp origin. Offsets are zero-based; the origin itself is a 1-based board
//! coordinate.

/// Pattern families that can be stamped onto a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    Oscillator(Variant),
    StillLife(Variant),
    Glider(Variant),
    GliderMachineGun,
}

/// Type selector within a pattern family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    First,
    Second,
}

impl Variant {
    /// `2` selects the second variant, anything else the first
    pub fn from_selector(selector: u8) -> Self {
        if selector == 2 {
            Variant::Second
        } else {
            Variant::First
        }
    }
}

/// Width of the area reserved for the glider gun
pub const GUN_WIDTH: usize = 40;
/// Height of the area reserved for the glider gun
pub const GUN_HEIGHT: usize = 11;

// ###
const BLINKER: &[(usize, usize)] = &[(0, 0), (0, 1), (0, 2)];

// .###
// ###.
const TOAD: &[(usize, usize)] = &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)];

// ##
// ##
const BLOCK: &[(usize, usize)] = &[(0, 0), (0, 1), (1, 0), (1, 1)];

// .##.
// #..#
// .##.
const BEEHIVE: &[(usize, usize)] = &[(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (2, 2)];

// .#.
// ..#
// ###
const GLIDER: &[(usize, usize)] = &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

// .##
// ##.
// .#.
const R_PENTOMINO: &[(usize, usize)] = &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)];

// Gosper gun inside its 40x11 footprint, one row and two columns of margin
// (rows 1..=9 shown):
//
// ..........................#.............
// ........................#.#.............
// ..............##......##............##..
// .............#...#....##............##..
// ..##........#.....#...##................
// ..##........#...#.##....#.#.............
// ............#.....#.......#.............
// .............#...#......................
// ..............##........................
#[rustfmt::skip]
const GOSPER_GUN: &[(usize, usize)] = &[
    (1, 26),
    (2, 24), (2, 26),
    (3, 14), (3, 15), (3, 22), (3, 23), (3, 36), (3, 37),
    (4, 13), (4, 17), (4, 22), (4, 23), (4, 36), (4, 37),
    (5, 2), (5, 3), (5, 12), (5, 18), (5, 22), (5, 23),
    (6, 2), (6, 3), (6, 12), (6, 16), (6, 18), (6, 19), (6, 24), (6, 26),
    (7, 12), (7, 18), (7, 26),
    (8, 13), (8, 17),
    (9, 14), (9, 15),
];

impl Pattern {
    /// Relative live-cell offsets for this pattern
    pub fn offsets(self) -> &'static [(usize, usize)] {
        match self {
            Pattern::Oscillator(Variant::First) => BLINKER,
            Pattern::Oscillator(Variant::Second) => TOAD,
            Pattern::StillLife(Variant::First) => BLOCK,
            Pattern::StillLife(Variant::Second) => BEEHIVE,
            Pattern::Glider(Variant::First) => GLIDER,
            Pattern::Glider(Variant::Second) => R_PENTOMINO,
            Pattern::GliderMachineGun => GOSPER_GUN,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Oscillator(Variant::First) => "blinker",
            Pattern::Oscillator(Variant::Second) => "toad",
            Pattern::StillLife(Variant::First) => "block",
            Pattern::StillLife(Variant::Second) => "beehive",
            Pattern::Glider(Variant::First) => "glider",
            Pattern::Glider(Variant::Second) => "r-pentomino",
            Pattern::GliderMachineGun => "gosper glider gun",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_counts() {
        assert_eq!(Pattern::Oscillator(Variant::First).offsets().len(), 3);
        assert_eq!(Pattern::Oscillator(Variant::Second).offsets().len(), 6);
        assert_eq!(Pattern::StillLife(Variant::First).offsets().len(), 4);
        assert_eq!(Pattern::StillLife(Variant::Second).offsets().len(), 6);
        assert_eq!(Pattern::Glider(Variant::First).offsets().len(), 5);
        assert_eq!(Pattern::Glider(Variant::Second).offsets().len(), 5);
        assert_eq!(Pattern::GliderMachineGun.offsets().len(), 36);
    }

    #[test]
    fn test_gun_fits_footprint() {
        for &(row, col) in Pattern::GliderMachineGun.offsets() {
            assert!(row < GUN_HEIGHT);
            assert!(col < GUN_WIDTH);
        }
    }

    #[test]
    fn test_variant_selector() {
        assert_eq!(Variant::from_selector(1), Variant::First);
        assert_eq!(Variant::from_selector(2), Variant::Second);
        assert_eq!(Variant::from_selector(9), Variant::First);
    }
}
