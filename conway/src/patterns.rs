use crate::grid::{self, TGrid, EMPTY, GRID_SIZE};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

// All coordinates fit inside the 30x30 board
pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(14, 13), (14, 14), (14, 15)],
    },
    Pattern {
        name: "Toad",
        cells: &[(14, 14), (14, 15), (14, 16), (15, 13), (15, 14), (15, 15)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(10, 10), (10, 11), (11, 10), (11, 11), (12, 12), (12, 13), (13, 12), (13, 13)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (8, 10), (8, 11), (8, 12), (8, 16), (8, 17), (8, 18),
            (10, 8), (10, 13), (10, 15), (10, 20),
            (11, 8), (11, 13), (11, 15), (11, 20),
            (12, 8), (12, 13), (12, 15), (12, 20),
            (13, 10), (13, 11), (13, 12), (13, 16), (13, 17), (13, 18),
            // Bottom half (mirrored)
            (15, 10), (15, 11), (15, 12), (15, 16), (15, 17), (15, 18),
            (16, 8), (16, 13), (16, 15), (16, 20),
            (17, 8), (17, 13), (17, 15), (17, 20),
            (18, 8), (18, 13), (18, 15), (18, 20),
            (20, 10), (20, 11), (20, 12), (20, 16), (20, 17), (20, 18),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(14, 14), (14, 15), (13, 15), (15, 14), (15, 13)],
    },
];

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|pattern| pattern.name.eq_ignore_ascii_case(name))
}

pub fn apply_pattern(grid: &mut TGrid, pattern: &Pattern) {
    *grid = grid::from_cells(pattern.cells);
}

/// Fills the board so that roughly a third of the cells are alive.
/// The same seed always produces the same board.
pub fn apply_random_pattern(grid: &mut TGrid, seed_value: u64) {
    *grid = EMPTY;

    let mut hasher = DefaultHasher::new();
    seed_value.hash(&mut hasher);
    let mut seed = hasher.finish();

    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            grid[row][col] = (seed >> 33) % 3 == 0;
        }
    }
}
