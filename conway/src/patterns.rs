// patterns.rs - Preset starting patterns laid out for the 40x40 grid

use crate::grid::Grid;

/// A named set of live `(x, y)` cells.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// The pattern on an otherwise dead grid.
    pub fn to_grid(&self) -> Grid {
        Grid::from_cells(self.cells.iter().copied())
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(6, 5), (7, 6), (5, 7), (6, 7), (7, 7)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(18, 19), (19, 19), (20, 19)],
    },
    Pattern {
        name: "Toad",
        cells: &[(19, 18), (20, 18), (21, 18), (18, 19), (19, 19), (20, 19)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(9, 9), (10, 9), (9, 10), (10, 10), (11, 11), (12, 11), (11, 12), (12, 12)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Upper half
            (15, 13), (16, 13), (17, 13), (21, 13), (22, 13), (23, 13),
            (13, 15), (18, 15), (20, 15), (25, 15),
            (13, 16), (18, 16), (20, 16), (25, 16),
            (13, 17), (18, 17), (20, 17), (25, 17),
            (15, 18), (16, 18), (17, 18), (21, 18), (22, 18), (23, 18),
            // Lower half (mirrored about y = 19)
            (15, 20), (16, 20), (17, 20), (21, 20), (22, 20), (23, 20),
            (13, 21), (18, 21), (20, 21), (25, 21),
            (13, 22), (18, 22), (20, 22), (25, 22),
            (13, 23), (18, 23), (20, 23), (25, 23),
            (15, 25), (16, 25), (17, 25), (21, 25), (22, 25), (23, 25),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(19, 19), (20, 19), (20, 18), (19, 20), (18, 20)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (0, 4), (1, 4), (0, 5), (1, 5),
            (10, 4), (10, 5), (10, 6), (11, 3), (11, 7), (12, 2), (12, 8),
            (13, 2), (13, 8), (14, 5), (15, 3), (15, 7), (16, 4), (16, 5),
            (16, 6), (17, 5), (20, 2), (20, 3), (20, 4), (21, 2), (21, 3),
            (21, 4), (22, 1), (22, 5), (24, 0), (24, 1), (24, 5), (24, 6),
            (34, 2), (34, 3), (35, 2), (35, 3),
        ],
    },
];

/// Look up a preset by name.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_fit_grid() {
        for pattern in PATTERNS {
            for &(x, y) in pattern.cells {
                assert!(Grid::contains(x, y), "{} has off-grid cell ({x}, {y})", pattern.name);
            }
            assert_eq!(pattern.to_grid().live_cells(), pattern.cells.len(), "{} repeats a cell", pattern.name);
        }
    }

    #[test]
    fn test_period_two_oscillators() {
        for name in ["Blinker", "Toad", "Beacon"] {
            let start = find(name).unwrap().to_grid();
            let one = start.next_generation();
            assert_ne!(one, start, "{name} should change");
            assert_eq!(one.next_generation(), start, "{name} should return after two generations");
        }
    }

    #[test]
    fn test_pulsar_has_period_three() {
        let start = find("pulsar").unwrap().to_grid();
        let mut grid = start;
        for _ in 0..3 {
            grid = grid.next_generation();
        }
        assert_eq!(grid, start);
        assert_ne!(start.next_generation(), start);
    }

    #[test]
    fn test_glider_translates_diagonally() {
        let start = find("Glider").unwrap().to_grid();
        let mut grid = start;
        for _ in 0..4 {
            grid = grid.next_generation();
        }
        let moved: Vec<_> = start.iter_live().map(|(x, y)| (x + 1, y + 1)).collect();
        assert_eq!(grid, Grid::from_cells(moved));
    }
}
