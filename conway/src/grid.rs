// grid.rs - Grid types for Conway's Game of Life

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{LifeError, Result};

// Compile-time grid size configuration
pub const GRID_SIZE: usize = 40;                      // Active grid size (40x40 playing area)
pub const GRID_WIDTH: usize = GRID_SIZE;
pub const GRID_HEIGHT: usize = GRID_SIZE;
pub const TOTAL_SIZE: usize = GRID_SIZE + 2;          // Total size including the dead border
pub const GRID_START: usize = 1;                      // Start of active area
pub const GRID_END: usize = GRID_SIZE + 1;            // End of active area (1..GRID_SIZE+1)

pub type TRow = [bool; TOTAL_SIZE];
pub type TGrid = [TRow; TOTAL_SIZE];

/// The 40x40 cell matrix.
///
/// Cells are stored with a one-cell border that is never written, so the
/// neighbor count reads off-grid cells as dead without bounds checks. The
/// border is invisible through the public API: every coordinate is `(x, y)`
/// with `0 <= x < GRID_WIDTH` and `0 <= y < GRID_HEIGHT`.
///
/// `Grid` is a plain `Copy` value. A copy is a snapshot.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<bool>>", into = "Vec<Vec<bool>>")]
pub struct Grid {
    cells: TGrid,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// An all-dead grid.
    pub const fn new() -> Self {
        Self { cells: [[false; TOTAL_SIZE]; TOTAL_SIZE] }
    }

    /// A grid with exactly the listed cells alive.
    #[track_caller]
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::new();
        for (x, y) in cells {
            grid.set(x, y, true);
        }
        grid
    }

    /// Whether `(x, y)` lies on the grid.
    pub const fn contains(x: usize, y: usize) -> bool {
        x < GRID_WIDTH && y < GRID_HEIGHT
    }

    /// Map a public coordinate to its padded `[row][col]` slot.
    #[track_caller]
    fn slot(x: usize, y: usize) -> (usize, usize) {
        if !Self::contains(x, y) {
            panic!("{}", LifeError::OutOfRange { x, y });
        }
        (y + GRID_START, x + GRID_START)
    }

    #[track_caller]
    pub fn get(&self, x: usize, y: usize) -> bool {
        let (row, col) = Self::slot(x, y);
        self.cells[row][col]
    }

    #[track_caller]
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        let (row, col) = Self::slot(x, y);
        self.cells[row][col] = alive;
    }

    #[track_caller]
    pub fn toggle(&mut self, x: usize, y: usize) {
        let (row, col) = Self::slot(x, y);
        self.cells[row][col] = !self.cells[row][col];
    }

    /// Set every cell live with probability 0.5 using the thread RNG.
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::thread_rng());
    }

    /// Set every cell live with probability 0.5 using `rng`.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut next = Self::new();
        for row in GRID_START..GRID_END {
            for col in GRID_START..GRID_END {
                next.cells[row][col] = rng.gen_bool(0.5);
            }
        }
        *self = next;
    }

    /// Live cells in the Moore neighborhood of `(x, y)`; off-grid cells count as dead.
    #[track_caller]
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        let (row, col) = Self::slot(x, y);
        self.neighbors(row, col)
    }

    fn neighbors(&self, row: usize, col: usize) -> u8 {
        let neighbors = [
            (row-1,col-1),(row-1,col),(row-1,col+1),(row,col-1),
            (row+1,col-1),(row+1,col),(row+1,col+1),(row,col+1)
        ];
        neighbors.iter().filter(|&&(nr, nc)| self.cells[nr][nc]).count() as u8
    }

    fn next_row(&self, row: usize) -> TRow {
        let mut row_result = [false; TOTAL_SIZE];
        for col in GRID_START..GRID_END {
            row_result[col] = match (self.cells[row][col], self.neighbors(row, col)) {
                (true, 2) | (true, 3) => true,   // Survival
                (false, 3)            => true,   // Birth
                _                     => false,  // Death or stays dead
            };
        }
        row_result
    }

    /// The following generation under B3/S23. Does not touch `self`.
    pub fn next_generation(&self) -> Grid {
        let mut next = Self::new();
        for row in GRID_START..GRID_END {
            next.cells[row] = self.next_row(row);
        }
        next
    }

    /// Number of live cells.
    pub fn live_cells(&self) -> usize {
        self.cells[GRID_START..GRID_END]
            .iter()
            .map(|row| row[GRID_START..GRID_END].iter().filter(|&&c| c).count())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.live_cells() == 0
    }

    /// Coordinates of live cells, row by row.
    pub fn iter_live(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..GRID_HEIGHT)
            .flat_map(|y| (0..GRID_WIDTH).map(move |x| (x, y)))
            .filter(|&(x, y)| self.cells[y + GRID_START][x + GRID_START])
    }

    /// Persisted form: 40 rows of 40 booleans as JSON, row-major, no header.
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Parse the persisted form. Any other shape is `CorruptData`.
    pub fn decode(data: &[u8]) -> Result<Grid> {
        Ok(serde_json::from_slice(data)?)
    }
}

impl From<Grid> for Vec<Vec<bool>> {
    fn from(grid: Grid) -> Self {
        grid.cells[GRID_START..GRID_END]
            .iter()
            .map(|row| row[GRID_START..GRID_END].to_vec())
            .collect()
    }
}

impl TryFrom<Vec<Vec<bool>>> for Grid {
    type Error = String;

    fn try_from(rows: Vec<Vec<bool>>) -> std::result::Result<Self, Self::Error> {
        if rows.len() != GRID_HEIGHT {
            return Err(format!("expected {GRID_HEIGHT} rows, found {}", rows.len()));
        }
        let mut grid = Self::new();
        for (y, row) in rows.iter().enumerate() {
            if row.len() != GRID_WIDTH {
                return Err(format!("row {y}: expected {GRID_WIDTH} cells, found {}", row.len()));
            }
            grid.cells[y + GRID_START][GRID_START..GRID_END].copy_from_slice(row);
        }
        Ok(grid)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid ({} live)", self.live_cells())?;
        for row in &self.cells[GRID_START..GRID_END] {
            let line: String = row[GRID_START..GRID_END]
                .iter()
                .map(|&c| if c { '#' } else { '.' })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
