//! Grid module - the fixed-size playfield
//!
//! The grid is `GRID_HEIGHT` rows of `GRID_WIDTH` cells. Every row is its own
//! fixed-size array, so writing one row can never be observed through another.
//! Coordinates: (x, y) where x grows rightward and y grows downward.
//! Accessors take signed coordinates and bounds-check before indexing; pieces
//! routinely probe rows above the grid (negative y).

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::types::{
    Cell, Color, GRID_HEIGHT, GRID_WIDTH, OBSTACLE_BAND_OFFSET_PCT, OBSTACLE_BAND_SPAN_PCT,
};

/// One row of the grid, left to right
pub type Row = [Cell; GRID_WIDTH];

/// Row indices collected by a full-row scan (top to bottom)
pub type RowIndices = ArrayVec<usize, GRID_HEIGHT>;

#[inline]
fn empty_row() -> Row {
    [None; GRID_WIDTH]
}

/// The playfield - `GRID_WIDTH` columns x `GRID_HEIGHT` rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Row>,
}

impl Grid {
    /// Create a grid of empty cells, one freshly built row per index
    pub fn new() -> Self {
        Self {
            rows: (0..GRID_HEIGHT).map(|_| empty_row()).collect(),
        }
    }

    /// Build a grid from explicit rows.
    ///
    /// Returns `None` unless exactly `GRID_HEIGHT` rows are given.
    pub fn from_rows(rows: Vec<Row>) -> Option<Self> {
        if rows.len() != GRID_HEIGHT {
            return None;
        }
        Some(Self { rows })
    }

    pub fn width(&self) -> usize {
        GRID_WIDTH
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[inline(always)]
    fn index(x: i32, y: i32) -> Option<(usize, usize)> {
        if x < 0 || x >= GRID_WIDTH as i32 || y < 0 || y >= GRID_HEIGHT as i32 {
            return None;
        }
        Some((x as usize, y as usize))
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        Self::index(x, y).map(|(x, y)| self.rows[y][x])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some((x, y)) => {
                self.rows[y][x] = cell;
                true
            }
            None => false,
        }
    }

    /// Copy of this grid with one cell replaced (out of bounds leaves it unchanged)
    pub fn with_cell(&self, x: i32, y: i32, cell: Cell) -> Self {
        let mut next = self.clone();
        next.set(x, y, cell);
        next
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.rows
            .get(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Indices of all full rows, scanned top to bottom
    pub fn full_rows(&self) -> RowIndices {
        (0..self.rows.len())
            .filter(|&y| self.is_row_full(y))
            .collect()
    }

    /// Drop the given rows and push the same number of empty rows in at the top.
    ///
    /// The surviving rows keep their relative order, so the row count never changes.
    pub fn without_rows(&self, cleared: &[usize]) -> Self {
        let kept: Vec<Row> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(y, _)| !cleared.contains(y))
            .map(|(_, row)| *row)
            .collect();

        let mut rows: Vec<Row> = (0..self.rows.len() - kept.len())
            .map(|_| empty_row())
            .collect();
        rows.extend(kept);

        Self { rows }
    }

    /// Copy of this grid with one random cell of the middle band occupied.
    ///
    /// The column is uniform over the whole width; the row is uniform over the
    /// band starting `OBSTACLE_BAND_OFFSET_PCT` percent from the top and spanning
    /// `OBSTACLE_BAND_SPAN_PCT` percent of the height.
    pub fn with_obstacle(&self, rng: &mut SimpleRng) -> Self {
        let (x, y) = obstacle_position(rng);
        self.with_cell(x, y, Some(Color::Obstacle))
    }

    /// Count of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|cell| cell.is_some()).count())
            .sum()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw the (x, y) of the next obstacle cell.
pub fn obstacle_position(rng: &mut SimpleRng) -> (i32, i32) {
    let band_start = GRID_HEIGHT * OBSTACLE_BAND_OFFSET_PCT / 100;
    let band_span = GRID_HEIGHT * OBSTACLE_BAND_SPAN_PCT / 100;

    let x = rng.next_index(GRID_WIDTH);
    let y = band_start + rng.next_index(band_span);
    (x as i32, y as i32)
}
