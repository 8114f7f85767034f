//! Fixed-size square cell store.
//!
//! Cells live in an `im::Vector`, so `clone()` is O(1) structural sharing.
//! Legality checks lean on this: clone the grid, mutate the copy, compare,
//! drop it. The real grid is never touched by a simulation.
//!
//! Out-of-range coordinates are a caller bug and panic. Use [`Grid::contains`]
//! to bounds-check untrusted input first.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{Cell, Point, MAX_BOARD_SIZE};
use crate::core::Color;

/// Neighbor offsets in scan order: down, right, up, left.
const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Up to four in-bounds neighbors of a point.
pub type Neighbors = SmallVec<[Point; 4]>;

/// Square board of cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vector<Cell>,
}

impl Grid {
    /// Create an empty `size` x `size` grid.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Board size must be at least 1");
        assert!(
            size <= MAX_BOARD_SIZE,
            "At most {MAX_BOARD_SIZE}x{MAX_BOARD_SIZE} boards supported"
        );

        Self {
            size,
            cells: Vector::from(vec![Cell::Empty; size * size]),
        }
    }

    /// Side length.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of points.
    #[inline]
    #[must_use]
    pub fn area(&self) -> usize {
        self.size * self.size
    }

    /// Check whether `(x, y)` lies on the board.
    #[inline]
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    #[inline]
    fn index(&self, point: Point) -> usize {
        let (x, y) = (point.x as usize, point.y as usize);
        assert!(
            x < self.size && y < self.size,
            "Point {point} outside {}x{} board",
            self.size,
            self.size
        );
        y * self.size + x
    }

    /// Get the cell at a point.
    #[inline]
    #[must_use]
    pub fn get(&self, point: Point) -> Cell {
        self.cells[self.index(point)]
    }

    /// Set the cell at a point.
    #[inline]
    pub fn set(&mut self, point: Point, cell: Cell) {
        let idx = self.index(point);
        self.cells.set(idx, cell);
    }

    #[inline]
    #[must_use]
    pub fn is_empty_at(&self, point: Point) -> bool {
        self.get(point).is_empty()
    }

    /// In-bounds 4-neighbors in down, right, up, left order.
    #[must_use]
    pub fn neighbors(&self, point: Point) -> Neighbors {
        debug_assert!(self.contains(point.x as i32, point.y as i32));

        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dx, dy)| (point.x as i32 + dx, point.y as i32 + dy))
            .filter(|&(x, y)| self.contains(x, y))
            .map(|(x, y)| Point::new(x as u8, y as u8))
            .collect()
    }

    /// Iterate over every point, row by row.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let size = self.size as u8;
        (0..size).flat_map(move |y| (0..size).map(move |x| Point::new(x, y)))
    }

    /// Iterate over every empty point, row by row.
    pub fn empty_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.points().filter(|&p| self.is_empty_at(p))
    }

    /// Number of stones of a color on the board.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        let cell = Cell::from(color);
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Row-major view of all cells (for rendering).
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        (0..self.size)
            .map(|y| {
                self.cells
                    .iter()
                    .skip(y * self.size)
                    .take(self.size)
                    .copied()
                    .collect()
            })
            .collect()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line: String = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => '.',
                    Cell::Black => 'X',
                    Cell::White => 'O',
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
