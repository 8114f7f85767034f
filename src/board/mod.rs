//! Board representation: points, cell occupancy, and the grid.

pub mod grid;

pub use grid::Grid;

use serde::{Deserialize, Serialize};

use crate::core::Color;

/// Largest supported board side; the column alphabet skips `I`, leaving 25 letters.
pub const MAX_BOARD_SIZE: usize = 25;

/// Default board side length.
pub const DEFAULT_BOARD_SIZE: usize = 19;

/// Column letters in board notation (no `I`).
const COLUMN_LETTERS: &[u8; MAX_BOARD_SIZE] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// Occupancy of a single board point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// Color of the stone on this cell, if any.
    #[inline]
    #[must_use]
    pub fn stone(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// A board coordinate. `x` is the column (left to right), `y` the row (top to bottom).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: u8,
    pub y: u8,
}

impl Point {
    #[inline]
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Encode in board notation: column letter (skipping `I`) plus the row
    /// counted from the bottom edge.
    ///
    /// ```
    /// use go_rules::board::Point;
    ///
    /// assert_eq!(Point::new(3, 3).vertex(19), "D16");
    /// assert_eq!(Point::new(8, 18).vertex(19), "J1");
    /// ```
    #[must_use]
    pub fn vertex(self, board_size: usize) -> String {
        assert!(
            (self.x as usize) < board_size && (self.y as usize) < board_size,
            "Point ({}, {}) outside {}x{} board",
            self.x,
            self.y,
            board_size,
            board_size
        );
        let column = COLUMN_LETTERS[self.x as usize] as char;
        format!("{}{}", column, board_size - self.y as usize)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
