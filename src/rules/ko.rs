//! Simple ko: forbid recreating the position from before the opponent's last move.
//!
//! The guard keeps the post-capture grid of the two most recent placements.
//! A candidate is simulated on a scratch clone and rejected if the result
//! equals the older of the two, i.e. it would undo the opponent's last move.
//! Passes leave the snapshots alone.
//!
//! Only the immediately preceding position is compared. Longer cycles
//! (triple ko and friends) are not detected.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::capture::{resolve_captures, CaptureMode};
use crate::board::{Grid, Point};
use crate::core::Color;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KoGuard {
    /// Grid after the most recent placement.
    latest: Option<Grid>,
    /// Grid after the placement before that.
    previous: Option<Grid>,
}

impl KoGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the post-capture grid of a completed placement.
    pub fn record(&mut self, grid: &Grid) {
        self.previous = self.latest.replace(grid.clone());
    }

    /// Snapshot a candidate is compared against, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<&Grid> {
        self.previous.as_ref()
    }

    /// Check whether `color` playing at `point` would recreate the guarded position.
    ///
    /// `point` must be empty.
    #[must_use]
    pub fn violates_ko(&self, grid: &Grid, point: Point, color: Color) -> bool {
        let Some(snapshot) = &self.previous else {
            return false;
        };

        let mut scratch = grid.clone();
        scratch.set(point, color.into());
        resolve_captures(&mut scratch, point, color.opponent(), CaptureMode::Apply);

        let repeats = scratch == *snapshot;
        if repeats {
            debug!(at = %point, %color, "ko recapture blocked");
        }
        repeats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    /// Ko shape in the top-left corner of a 5x5 board, black to capture at (2,1):
    ///
    /// ```text
    ///   . X O .
    ///   X O . O
    ///   . X O .
    /// ```
    fn ko_shape() -> Grid {
        let mut grid = Grid::new(5);
        for (x, y) in [(1, 0), (0, 1), (1, 2)] {
            grid.set(Point::new(x, y), Cell::Black);
        }
        for (x, y) in [(2, 0), (1, 1), (3, 1), (2, 2)] {
            grid.set(Point::new(x, y), Cell::White);
        }
        grid
    }

    #[test]
    fn test_no_snapshot_never_violates() {
        let guard = KoGuard::new();
        assert!(!guard.violates_ko(&ko_shape(), Point::new(2, 1), Color::Black));
    }

    #[test]
    fn test_immediate_recapture_blocked() {
        let mut guard = KoGuard::new();
        let mut grid = ko_shape();
        guard.record(&grid);

        // Black takes the ko.
        grid.set(Point::new(2, 1), Cell::Black);
        grid.set(Point::new(1, 1), Cell::Empty);
        guard.record(&grid);

        assert!(guard.violates_ko(&grid, Point::new(1, 1), Color::White));
    }

    #[test]
    fn test_recapture_allowed_after_exchange_elsewhere() {
        let mut guard = KoGuard::new();
        let mut grid = ko_shape();
        guard.record(&grid);

        grid.set(Point::new(2, 1), Cell::Black);
        grid.set(Point::new(1, 1), Cell::Empty);
        guard.record(&grid);

        // White and black both play elsewhere.
        grid.set(Point::new(4, 4), Cell::White);
        guard.record(&grid);
        grid.set(Point::new(4, 3), Cell::Black);
        guard.record(&grid);

        assert!(!guard.violates_ko(&grid, Point::new(1, 1), Color::White));
    }

    #[test]
    fn test_check_does_not_mutate_grid() {
        let mut guard = KoGuard::new();
        let grid = ko_shape();
        guard.record(&grid);
        guard.record(&grid);

        let before = grid.clone();
        let _ = guard.violates_ko(&grid, Point::new(2, 1), Color::Black);
        assert_eq!(grid, before);
    }
}
