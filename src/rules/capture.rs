//! Capture resolution around a freshly placed stone.
//!
//! Only enemy groups touching the placed stone can lose their last liberty,
//! so only those four neighbors are examined. A group reached through two
//! neighbors is counted once.

use rustc_hash::FxHashSet;
use tracing::debug;

use super::group::{find_group, has_liberties};
use crate::board::{Cell, Grid, Point};
use crate::core::Color;

/// Whether capture resolution may touch the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureMode {
    /// Report captures without mutating anything.
    DryRun,
    /// Remove captured stones from the grid.
    Apply,
}

/// Find the `enemy` stones left without liberties next to `placed`.
///
/// Returned points are sorted so results are deterministic.
#[must_use]
pub fn find_captures(grid: &Grid, placed: Point, enemy: Color) -> Vec<Point> {
    let enemy_cell = Cell::from(enemy);
    let mut captured: FxHashSet<Point> = FxHashSet::default();

    for neighbor in grid.neighbors(placed) {
        if grid.get(neighbor) != enemy_cell || captured.contains(&neighbor) {
            continue;
        }
        let group = find_group(grid, neighbor);
        if !has_liberties(grid, &group) {
            captured.extend(group.stones().iter().copied());
        }
    }

    let mut captured: Vec<Point> = captured.into_iter().collect();
    captured.sort_unstable();
    captured
}

/// Resolve captures caused by the stone at `placed`.
///
/// With [`CaptureMode::Apply`] the captured stones are cleared from `grid`;
/// with [`CaptureMode::DryRun`] the grid is left as it was.
pub fn resolve_captures(grid: &mut Grid, placed: Point, enemy: Color, mode: CaptureMode) -> Vec<Point> {
    let captured = find_captures(grid, placed, enemy);

    if mode == CaptureMode::Apply {
        for &point in &captured {
            grid.set(point, Cell::Empty);
        }
        if !captured.is_empty() {
            debug!(at = %placed, count = captured.len(), %enemy, "captured stones");
        }
    }

    captured
}
