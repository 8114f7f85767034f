//! Placement legality: occupancy, ko, and suicide.

use serde::{Deserialize, Serialize};

use super::capture::find_captures;
use super::group::{find_group, has_liberties};
use super::ko::KoGuard;
use crate::board::{Grid, Point};
use crate::core::Color;

/// Why a placement was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IllegalMove {
    /// The point already holds a stone.
    Occupied,
    /// The placement would recreate the position before the opponent's last move.
    Ko,
    /// The placement captures nothing and leaves its own group without liberties.
    Suicide,
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::Occupied => write!(f, "point is occupied"),
            IllegalMove::Ko => write!(f, "ko recapture"),
            IllegalMove::Suicide => write!(f, "suicide"),
        }
    }
}

/// Check occupancy and suicide for `color` at `point`, ignoring ko.
///
/// A placement is legal when it captures at least one enemy stone or its own
/// group keeps a liberty. The simulation runs on a scratch clone.
#[must_use]
pub fn is_legal(grid: &Grid, point: Point, color: Color) -> bool {
    if !grid.is_empty_at(point) {
        return false;
    }

    let mut scratch = grid.clone();
    scratch.set(point, color.into());

    if !find_captures(&scratch, point, color.opponent()).is_empty() {
        return true;
    }
    has_liberties(&scratch, &find_group(&scratch, point))
}

/// Full placement check in rule order: occupancy, ko, suicide.
pub fn check_placement(grid: &Grid, ko: &KoGuard, point: Point, color: Color) -> Result<(), IllegalMove> {
    if !grid.is_empty_at(point) {
        return Err(IllegalMove::Occupied);
    }
    if ko.violates_ko(grid, point, color) {
        return Err(IllegalMove::Ko);
    }
    if !is_legal(grid, point, color) {
        return Err(IllegalMove::Suicide);
    }
    Ok(())
}

/// Every point where `color` may legally play.
///
/// Runs the full check on every empty point, so it costs O(area) legality
/// checks, each of which may flood-fill.
#[must_use]
pub fn legal_points(grid: &Grid, ko: &KoGuard, color: Color) -> Vec<Point> {
    grid.empty_points()
        .filter(|&p| check_placement(grid, ko, p, color).is_ok())
        .collect()
}

/// Check whether `color` has any legal placement. Stops at the first one found.
#[must_use]
pub fn has_legal_placement(grid: &Grid, ko: &KoGuard, color: Color) -> bool {
    grid.empty_points()
        .any(|p| check_placement(grid, ko, p, color).is_ok())
}
