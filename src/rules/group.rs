//! Connected groups and liberties.
//!
//! Traversal is iterative with an explicit stack, so depth is bounded by the
//! board area rather than the call stack.

use rustc_hash::FxHashSet;

use crate::board::{Grid, Point};
use crate::core::Color;

/// Maximal set of same-colored stones connected through 4-adjacency.
///
/// Computed on demand and never stored in the game state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    color: Color,
    stones: Vec<Point>,
}

impl Group {
    /// Color shared by every stone in the group.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Stones in discovery order.
    #[must_use]
    pub fn stones(&self) -> &[Point] {
        &self.stones
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stones.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.stones.contains(&point)
    }
}

/// Find the group containing the stone at `start`.
///
/// # Panics
///
/// Panics if `start` is empty.
#[must_use]
pub fn find_group(grid: &Grid, start: Point) -> Group {
    let Some(color) = grid.get(start).stone() else {
        panic!("No stone at {start} to build a group from");
    };
    let cell = grid.get(start);

    let mut visited = FxHashSet::default();
    let mut stones = Vec::new();
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        stones.push(current);

        for neighbor in grid.neighbors(current) {
            if grid.get(neighbor) == cell && !visited.contains(&neighbor) {
                stack.push(neighbor);
            }
        }
    }

    Group { color, stones }
}

/// Check whether any stone in the group touches an empty point.
///
/// An empty group has no liberties.
#[must_use]
pub fn has_liberties(grid: &Grid, group: &Group) -> bool {
    group
        .stones
        .iter()
        .any(|&stone| grid.neighbors(stone).iter().any(|&n| grid.is_empty_at(n)))
}

/// Collect the distinct liberties of a group.
#[must_use]
pub fn liberties(grid: &Grid, group: &Group) -> FxHashSet<Point> {
    group
        .stones
        .iter()
        .flat_map(|&stone| grid.neighbors(stone))
        .filter(|&n| grid.is_empty_at(n))
        .collect()
}
