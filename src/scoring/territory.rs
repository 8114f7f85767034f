//! Area scoring with a simple seki heuristic.
//!
//! Each maximal empty region (4-connected) is classified by the stones on its
//! border:
//! - one border color: that color's territory;
//! - both colors, and every bordering color's adjacent groups have at most
//!   one liberty outside the region: seki, scored for nobody;
//! - anything else (including a region touching no stones): dame.
//!
//! The seki rule is a heuristic, not a full life-and-death reading.
//! Area score is territory plus stones on the board, with komi going to white.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::board::{Cell, Grid, Point};
use crate::core::{Color, ColorMap};
use crate::rules::{find_group, liberties};

/// Classification of an empty region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionKind {
    /// Surrounded by a single color.
    Territory(Color),
    /// Contested by both colors with neither able to fill safely.
    Seki,
    /// Neutral.
    Dame,
}

/// A maximal connected set of empty points.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub kind: RegionKind,
    /// Points in the region, sorted.
    pub points: Vec<Point>,
    /// Which colors have a stone on the region's border.
    pub borders: ColorMap<bool>,
}

impl Region {
    #[must_use]
    pub fn size(&self) -> usize {
        self.points.len()
    }
}

/// Full territory breakdown for one board position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub black_territory: usize,
    pub white_territory: usize,
    pub black_stones: usize,
    pub white_stones: usize,
    /// Black territory plus black stones.
    pub black_total: f64,
    /// White territory plus white stones plus komi.
    pub white_total: f64,
    pub seki_points: usize,
    pub dame_points: usize,
    pub regions: Vec<Region>,
}

impl ScoreReport {
    /// Territory credited to a color.
    #[must_use]
    pub fn territory(&self, color: Color) -> usize {
        match color {
            Color::Black => self.black_territory,
            Color::White => self.white_territory,
        }
    }

    /// Final total for a color.
    #[must_use]
    pub fn total(&self, color: Color) -> f64 {
        match color {
            Color::Black => self.black_total,
            Color::White => self.white_total,
        }
    }
}

/// Flood-fill the empty region containing `start`, collecting bordering stones.
fn flood_region(grid: &Grid, start: Point) -> (Vec<Point>, FxHashSet<Point>) {
    let mut region: FxHashSet<Point> = FxHashSet::default();
    let mut border = FxHashSet::default();
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        if !region.insert(current) {
            continue;
        }
        for neighbor in grid.neighbors(current) {
            if grid.is_empty_at(neighbor) {
                if !region.contains(&neighbor) {
                    stack.push(neighbor);
                }
            } else {
                border.insert(neighbor);
            }
        }
    }

    let mut points: Vec<Point> = region.into_iter().collect();
    points.sort_unstable();
    (points, border)
}

/// Liberties of `color`'s groups bordering the region, not counting the region itself.
fn outside_liberties(grid: &Grid, region: &[Point], border: &FxHashSet<Point>, color: Color) -> usize {
    let inside: FxHashSet<Point> = region.iter().copied().collect();
    let cell = Cell::from(color);
    let mut seen_stones = FxHashSet::default();
    let mut libs = FxHashSet::default();

    for &stone in border.iter().filter(|&&s| grid.get(s) == cell) {
        if seen_stones.contains(&stone) {
            continue;
        }
        let group = find_group(grid, stone);
        seen_stones.extend(group.stones().iter().copied());
        libs.extend(
            liberties(grid, &group)
                .into_iter()
                .filter(|p| !inside.contains(p)),
        );
    }

    libs.len()
}

fn classify(grid: &Grid, points: &[Point], border: &FxHashSet<Point>) -> (RegionKind, ColorMap<bool>) {
    let mut borders: ColorMap<bool> = ColorMap::with_value(false);
    for &stone in border {
        if let Some(color) = grid.get(stone).stone() {
            borders[color] = true;
        }
    }

    let kind = match (borders[Color::Black], borders[Color::White]) {
        (true, false) => RegionKind::Territory(Color::Black),
        (false, true) => RegionKind::Territory(Color::White),
        (true, true) => {
            let seki = Color::ALL
                .iter()
                .all(|&color| outside_liberties(grid, points, border, color) <= 1);
            if seki {
                RegionKind::Seki
            } else {
                RegionKind::Dame
            }
        }
        (false, false) => RegionKind::Dame,
    };

    (kind, borders)
}

/// Split the empty points of the board into classified regions, in scan order.
#[must_use]
pub fn find_regions(grid: &Grid) -> Vec<Region> {
    let mut visited: FxHashSet<Point> = FxHashSet::default();
    let mut regions = Vec::new();

    for start in grid.empty_points() {
        if visited.contains(&start) {
            continue;
        }
        let (points, border) = flood_region(grid, start);
        visited.extend(points.iter().copied());

        let (kind, borders) = classify(grid, &points, &border);
        regions.push(Region {
            kind,
            points,
            borders,
        });
    }

    regions
}

/// Score a finished position.
#[must_use]
pub fn score(grid: &Grid, komi: f64) -> ScoreReport {
    let regions = find_regions(grid);

    let mut territory: ColorMap<usize> = ColorMap::with_value(0);
    let mut seki_points = 0;
    let mut dame_points = 0;
    for region in &regions {
        match region.kind {
            RegionKind::Territory(color) => territory[color] += region.size(),
            RegionKind::Seki => seki_points += region.size(),
            RegionKind::Dame => dame_points += region.size(),
        }
    }

    let black_stones = grid.count(Color::Black);
    let white_stones = grid.count(Color::White);
    let report = ScoreReport {
        black_territory: territory[Color::Black],
        white_territory: territory[Color::White],
        black_stones,
        white_stones,
        black_total: (territory[Color::Black] + black_stones) as f64,
        white_total: (territory[Color::White] + white_stones) as f64 + komi,
        seki_points,
        dame_points,
        regions,
    };

    info!(
        black = report.black_total,
        white = report.white_total,
        black_territory = report.black_territory,
        white_territory = report.white_territory,
        seki = report.seki_points,
        "territory scored"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(size: usize, black: &[(u8, u8)], white: &[(u8, u8)]) -> Grid {
        let mut grid = Grid::new(size);
        for &(x, y) in black {
            grid.set(Point::new(x, y), Cell::Black);
        }
        for &(x, y) in white {
            grid.set(Point::new(x, y), Cell::White);
        }
        grid
    }

    #[test]
    fn test_empty_board_is_all_dame() {
        let report = score(&Grid::new(9), 7.5);

        assert_eq!(report.regions.len(), 1);
        assert_eq!(report.regions[0].kind, RegionKind::Dame);
        assert_eq!(report.dame_points, 81);
        assert_eq!(report.black_total, 0.0);
        assert_eq!(report.white_total, 7.5);
    }

    #[test]
    fn test_split_board_territory() {
        // Black wall on column 2, white wall on column 3 of a 5x5 board.
        let black: Vec<(u8, u8)> = (0..5).map(|y| (1, y)).collect();
        let white: Vec<(u8, u8)> = (0..5).map(|y| (3, y)).collect();
        let grid = grid_with(5, &black, &white);

        let report = score(&grid, 0.5);

        assert_eq!(report.black_territory, 5);
        assert_eq!(report.white_territory, 5);
        assert_eq!(report.black_stones, 5);
        assert_eq!(report.white_stones, 5);
        // Column 2 touches both walls; both sides have plenty of outside liberties.
        assert_eq!(report.dame_points, 5);
        assert_eq!(report.black_total, 10.0);
        assert_eq!(report.white_total, 10.5);
    }

    #[test]
    fn test_seki_point_scores_for_nobody() {
        // 3x3 board, one shared empty point at (1,1). Every other point is a
        // stone, so neither side has a liberty outside the region.
        //   X X O
        //   X . O
        //   X O O
        let grid = grid_with(
            3,
            &[(0, 0), (1, 0), (0, 1), (0, 2)],
            &[(2, 0), (2, 1), (2, 2), (1, 2)],
        );

        let report = score(&grid, 0.0);

        assert_eq!(report.seki_points, 1);
        assert_eq!(report.black_territory, 0);
        assert_eq!(report.white_territory, 0);
        assert_eq!(report.black_total, 4.0);
        assert_eq!(report.white_total, 4.0);
    }

    #[test]
    fn test_regions_report_borders() {
        let grid = grid_with(3, &[(1, 0), (0, 1)], &[]);
        let regions = find_regions(&grid);

        let corner = regions
            .iter()
            .find(|r| r.points == vec![Point::new(0, 0)])
            .unwrap();
        assert_eq!(corner.kind, RegionKind::Territory(Color::Black));
        assert!(corner.borders[Color::Black]);
        assert!(!corner.borders[Color::White]);
    }

    #[test]
    fn test_region_points_cover_empty_points() {
        let grid = grid_with(5, &[(1, 1), (2, 2)], &[(3, 3), (0, 4)]);
        let regions = find_regions(&grid);

        let total: usize = regions.iter().map(Region::size).sum();
        assert_eq!(total, grid.empty_points().count());
    }
}
