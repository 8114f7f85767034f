//! End-of-game scoring.

pub mod territory;

pub use territory::{find_regions, score, Region, RegionKind, ScoreReport};
