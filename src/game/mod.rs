//! Game orchestration: the controller state machine and its results.

mod controller;
mod result;

pub use controller::{GameController, Placement};
pub use result::{FinalScore, GameResult};
