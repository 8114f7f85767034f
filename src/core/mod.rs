//! Core engine types: colors, configuration, moves, state, errors.
//!
//! These are shared by every other module. The board itself lives in
//! [`crate::board`]; the rules that act on it live in [`crate::rules`].

pub mod action;
pub mod color;
pub mod config;
pub mod error;
pub mod state;

pub use action::{Move, MoveRecord, Round, PASS_TOKEN};
pub use color::{Color, ColorMap};
pub use config::{GameConfig, DEFAULT_KOMI, MIN_BOARD_SIZE};
pub use error::GameError;
pub use state::{GameState, Phase};
