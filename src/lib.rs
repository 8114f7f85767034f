//! # go-rules
//!
//! A rules engine for the game of Go.
//!
//! The engine owns the authoritative board, decides move legality, resolves
//! captures, enforces simple ko, tracks turns, passes and resignation, and
//! computes area scores with a simple seki heuristic. Rendering, input, move
//! suggestion, and external notation formats are left to callers.
//!
//! ## Design Principles
//!
//! 1. **Explicit board size**: every game is built from a `GameConfig`; there
//!    is no global board constant.
//!
//! 2. **Clone, mutate, compare, drop**: the grid is an `im` persistent vector,
//!    so legality and ko checks simulate on O(1) clones and never touch the
//!    real board.
//!
//! 3. **Illegal is not an error**: occupied, ko and suicide placements come
//!    back as a rejection. `GameError` is reserved for precondition
//!    violations such as off-board coordinates or moving after the game ended.
//!
//! ## Modules
//!
//! - `core`: colors, configuration, moves, game state, errors
//! - `board`: points, cells, and the grid
//! - `rules`: groups, captures, ko, placement legality
//! - `scoring`: territory regions and area scores
//! - `game`: the `GameController` state machine
//! - `session`: a reference loop driving two move sources
//!
//! ## Quick Start
//!
//! ```
//! use go_rules::{Color, GameConfig, GameController};
//!
//! let mut game = GameController::new(GameConfig::new(9));
//! assert!(game.place(4, 4).unwrap());
//! assert_eq!(game.current_player(), Color::White);
//!
//! game.pass_turn().unwrap();
//! game.pass_turn().unwrap();
//! assert!(game.is_over());
//!
//! let score = game.end_game();
//! assert_eq!(score.winner(), Some(Color::Black));
//! ```

pub mod board;
pub mod core;
pub mod game;
pub mod rules;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use crate::board::{Cell, Grid, Point};

pub use crate::core::{Color, ColorMap, GameConfig, GameError, GameState, Move, MoveRecord, Phase, Round};

pub use crate::rules::{IllegalMove, KoGuard};

pub use crate::scoring::{Region, RegionKind, ScoreReport};

pub use crate::game::{FinalScore, GameController, GameResult, Placement};

pub use crate::session::{EndReason, GameSession, MoveSource, SessionConfig, SessionOutcome};
