//! Precondition violations.
//!
//! Illegal moves are not errors; see [`IllegalMove`](crate::rules::IllegalMove).
//! A `GameError` means the caller asked for something that can never be valid
//! in the current state.

use thiserror::Error;

/// Errors returned by the game controller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The coordinate is outside the board.
    #[error("coordinate ({x}, {y}) is outside the {size}x{size} board")]
    OutOfBounds { x: i32, y: i32, size: usize },

    /// The game has already ended.
    #[error("game is over")]
    GameOver,
}
