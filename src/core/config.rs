//! Game configuration.
//!
//! The board size and komi are fixed for the lifetime of a game and passed in
//! explicitly at construction; nothing reads a process-wide constant.

use serde::{Deserialize, Serialize};

use crate::board::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};

/// Komi used when none is given.
pub const DEFAULT_KOMI: f64 = 7.5;

/// Smallest board the engine accepts.
pub const MIN_BOARD_SIZE: usize = 2;

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use go_rules::core::GameConfig;
///
/// let config = GameConfig::new(9).with_komi(5.5);
/// assert_eq!(config.board_size, 9);
/// assert_eq!(config.komi, 5.5);
/// assert_eq!(config.area(), 81);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square board.
    pub board_size: usize,

    /// Points added to white's final score.
    pub komi: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            komi: DEFAULT_KOMI,
        }
    }
}

impl GameConfig {
    /// Create a configuration for a `board_size` x `board_size` board with default komi.
    #[must_use]
    pub fn new(board_size: usize) -> Self {
        assert!(
            board_size >= MIN_BOARD_SIZE,
            "Board size must be at least {MIN_BOARD_SIZE}"
        );
        assert!(
            board_size <= MAX_BOARD_SIZE,
            "At most {MAX_BOARD_SIZE}x{MAX_BOARD_SIZE} boards supported"
        );

        Self {
            board_size,
            ..Self::default()
        }
    }

    /// Set komi.
    #[must_use]
    pub fn with_komi(mut self, komi: f64) -> Self {
        assert!(komi.is_finite(), "Komi must be finite");
        self.komi = komi;
        self
    }

    /// Number of points on the board.
    #[must_use]
    pub fn area(&self) -> usize {
        self.board_size * self.board_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 19);
        assert_eq!(config.komi, 7.5);
        assert_eq!(config.area(), 361);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new(13).with_komi(6.5);
        assert_eq!(config.board_size, 13);
        assert_eq!(config.komi, 6.5);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::new(9).with_komi(0.5);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    #[should_panic(expected = "Board size must be at least")]
    fn test_board_too_small() {
        let _ = GameConfig::new(1);
    }

    #[test]
    #[should_panic(expected = "boards supported")]
    fn test_board_too_large() {
        let _ = GameConfig::new(26);
    }
}
