//! Moves and the move record.
//!
//! A [`Move`] is what an external actor asks for. A [`MoveRecord`] is what
//! the game keeps once a half-move has been accepted: placements and passes
//! only, since a resignation ends the game instead of taking a turn.
//!
//! Records are grouped into 1-based rounds. Black opens each round and the
//! round is complete once white has answered.

use serde::{Deserialize, Serialize};

use super::color::Color;
use crate::board::Point;

/// Token used for a pass in board notation.
pub const PASS_TOKEN: &str = "PASS";

/// A move request from a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Place a stone.
    Place(Point),
    /// Pass the turn.
    Pass,
    /// Concede the game.
    Resign,
}

impl Move {
    /// Encode for display: board notation for placements, `PASS`, or `RESIGN`.
    #[must_use]
    pub fn notation(self, board_size: usize) -> String {
        match self {
            Move::Place(point) => point.vertex(board_size),
            Move::Pass => PASS_TOKEN.to_string(),
            Move::Resign => "RESIGN".to_string(),
        }
    }
}

/// An accepted half-move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub color: Color,

    /// The move played. Never `Move::Resign`.
    pub mv: Move,

    /// Round number (starts at 1).
    pub round: u32,

    /// Stones captured by this move.
    pub captured: u32,
}

impl MoveRecord {
    #[must_use]
    pub fn new(color: Color, mv: Move, round: u32, captured: u32) -> Self {
        debug_assert!(mv != Move::Resign, "Resignations are not recorded");
        Self {
            color,
            mv,
            round,
            captured,
        }
    }
}

/// One round of the history in board notation.
///
/// `None` means the player has not moved in this round yet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub black: Option<String>,
    pub white: Option<String>,
}

impl Round {
    /// Check whether both players have moved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.black.is_some() && self.white.is_some()
    }

    /// Set the entry for one color.
    pub fn set(&mut self, color: Color, notation: String) {
        match color {
            Color::Black => self.black = Some(notation),
            Color::White => self.white = Some(notation),
        }
    }
}
