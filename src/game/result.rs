//! Game outcome and final score.

use serde::{Deserialize, Serialize};

use crate::core::Color;
use crate::scoring::ScoreReport;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Color),
    /// Exact tie (only possible with integral komi).
    Draw,
}

impl GameResult {
    /// Check if a color won.
    #[must_use]
    pub fn is_winner(&self, color: Color) -> bool {
        matches!(self, GameResult::Winner(c) if *c == color)
    }

    /// Decide the result from final totals.
    #[must_use]
    pub fn from_totals(black: f64, white: f64) -> Self {
        if black > white {
            GameResult::Winner(Color::Black)
        } else if white > black {
            GameResult::Winner(Color::White)
        } else {
            GameResult::Draw
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(color) => write!(f, "{color} wins"),
            GameResult::Draw => write!(f, "Draw"),
        }
    }
}

/// Outcome of [`GameController::end_game`](super::GameController::end_game).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinalScore {
    pub result: GameResult,
    pub black_score: f64,
    pub white_score: f64,
    /// Color that resigned, if the game ended by resignation.
    pub resigned: Option<Color>,
    /// Territory breakdown. `None` after a resignation, which skips counting.
    pub territory: Option<ScoreReport>,
}

impl FinalScore {
    /// Winner-takes-board score after a resignation: the resigning side gets
    /// nothing and the other side gets the whole board plus komi.
    #[must_use]
    pub fn by_resignation(loser: Color, area: usize, komi: f64) -> Self {
        let winner_score = area as f64 + komi;
        let (black_score, white_score) = match loser {
            Color::Black => (0.0, winner_score),
            Color::White => (winner_score, 0.0),
        };

        Self {
            result: GameResult::Winner(loser.opponent()),
            black_score,
            white_score,
            resigned: Some(loser),
            territory: None,
        }
    }

    /// Score from a territory count.
    #[must_use]
    pub fn from_report(report: ScoreReport) -> Self {
        Self {
            result: GameResult::from_totals(report.black_total, report.white_total),
            black_score: report.black_total,
            white_score: report.white_total,
            resigned: None,
            territory: Some(report),
        }
    }

    /// Winning color, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        match self.result {
            GameResult::Winner(color) => Some(color),
            GameResult::Draw => None,
        }
    }
}
