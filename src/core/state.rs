//! Game state owned by the controller.
//!
//! ## GameState
//!
//! Everything needed to continue or score a game:
//! - Board grid and the ko guard's snapshots
//! - Side to move, round counter, phase
//! - Consecutive passes, per-color captures, last moves
//! - Move history, resignation, and the final score once computed
//!
//! Read access is public; mutation goes through
//! [`GameController`](crate::game::GameController) only.

use std::collections::BTreeMap;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Move, MoveRecord, Round};
use super::color::{Color, ColorMap};
use super::config::GameConfig;
use crate::board::{Grid, Point};
use crate::game::FinalScore;
use crate::rules::KoGuard;

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    InProgress,
    GameOver,
}

/// Complete game state.
///
/// Uses `im` persistent structures, so cloning a state is cheap.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    config: GameConfig,
    grid: Grid,
    pub(crate) ko: KoGuard,
    to_move: Color,
    pub(crate) phase: Phase,

    /// Current round (0 before black's first move).
    round: u32,

    /// Coordinate of the most recent placement by either side.
    pub(crate) last_point: Option<Point>,

    /// Most recent move by each color (placement, pass, or resignation).
    pub(crate) last_moves: ColorMap<Option<Move>>,

    /// Passes since the last placement.
    pub(crate) consecutive_passes: u32,

    /// Stones captured by each color.
    captures: ColorMap<u32>,

    history: Vector<MoveRecord>,

    /// Color that resigned.
    pub(crate) resigned: Option<Color>,

    pub(crate) final_score: Option<FinalScore>,
}

impl GameState {
    /// Create the starting state: empty board, black to move.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            grid: Grid::new(config.board_size),
            config,
            ko: KoGuard::new(),
            to_move: Color::Black,
            phase: Phase::InProgress,
            round: 0,
            last_point: None,
            last_moves: ColorMap::with_value(None),
            consecutive_passes: 0,
            captures: ColorMap::with_value(0),
            history: Vector::new(),
            resigned: None,
            final_score: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[must_use]
    pub fn ko(&self) -> &KoGuard {
        &self.ko
    }

    #[must_use]
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn last_point(&self) -> Option<Point> {
        self.last_point
    }

    #[must_use]
    pub fn last_move_of(&self, color: Color) -> Option<Move> {
        self.last_moves[color]
    }

    #[must_use]
    pub fn consecutive_passes(&self) -> u32 {
        self.consecutive_passes
    }

    #[must_use]
    pub fn captures(&self, color: Color) -> u32 {
        self.captures[color]
    }

    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    #[must_use]
    pub fn resigned(&self) -> Option<Color> {
        self.resigned
    }

    #[must_use]
    pub fn final_score(&self) -> Option<&FinalScore> {
        self.final_score.as_ref()
    }

    // === Mutation (controller only) ===

    pub(crate) fn switch_turn(&mut self) {
        self.to_move = self.to_move.opponent();
    }

    pub(crate) fn add_captures(&mut self, color: Color, count: u32) {
        self.captures[color] += count;
    }

    /// Append an accepted half-move. Black's move opens a new round.
    pub(crate) fn record_move(&mut self, color: Color, mv: Move, captured: u32) {
        if color == Color::Black {
            self.round += 1;
        }
        self.history
            .push_back(MoveRecord::new(color, mv, self.round.max(1), captured));
        self.last_moves[color] = Some(mv);
    }

    /// History grouped by round, in board notation.
    #[must_use]
    pub fn move_history(&self) -> BTreeMap<u32, Round> {
        let size = self.config.board_size;
        let mut rounds: BTreeMap<u32, Round> = BTreeMap::new();

        for record in &self.history {
            rounds
                .entry(record.round)
                .or_default()
                .set(record.color, record.mv.notation(size));
        }

        rounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(GameConfig::new(9));

        assert_eq!(state.to_move(), Color::Black);
        assert_eq!(state.phase(), Phase::InProgress);
        assert_eq!(state.round(), 0);
        assert_eq!(state.grid().size(), 9);
        assert_eq!(state.captures(Color::Black), 0);
        assert!(state.ko().snapshot().is_none());
        assert!(state.history().is_empty());
        assert!(state.move_history().is_empty());
    }

    #[test]
    fn test_record_move_rounds() {
        let mut state = GameState::new(GameConfig::new(19));

        state.record_move(Color::Black, Move::Place(Point::new(3, 3)), 0);
        state.record_move(Color::White, Move::Pass, 0);
        state.record_move(Color::Black, Move::Place(Point::new(15, 3)), 0);

        assert_eq!(state.round(), 2);
        let history = state.move_history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[&1].black.as_deref(), Some("D16"));
        assert_eq!(history[&1].white.as_deref(), Some("PASS"));
        assert_eq!(history[&2].black.as_deref(), Some("Q16"));
        assert_eq!(history[&2].white, None);
        assert_eq!(state.last_move_of(Color::White), Some(Move::Pass));
    }

    #[test]
    fn test_switch_turn() {
        let mut state = GameState::new(GameConfig::default());
        state.switch_turn();
        assert_eq!(state.to_move(), Color::White);
        state.switch_turn();
        assert_eq!(state.to_move(), Color::Black);
    }

    #[test]
    fn test_state_serialization() {
        let mut state = GameState::new(GameConfig::new(9));
        state.grid_mut().set(Point::new(4, 4), crate::board::Cell::Black);
        state.record_move(Color::Black, Move::Place(Point::new(4, 4)), 0);

        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.grid(), state.grid());
        assert_eq!(restored.history(), state.history());
        assert_eq!(restored.move_history(), state.move_history());
    }
}
