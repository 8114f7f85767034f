//! The game state machine and public API.
//!
//! ```text
//! InProgress --place/pass--> InProgress
//! InProgress --second consecutive pass--> GameOver
//! InProgress --resign--> GameOver
//! InProgress --end_game--> GameOver (scored)
//! ```
//!
//! A rejected placement leaves the state untouched. Once the game is over the
//! board can no longer change; only [`GameController::end_game`] does work.
//!
//! The controller never forces a pass when the side to move has no legal
//! placement. [`GameController::has_legal_move`] reports it and the caller
//! decides (see [`crate::session`]).

use std::collections::BTreeMap;

use im::Vector;
use tracing::{debug, info};

use super::result::{FinalScore, GameResult};
use crate::board::{Grid, Point};
use crate::core::{Color, GameConfig, GameError, GameState, Move, MoveRecord, Phase, Round};
use crate::rules::{
    check_placement, has_legal_placement, legal_points, resolve_captures, CaptureMode, IllegalMove,
};
use crate::scoring;

/// Outcome of a placement request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Placement {
    /// The stone was placed; `captured` lists the removed enemy stones.
    Placed { captured: Vec<Point> },
    /// The placement was refused and nothing changed.
    Rejected(IllegalMove),
}

impl Placement {
    #[must_use]
    pub fn is_placed(&self) -> bool {
        matches!(self, Placement::Placed { .. })
    }
}

/// Owns one game and advances it one half-move at a time.
///
/// Single-writer: callers serialize their requests.
#[derive(Clone, Debug)]
pub struct GameController {
    state: GameState,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameController {
    /// Start a game: empty board, black to move.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            state: GameState::new(config),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        self.state.config()
    }

    /// Read-only view of the full state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    #[must_use]
    pub fn current_player(&self) -> Color {
        self.state.to_move()
    }

    /// Check whether `color` may move now.
    #[must_use]
    pub fn is_player_turn(&self, color: Color) -> bool {
        !self.is_over() && self.state.to_move() == color
    }

    /// Read-only board for rendering.
    #[must_use]
    pub fn board_snapshot(&self) -> &Grid {
        self.state.grid()
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        Ok(())
    }

    fn point_at(&self, x: i32, y: i32) -> Result<Point, GameError> {
        let grid = self.state.grid();
        if !grid.contains(x, y) {
            return Err(GameError::OutOfBounds {
                x,
                y,
                size: grid.size(),
            });
        }
        Ok(Point::new(x as u8, y as u8))
    }

    // === Moves ===

    /// Place a stone for the side to move.
    ///
    /// Returns `Ok(false)` for an illegal placement (occupied, ko, suicide).
    pub fn place(&mut self, x: i32, y: i32) -> Result<bool, GameError> {
        let point = self.point_at(x, y)?;
        Ok(self.play(point)?.is_placed())
    }

    /// Place a stone for the side to move, reporting captures or the rejection reason.
    pub fn play(&mut self, point: Point) -> Result<Placement, GameError> {
        self.ensure_in_progress()?;
        let point = self.point_at(point.x as i32, point.y as i32)?;
        let color = self.state.to_move();

        if let Err(reason) = check_placement(self.state.grid(), self.state.ko(), point, color) {
            debug!(at = %point, %color, %reason, "illegal placement");
            return Ok(Placement::Rejected(reason));
        }

        let grid = self.state.grid_mut();
        grid.set(point, color.into());
        let captured = resolve_captures(grid, point, color.opponent(), CaptureMode::Apply);
        let count = captured.len() as u32;

        let snapshot = self.state.grid().clone();
        self.state.ko.record(&snapshot);
        self.state.add_captures(color, count);
        self.state.consecutive_passes = 0;
        self.state.last_point = Some(point);
        self.state.record_move(color, Move::Place(point), count);
        self.state.switch_turn();

        debug!(
            at = %point,
            vertex = %point.vertex(self.config().board_size),
            %color,
            captured = count,
            "stone placed"
        );
        Ok(Placement::Placed { captured })
    }

    /// Pass the turn. The second consecutive pass ends the game.
    pub fn pass_turn(&mut self) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        let color = self.state.to_move();

        self.state.consecutive_passes += 1;
        self.state.record_move(color, Move::Pass, 0);
        self.state.switch_turn();
        debug!(%color, passes = self.state.consecutive_passes, "pass");

        if self.state.consecutive_passes >= 2 {
            self.state.phase = Phase::GameOver;
            info!("both players passed, game over");
        }
        Ok(())
    }

    /// Resign on behalf of the side to move. The opponent wins.
    pub fn resign(&mut self) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        let color = self.state.to_move();

        self.state.resigned = Some(color);
        self.state.last_moves[color] = Some(Move::Resign);
        self.state.phase = Phase::GameOver;
        info!(%color, winner = %color.opponent(), "resignation");
        Ok(())
    }

    // === Queries ===

    /// Check a placement for the side to move without playing it.
    ///
    /// # Panics
    ///
    /// Panics if `point` is off the board.
    pub fn check(&self, point: Point) -> Result<(), IllegalMove> {
        check_placement(self.state.grid(), self.state.ko(), point, self.state.to_move())
    }

    /// Check whether the side to move may play at `point`.
    #[must_use]
    pub fn is_legal(&self, point: Point) -> bool {
        !self.is_over() && self.check(point).is_ok()
    }

    /// All legal placements for the side to move.
    #[must_use]
    pub fn legal_points(&self) -> Vec<Point> {
        if self.is_over() {
            return Vec::new();
        }
        legal_points(self.state.grid(), self.state.ko(), self.state.to_move())
    }

    /// Check whether the side to move has any legal placement.
    ///
    /// Scans the whole board through the full legality check.
    #[must_use]
    pub fn has_legal_move(&self) -> bool {
        !self.is_over() && has_legal_placement(self.state.grid(), self.state.ko(), self.state.to_move())
    }

    /// Running scores as `(black, white)`.
    ///
    /// Before [`end_game`](Self::end_game) this is the capture tally, with komi
    /// already credited to white. Afterwards it is the final score.
    #[must_use]
    pub fn scores(&self) -> (f64, f64) {
        match self.state.final_score() {
            Some(score) => (score.black_score, score.white_score),
            None => (
                f64::from(self.state.captures(Color::Black)),
                f64::from(self.state.captures(Color::White)) + self.config().komi,
            ),
        }
    }

    /// Stones captured by `color` so far.
    #[must_use]
    pub fn captures(&self, color: Color) -> u32 {
        self.state.captures(color)
    }

    /// History by round in board notation.
    #[must_use]
    pub fn move_history(&self) -> BTreeMap<u32, Round> {
        self.state.move_history()
    }

    /// Raw history, one record per accepted half-move.
    #[must_use]
    pub fn records(&self) -> &Vector<MoveRecord> {
        self.state.history()
    }

    /// Most recent placement by either side.
    #[must_use]
    pub fn last_point(&self) -> Option<Point> {
        self.state.last_point()
    }

    /// Most recent move by `color`, e.g. to highlight the opponent's last move.
    #[must_use]
    pub fn last_move_of(&self, color: Color) -> Option<Move> {
        self.state.last_move_of(color)
    }

    #[must_use]
    pub fn consecutive_passes(&self) -> u32 {
        self.state.consecutive_passes()
    }

    /// Result, once [`end_game`](Self::end_game) has run or a resignation decided it.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if let Some(score) = self.state.final_score() {
            return Some(score.result);
        }
        self.state
            .resigned()
            .map(|loser| GameResult::Winner(loser.opponent()))
    }

    // === Scoring ===

    /// End the game and compute the final score.
    ///
    /// Idempotent: the first call fixes the result and later calls return it
    /// unchanged. Ending a game still in progress is allowed and counts the
    /// board as it stands.
    pub fn end_game(&mut self) -> FinalScore {
        if let Some(score) = self.state.final_score() {
            return score.clone();
        }

        self.state.phase = Phase::GameOver;
        let config = self.state.config();
        let score = match self.state.resigned() {
            Some(loser) => FinalScore::by_resignation(loser, config.area(), config.komi),
            None => FinalScore::from_report(scoring::score(self.state.grid(), config.komi)),
        };

        info!(
            result = %score.result,
            black = score.black_score,
            white = score.white_score,
            "game over"
        );
        self.state.final_score = Some(score.clone());
        score
    }
}
