//! Reference game loop for two opaque move sources.
//!
//! The engine itself never decides when a stuck game should stop. This loop
//! does, the way an interactive front end would:
//! - a placement the engine rejects is treated as a pass;
//! - the game is scored after two consecutive passes or a resignation;
//! - it is also scored when the side to move has no legal placement left,
//!   or when `max_moves` half-moves have been played.
//!
//! Move sources can be anything: a human input adapter, a search engine, a
//! wrapped external program. They see the controller read-only.

use tracing::{debug, warn};

use crate::core::{Color, ColorMap, GameConfig, Move};
use crate::game::{FinalScore, GameController, Placement};

/// Something that picks moves for one color.
pub trait MoveSource {
    /// Display name for logs.
    fn name(&self) -> &str;

    /// Choose a move for `color`, which is the side to move in `game`.
    fn next_move(&mut self, game: &GameController, color: Color) -> Move;
}

impl<S: MoveSource + ?Sized> MoveSource for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn next_move(&mut self, game: &GameController, color: Color) -> Move {
        (**self).next_move(game, color)
    }
}

/// Why a session stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    /// Two consecutive passes.
    Passes,
    /// A player resigned.
    Resignation,
    /// The side to move had no legal placement.
    NoLegalMove,
    /// The half-move limit was reached.
    MoveLimit,
}

/// Configuration for a session.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Game settings.
    pub game: GameConfig,

    /// Maximum half-moves before the game is scored as it stands.
    pub max_moves: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            max_moves: 1000,
        }
    }
}

impl SessionConfig {
    pub fn new(game: GameConfig) -> Self {
        Self {
            game,
            ..Self::default()
        }
    }

    /// Set maximum half-moves.
    pub fn with_max_moves(mut self, max: usize) -> Self {
        self.max_moves = max;
        self
    }
}

/// Summary of a finished session.
#[derive(Clone, Debug)]
pub struct SessionOutcome {
    pub score: FinalScore,
    pub reason: EndReason,
    /// Half-moves requested from the sources.
    pub moves_played: usize,
    /// Placements the engine rejected and the loop converted to passes.
    pub rejected: usize,
}

/// Drives one game between two move sources.
pub struct GameSession<S: MoveSource> {
    game: GameController,
    sources: ColorMap<S>,
    config: SessionConfig,
}

impl<S: MoveSource> GameSession<S> {
    /// Create a session with `black` and `white` as the move sources.
    pub fn new(config: SessionConfig, black: S, white: S) -> Self {
        Self {
            game: GameController::new(config.game.clone()),
            sources: ColorMap::from_pair(black, white),
            config,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Consume the session, returning the game.
    pub fn into_game(self) -> GameController {
        self.game
    }

    /// Play until the game ends, then score it.
    pub fn run(&mut self) -> SessionOutcome {
        let mut moves_played = 0;
        let mut rejected = 0;

        let reason = loop {
            if self.game.is_over() {
                break if self.game.state().resigned().is_some() {
                    EndReason::Resignation
                } else {
                    EndReason::Passes
                };
            }
            if moves_played >= self.config.max_moves {
                break EndReason::MoveLimit;
            }
            if !self.game.has_legal_move() {
                break EndReason::NoLegalMove;
            }

            let color = self.game.current_player();
            let source = &mut self.sources[color];
            let mv = source.next_move(&self.game, color);
            debug!(source = source.name(), %color, ?mv, "move requested");
            moves_played += 1;

            let applied = match mv {
                Move::Place(point) => match self.game.play(point) {
                    Ok(Placement::Placed { .. }) => Ok(()),
                    Ok(Placement::Rejected(reason)) => {
                        warn!(
                            source = source.name(),
                            %color,
                            at = %point,
                            %reason,
                            "illegal placement, treating as pass"
                        );
                        rejected += 1;
                        self.game.pass_turn()
                    }
                    Err(err) => {
                        warn!(source = source.name(), %color, %err, "invalid placement, treating as pass");
                        rejected += 1;
                        self.game.pass_turn()
                    }
                },
                Move::Pass => self.game.pass_turn(),
                Move::Resign => self.game.resign(),
            };
            // The game was checked to be in progress above.
            debug_assert!(applied.is_ok());
        };

        let score = self.game.end_game();
        SessionOutcome {
            score,
            reason,
            moves_played,
            rejected,
        }
    }
}
