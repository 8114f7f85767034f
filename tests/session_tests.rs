//! Session loop tests with seeded random and misbehaving move sources.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use go_rules::board::Point;
use go_rules::{
    Color, EndReason, GameConfig, GameController, GameSession, Move, MoveSource, SessionConfig,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Plays a uniformly random legal point, passing now and then.
struct RandomSource {
    rng: ChaCha8Rng,
}

impl RandomSource {
    fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl MoveSource for RandomSource {
    fn name(&self) -> &str {
        "random"
    }

    fn next_move(&mut self, game: &GameController, _color: Color) -> Move {
        if self.rng.gen_bool(0.05) {
            return Move::Pass;
        }
        let legal = game.legal_points();
        legal
            .choose(&mut self.rng)
            .map_or(Move::Pass, |&point| Move::Place(point))
    }
}

/// Always asks for the same point.
struct Stubborn(Point);

impl MoveSource for Stubborn {
    fn name(&self) -> &str {
        "stubborn"
    }

    fn next_move(&mut self, _game: &GameController, _color: Color) -> Move {
        Move::Place(self.0)
    }
}

fn random_session(seed: u64) -> GameSession<Box<dyn MoveSource>> {
    let config = SessionConfig::new(GameConfig::new(7)).with_max_moves(400);
    GameSession::new(
        config,
        Box::new(RandomSource::new(seed)),
        Box::new(RandomSource::new(seed.wrapping_add(1))),
    )
}

// =============================================================================
// Random Play
// =============================================================================

/// Random games always terminate and get scored.
#[test]
fn test_random_games_terminate() {
    init_tracing();

    for seed in 0..8 {
        let mut session = random_session(seed);
        let outcome = session.run();

        assert!(outcome.moves_played <= 400);
        assert_eq!(outcome.rejected, 0, "random source only plays legal points");
        assert!(session.game().is_over());
        assert_ne!(outcome.reason, EndReason::Resignation);

        if outcome.reason == EndReason::Passes {
            assert_eq!(session.game().consecutive_passes(), 2);
        }
        assert_eq!(session.game().scores(), (outcome.score.black_score, outcome.score.white_score));
    }
}

/// The same seeds replay the same game.
#[test]
fn test_seeded_games_are_reproducible() {
    init_tracing();

    let first = random_session(42).run();
    let second = random_session(42).run();

    assert_eq!(first.score, second.score);
    assert_eq!(first.moves_played, second.moves_played);
    assert_eq!(first.reason, second.reason);
}

// =============================================================================
// Misbehaving Sources
// =============================================================================

/// Off-board requests are converted to passes and end the game.
#[test]
fn test_off_board_requests_become_passes() {
    init_tracing();

    let far = Point::new(20, 20);
    let mut session = GameSession::new(
        SessionConfig::new(GameConfig::new(9)),
        Stubborn(far),
        Stubborn(far),
    );
    let outcome = session.run();

    assert_eq!(outcome.reason, EndReason::Passes);
    assert_eq!(outcome.rejected, 2);
    assert_eq!(outcome.moves_played, 2);
    assert_eq!(session.game().board_snapshot().count(Color::Black), 0);
}

/// A source repeating an occupied point has its later requests passed.
#[test]
fn test_repeated_point_becomes_pass() {
    init_tracing();

    let point = Point::new(4, 4);
    let mut session = GameSession::new(
        SessionConfig::new(GameConfig::new(9)),
        Stubborn(point),
        Stubborn(point),
    );
    let outcome = session.run();

    // Black plays, white is refused, black is refused.
    assert_eq!(outcome.reason, EndReason::Passes);
    assert_eq!(outcome.moves_played, 3);
    assert_eq!(outcome.rejected, 2);
    assert_eq!(outcome.score.winner(), Some(Color::Black));

    let history = session.into_game().move_history();
    assert_eq!(history[&1].black.as_deref(), Some("E5"));
    assert_eq!(history[&1].white.as_deref(), Some("PASS"));
    assert_eq!(history[&2].black.as_deref(), Some("PASS"));
}
