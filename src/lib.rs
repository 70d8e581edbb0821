/// glicko2-core: Pure-computation Glicko-2 rating engine.
///
/// Pairwise game outcomes → per-period rating updates with deviation and
/// volatility tracking, as described in Mark Glickman's paper
/// (<https://www.glicko.net/glicko/glicko2.pdf>).
/// No IO, no HTTP, no filesystem — just math. Bring your own match history.
///
/// Players are identified by caller-provided `i64` IDs. All computation
/// happens on the internal Glicko-2 scale (`Glicko2Rating`); conversions to
/// and from the original Glicko scale (`GlickoRating`, centered at 1500)
/// live in the `scale` module.
///
/// # Quick start
///
/// ```rust
/// use std::collections::HashMap;
///
/// use glicko2_core::{Glicko2Rating, Match, PeriodCalculator, GAME_OUTCOME_WIN};
///
/// let players = HashMap::from([
///     (100, Glicko2Rating::unrated()), // your IDs — any i64 values
///     (200, Glicko2Rating::unrated()),
/// ]);
///
/// let matches = vec![
///     Match { player1: 100, player2: 200, result: GAME_OUTCOME_WIN },
/// ];
///
/// let calculator = PeriodCalculator::with_default_settings();
/// let updated = calculator.calculate(&players, &matches).unwrap();
///
/// assert!(updated[&100].rating > updated[&200].rating);
/// println!("winner: {:.0}", updated[&100].to_glicko().rating);
/// ```

pub mod constants;
pub mod error;
pub mod period;
pub mod scale;
pub mod types;
pub mod update;

// Re-export primary public API at crate root.
pub use constants::{
    GAME_OUTCOME_DRAW, GAME_OUTCOME_LOSS, GAME_OUTCOME_WIN,
    GLICKO2_DEFAULT_CONVERGENCE_TOLERANCE, GLICKO2_DEFAULT_PLAYER_VOLATILITY,
    GLICKO2_DEFAULT_SYSTEM_CONSTANT, GLICKO2_HIGH_SYSTEM_CONSTANT,
    GLICKO2_LOW_SYSTEM_CONSTANT, GLICKO2_SCALE_FACTOR, GLICKO_DEFAULT_PLAYER_DEVIATION,
    GLICKO_DEFAULT_PLAYER_RATING,
};
pub use error::Error;
pub use period::PeriodCalculator;
pub use scale::{
    glicko2_deviation_to_glicko, glicko2_rating_to_glicko, glicko_deviation_to_glicko2,
    glicko_rating_to_glicko2, to_glicko, to_glicko2, to_glicko2_with_default_volatility,
};
pub use types::{AlgorithmSettings, Glicko2Rating, GlickoRating, Match, PlayerMatch};
pub use update::{update_rating, update_rating_from_parts};
