/// Ratio between the original Glicko scale and the internal Glicko-2 scale,
/// as defined in steps 2 and 8 of Glickman's paper. A Glicko rating of 1500
/// maps to a Glicko-2 rating of 0.
pub const GLICKO2_SCALE_FACTOR: f64 = 173.7178;

/// Outcome of a won game, from the perspective of the first player.
pub const GAME_OUTCOME_WIN: f64 = 1.0;
/// Outcome of a drawn game.
pub const GAME_OUTCOME_DRAW: f64 = 0.5;
/// Outcome of a lost game, from the perspective of the first player.
pub const GAME_OUTCOME_LOSS: f64 = 0.0;

/// Default rating for a player that has not been previously rated,
/// as described in step 1.
pub const GLICKO_DEFAULT_PLAYER_RATING: f64 = 1500.0;

/// Default rating deviation for a player that has not been previously rated,
/// as described in step 1. Represents the width of ratings the system is 99%
/// sure the player's skill lies within.
pub const GLICKO_DEFAULT_PLAYER_DEVIATION: f64 = 350.0;

/// Default volatility for a player that has not been previously rated,
/// as described in step 1. Represents the consistency of the player's
/// performance.
pub const GLICKO2_DEFAULT_PLAYER_VOLATILITY: f64 = 0.06;

/// Lower bound of the reasonable range for the system constant `τ`
/// recommended by Glickman. Smaller values keep volatility more stable.
pub const GLICKO2_LOW_SYSTEM_CONSTANT: f64 = 0.3;

/// Default system constant `τ`, in the middle of the recommended range.
/// Applications with very volatile populations may want to tune this.
pub const GLICKO2_DEFAULT_SYSTEM_CONSTANT: f64 = 0.5;

/// Upper bound of the reasonable range for the system constant `τ`.
pub const GLICKO2_HIGH_SYSTEM_CONSTANT: f64 = 1.2;

/// Cutoff for the volatility convergence loop in step 5. Iteration stops
/// once the bracket around the root is narrower than this.
pub const GLICKO2_DEFAULT_CONVERGENCE_TOLERANCE: f64 = 0.000001;

/// Safety cap on volatility root-finding iterations. Glickman's paper gives
/// no bound; the bracket shrinks every iteration so well-formed inputs
/// converge in a handful of steps, and hitting this cap is surfaced as
/// [`crate::Error::NonConvergence`] rather than looping forever.
pub const MAX_VOLATILITY_ITERATIONS: usize = 1000;
