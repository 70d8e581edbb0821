use thiserror::Error;

/// Errors surfaced by rating calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The three parallel opponent arrays passed to
    /// [`crate::update_rating_from_parts`] disagree on length.
    #[error("opponent ratings ({ratings}), deviations ({deviations}) and game outcomes ({outcomes}) must all have the same length")]
    MismatchedMatchData {
        ratings: usize,
        deviations: usize,
        outcomes: usize,
    },

    /// A match referenced a player ID that is not in the player map.
    #[error("match references unknown player ID {0}")]
    UnknownPlayer(i64),

    /// The volatility root-finder hit the iteration cap without the bracket
    /// shrinking below the convergence tolerance.
    #[error("volatility calculation did not converge within {0} iterations")]
    NonConvergence(usize),
}
