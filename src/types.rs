use crate::constants::{
    GLICKO2_DEFAULT_CONVERGENCE_TOLERANCE, GLICKO2_DEFAULT_PLAYER_VOLATILITY,
    GLICKO2_DEFAULT_SYSTEM_CONSTANT, GLICKO_DEFAULT_PLAYER_DEVIATION,
    GLICKO_DEFAULT_PLAYER_RATING,
};
use crate::scale;

/// A player's state on the original Glicko scale.
///
/// Kept as a distinct type from [`Glicko2Rating`] so a legacy state cannot
/// reach the core update without an explicit conversion supplying a
/// volatility, which has no Glicko-scale equivalent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlickoRating {
    /// Rating, nominally centered at 1500.
    pub rating: f64,
    /// Rating deviation, in Glicko (Elo-like) units.
    pub deviation: f64,
}

impl GlickoRating {
    /// State for a previously unrated player, per step 1 of Glickman's paper.
    pub fn unrated() -> Self {
        GlickoRating {
            rating: GLICKO_DEFAULT_PLAYER_RATING,
            deviation: GLICKO_DEFAULT_PLAYER_DEVIATION,
        }
    }

    /// Convert onto the internal Glicko-2 scale with an explicit volatility.
    pub fn to_glicko2(self, volatility: f64) -> Glicko2Rating {
        scale::to_glicko2(self, volatility)
    }

    /// Convert onto the internal Glicko-2 scale with the default volatility
    /// of an unrated player.
    pub fn to_glicko2_with_default_volatility(self) -> Glicko2Rating {
        scale::to_glicko2_with_default_volatility(self)
    }
}

/// A player's state on the internal Glicko-2 scale.
///
/// This is the representation the whole algorithm works in: rating centered
/// at 0, deviation divided by the scale factor, plus the volatility that
/// Glicko-2 adds over the original system.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Glicko2Rating {
    /// Rating, nominally centered at 0.
    pub rating: f64,
    /// Rating deviation on the Glicko-2 scale.
    pub deviation: f64,
    /// Expected fluctuation in the player's skill.
    pub volatility: f64,
}

impl Glicko2Rating {
    /// State for a previously unrated player, per step 1 of Glickman's paper.
    pub fn unrated() -> Self {
        GlickoRating::unrated().to_glicko2(GLICKO2_DEFAULT_PLAYER_VOLATILITY)
    }

    /// Convert back onto the original Glicko scale. Drops the volatility,
    /// which has no Glicko-scale equivalent.
    pub fn to_glicko(self) -> GlickoRating {
        scale::to_glicko(self)
    }
}

/// Tunable constants of the rating algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlgorithmSettings {
    /// The system constant `τ`, limiting how fast volatility may change.
    /// Glickman recommends values between 0.3 and 1.2.
    pub system_constant: f64,
    /// Cutoff for the volatility convergence loop in step 5.
    pub convergence_tolerance: f64,
}

impl Default for AlgorithmSettings {
    fn default() -> Self {
        AlgorithmSettings {
            system_constant: GLICKO2_DEFAULT_SYSTEM_CONSTANT,
            convergence_tolerance: GLICKO2_DEFAULT_CONVERGENCE_TOLERANCE,
        }
    }
}

/// A single game between two players identified by caller-provided IDs.
///
/// `result` is from the perspective of `player1`: 1 is a win for `player1`,
/// 0 a loss, 0.5 a draw.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Match {
    /// ID of the first player.
    pub player1: i64,
    /// ID of the second player.
    pub player2: i64,
    /// Game outcome for `player1`: one of the `GAME_OUTCOME_*` constants.
    pub result: f64,
}

/// One side's view of a game: the opponent's pre-period state and the
/// outcome from the viewing player's perspective.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerMatch {
    /// The opponent's state going into the period.
    pub opponent: Glicko2Rating,
    /// Game outcome for the viewing player.
    pub result: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GLICKO2_SCALE_FACTOR;

    #[test]
    fn test_unrated_player_matches_on_both_scales() {
        let glicko = GlickoRating::unrated();
        assert_eq!(glicko.rating, 1500.0);
        assert_eq!(glicko.deviation, 350.0);

        let glicko2 = Glicko2Rating::unrated();
        assert_eq!(glicko2.rating, 0.0);
        assert_eq!(glicko2.deviation, 350.0 / GLICKO2_SCALE_FACTOR);
        assert_eq!(glicko2.volatility, GLICKO2_DEFAULT_PLAYER_VOLATILITY);
    }

    #[test]
    fn test_default_settings() {
        let settings = AlgorithmSettings::default();
        assert_eq!(settings.system_constant, 0.5);
        assert_eq!(settings.convergence_tolerance, 1e-6);
    }
}
