/// Conversions between the original Glicko scale and the internal Glicko-2
/// scale, per steps 2 and 8 of Glickman's paper.
///
/// The scalar functions form exact inverse pairs. Bulk conversion from the
/// Glicko scale requires supplying a volatility, since the original system
/// has no such concept.
use crate::constants::{GLICKO2_DEFAULT_PLAYER_VOLATILITY, GLICKO2_SCALE_FACTOR};
use crate::types::{Glicko2Rating, GlickoRating};

/// Rating from the Glicko scale (centered at 1500) to the Glicko-2 scale
/// (centered at 0).
pub fn glicko_rating_to_glicko2(rating: f64) -> f64 {
    (rating - 1500.0) / GLICKO2_SCALE_FACTOR
}

/// Rating from the Glicko-2 scale back to the Glicko scale.
pub fn glicko2_rating_to_glicko(rating: f64) -> f64 {
    rating * GLICKO2_SCALE_FACTOR + 1500.0
}

/// Deviation from the Glicko scale to the Glicko-2 scale.
pub fn glicko_deviation_to_glicko2(deviation: f64) -> f64 {
    deviation / GLICKO2_SCALE_FACTOR
}

/// Deviation from the Glicko-2 scale back to the Glicko scale.
pub fn glicko2_deviation_to_glicko(deviation: f64) -> f64 {
    deviation * GLICKO2_SCALE_FACTOR
}

/// Convert a whole Glicko-scale state onto the Glicko-2 scale, supplying the
/// volatility the original scale lacks.
pub fn to_glicko2(player: GlickoRating, volatility: f64) -> Glicko2Rating {
    Glicko2Rating {
        rating: glicko_rating_to_glicko2(player.rating),
        deviation: glicko_deviation_to_glicko2(player.deviation),
        volatility,
    }
}

/// [`to_glicko2`] with the default volatility of an unrated player.
pub fn to_glicko2_with_default_volatility(player: GlickoRating) -> Glicko2Rating {
    to_glicko2(player, GLICKO2_DEFAULT_PLAYER_VOLATILITY)
}

/// Convert a Glicko-2 state back onto the original Glicko scale, dropping
/// the volatility.
pub fn to_glicko(player: Glicko2Rating) -> GlickoRating {
    GlickoRating {
        rating: glicko2_rating_to_glicko(player.rating),
        deviation: glicko2_deviation_to_glicko(player.deviation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrated_player_maps_to_origin() {
        assert_eq!(glicko_rating_to_glicko2(1500.0), 0.0);
        assert_eq!(glicko2_rating_to_glicko(0.0), 1500.0);
    }

    #[test]
    fn test_known_conversions_from_worked_example() {
        // Opponent values from the example in Glickman's paper.
        assert!((glicko_rating_to_glicko2(1400.0) - (-0.5756)).abs() < 1e-4);
        assert!((glicko_rating_to_glicko2(1550.0) - 0.2878).abs() < 1e-4);
        assert!((glicko_rating_to_glicko2(1700.0) - 1.1513).abs() < 1e-4);
        assert!((glicko_deviation_to_glicko2(30.0) - 0.1727).abs() < 1e-4);
        assert!((glicko_deviation_to_glicko2(100.0) - 0.5756).abs() < 1e-4);
        assert!((glicko_deviation_to_glicko2(300.0) - 1.7269).abs() < 1e-4);
    }

    #[test]
    fn test_round_trips_are_exact_inverses() {
        for rating in [0.0, 812.5, 1500.0, 1893.25, 2700.0] {
            let round_trip = glicko2_rating_to_glicko(glicko_rating_to_glicko2(rating));
            assert!((round_trip - rating).abs() < 1e-9, "rating {rating} round-tripped to {round_trip}");
        }
        for deviation in [0.0, 30.0, 200.0, 350.0] {
            let round_trip = glicko2_deviation_to_glicko(glicko_deviation_to_glicko2(deviation));
            assert!((round_trip - deviation).abs() < 1e-9, "deviation {deviation} round-tripped to {round_trip}");
        }
    }

    #[test]
    fn test_bulk_conversion_preserves_volatility() {
        let glicko = GlickoRating { rating: 1350.0, deviation: 120.0 };

        let explicit = to_glicko2(glicko, 0.09);
        assert_eq!(explicit.volatility, 0.09);

        let defaulted = to_glicko2_with_default_volatility(glicko);
        assert_eq!(defaulted.volatility, GLICKO2_DEFAULT_PLAYER_VOLATILITY);
        assert_eq!(explicit.rating, defaulted.rating);
        assert_eq!(explicit.deviation, defaulted.deviation);

        let back = to_glicko(explicit);
        assert!((back.rating - glicko.rating).abs() < 1e-9);
        assert!((back.deviation - glicko.deviation).abs() < 1e-9);
    }
}
