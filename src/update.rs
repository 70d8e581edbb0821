/// Core per-period player update.
///
/// Implements steps 3 through 7 of Glickman's paper on the internal
/// Glicko-2 scale: outcome variance, estimated improvement, the iterative
/// volatility calculation, and the final deviation and rating updates.
/// See <https://www.glicko.net/glicko/glicko2.pdf>.
use crate::constants::MAX_VOLATILITY_ITERATIONS;
use crate::error::Error;
use crate::types::{AlgorithmSettings, Glicko2Rating, PlayerMatch};

const PI_SQUARED: f64 = std::f64::consts::PI * std::f64::consts::PI;

/// `g(φ)` from step 3. Dampens an opponent's influence on the update by the
/// uncertainty of their own rating.
fn g(deviation: f64) -> f64 {
    1.0 / (1.0 + 3.0 * deviation * deviation / PI_SQUARED).sqrt()
}

/// `E(µ, µj, φj)` from step 3. Expected score against a single opponent.
fn expected_score(rating: f64, opponent_rating: f64, opponent_deviation: f64) -> f64 {
    1.0 / (1.0 + (-g(opponent_deviation) * (rating - opponent_rating)).exp())
}

/// Estimated variance `v` of the player's rating from game outcomes alone.
/// The entirety of step 3.
fn variance(rating: f64, opponent_ratings: &[f64], opponent_deviations: &[f64]) -> f64 {
    let mut sum = 0.0;
    for (&opponent_rating, &opponent_deviation) in opponent_ratings.iter().zip(opponent_deviations)
    {
        let g_j = g(opponent_deviation);
        let e_j = expected_score(rating, opponent_rating, opponent_deviation);
        sum += g_j * g_j * e_j * (1.0 - e_j);
    }
    1.0 / sum
}

/// The outcome-weighted sum `Σ g(φj)·(sj − E(µ, µj, φj))` shared by the
/// improvement estimate of step 4 and the rating update of step 7.
fn outcome_sum(
    rating: f64,
    opponent_ratings: &[f64],
    opponent_deviations: &[f64],
    outcomes: &[f64],
) -> f64 {
    let mut sum = 0.0;
    for i in 0..opponent_ratings.len() {
        sum += g(opponent_deviations[i])
            * (outcomes[i] - expected_score(rating, opponent_ratings[i], opponent_deviations[i]));
    }
    sum
}

/// `f(x)` from step 5.1. The new volatility is `exp(x*/2)` for the root `x*`.
fn volatility_f(
    x: f64,
    a: f64,
    delta_squared: f64,
    deviation_squared: f64,
    variance: f64,
    system_constant: f64,
) -> f64 {
    let e_x = x.exp();
    let total = deviation_squared + variance + e_x;

    e_x * (delta_squared - deviation_squared - variance - e_x) / (2.0 * total * total)
        - (x - a) / (system_constant * system_constant)
}

/// Post-period volatility `σ′` via step 5's modified regula falsi.
///
/// The Illinois modification (halving the retained endpoint's value when the
/// bracket does not flip) keeps one side from going stale, which the plain
/// method is prone to on this objective. The `<= 0` tie-break retargets the
/// bracket even when the candidate lands exactly on the root.
fn new_volatility(
    volatility: f64,
    delta: f64,
    deviation: f64,
    variance: f64,
    settings: &AlgorithmSettings,
) -> Result<f64, Error> {
    let tau = settings.system_constant;
    let a = (volatility * volatility).ln();
    let delta_squared = delta * delta;
    let deviation_squared = deviation * deviation;
    let f = |x: f64| volatility_f(x, a, delta_squared, deviation_squared, variance, tau);

    // Initial bracket, step 5.2. When the improvement cannot explain the
    // spread on its own, walk downward in steps of τ until f turns positive.
    let mut bracket_a = a;
    let mut bracket_b = if delta_squared > deviation_squared + variance {
        (delta_squared - deviation_squared - variance).ln()
    } else {
        let mut k = 1.0;
        while f(a - k * tau) < 0.0 {
            k += 1.0;
        }
        a - k * tau
    };

    let mut f_a = f(bracket_a);
    let mut f_b = f(bracket_b);

    let mut iterations = 0;
    while (bracket_b - bracket_a).abs() > settings.convergence_tolerance {
        if iterations >= MAX_VOLATILITY_ITERATIONS {
            return Err(Error::NonConvergence(MAX_VOLATILITY_ITERATIONS));
        }
        iterations += 1;

        let candidate = bracket_a + (bracket_a - bracket_b) * f_a / (f_b - f_a);
        let f_candidate = f(candidate);

        if f_candidate * f_b <= 0.0 {
            bracket_a = bracket_b;
            f_a = f_b;
        } else {
            f_a /= 2.0;
        }

        bracket_b = candidate;
        f_b = f_candidate;
    }

    Ok((bracket_a / 2.0).exp())
}

/// `φ*` from step 6: the deviation grown by volatility alone. Also the
/// post-period deviation of a player with no games in the period.
fn pre_rating_deviation(deviation: f64, volatility: f64) -> f64 {
    (deviation * deviation + volatility * volatility).sqrt()
}

/// Update a player from raw parallel arrays of per-opponent data.
///
/// All values are on the internal Glicko-2 scale. The three arrays describe
/// one game each and must have the same length. An empty set of games means
/// the player sat the period out: the rating and volatility are unchanged
/// and the deviation grows by `√(φ² + σ²)`.
pub fn update_rating_from_parts(
    rating: f64,
    deviation: f64,
    volatility: f64,
    opponent_ratings: &[f64],
    opponent_deviations: &[f64],
    outcomes: &[f64],
    settings: &AlgorithmSettings,
) -> Result<Glicko2Rating, Error> {
    if opponent_ratings.len() != opponent_deviations.len()
        || opponent_ratings.len() != outcomes.len()
    {
        return Err(Error::MismatchedMatchData {
            ratings: opponent_ratings.len(),
            deviations: opponent_deviations.len(),
            outcomes: outcomes.len(),
        });
    }

    if outcomes.is_empty() {
        return Ok(Glicko2Rating {
            rating,
            deviation: pre_rating_deviation(deviation, volatility),
            volatility,
        });
    }

    let variance = variance(rating, opponent_ratings, opponent_deviations);
    let outcome_sum = outcome_sum(rating, opponent_ratings, opponent_deviations, outcomes);
    let delta = variance * outcome_sum;

    let new_volatility = new_volatility(volatility, delta, deviation, variance, settings)?;

    let pre_deviation = pre_rating_deviation(deviation, new_volatility);
    let new_deviation = 1.0 / (1.0 / (pre_deviation * pre_deviation) + 1.0 / variance).sqrt();
    let new_rating = rating + new_deviation * new_deviation * outcome_sum;

    Ok(Glicko2Rating {
        rating: new_rating,
        deviation: new_deviation,
        volatility: new_volatility,
    })
}

/// Update a player from per-game records instead of parallel arrays.
///
/// Equivalent to [`update_rating_from_parts`]; the record shape cannot
/// produce a length mismatch.
pub fn update_rating(
    player: &Glicko2Rating,
    matches: &[PlayerMatch],
    settings: &AlgorithmSettings,
) -> Result<Glicko2Rating, Error> {
    let mut opponent_ratings = Vec::with_capacity(matches.len());
    let mut opponent_deviations = Vec::with_capacity(matches.len());
    let mut outcomes = Vec::with_capacity(matches.len());

    for game in matches {
        opponent_ratings.push(game.opponent.rating);
        opponent_deviations.push(game.opponent.deviation);
        outcomes.push(game.result);
    }

    update_rating_from_parts(
        player.rating,
        player.deviation,
        player.volatility,
        &opponent_ratings,
        &opponent_deviations,
        &outcomes,
        settings,
    )
}
