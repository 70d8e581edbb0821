/// Rating-period calculation over a keyed population of players.
///
/// Groups a flat list of games into per-player views — including the
/// mirrored view for each game's second player — and applies the core
/// update once per player. Players are identified by caller-provided
/// `i64` IDs.
use std::collections::HashMap;

use crate::error::Error;
use crate::types::{AlgorithmSettings, Glicko2Rating, Match, PlayerMatch};
use crate::update::update_rating;

/// Applies one rating period to a population of players.
///
/// Holds the algorithm settings so repeated periods run with the same
/// constants.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeriodCalculator {
    settings: AlgorithmSettings,
}

impl PeriodCalculator {
    pub fn new(settings: AlgorithmSettings) -> Self {
        PeriodCalculator { settings }
    }

    /// Calculator with the defaults recommended in Glickman's paper
    /// (τ = 0.5, convergence tolerance 1e-6).
    pub fn with_default_settings() -> Self {
        PeriodCalculator::new(AlgorithmSettings::default())
    }

    pub fn settings(&self) -> &AlgorithmSettings {
        &self.settings
    }

    /// Compute post-period states for every player in `players`.
    ///
    /// Every update sees the pre-period snapshot of each opponent, never
    /// another player's freshly computed state, so the result is independent
    /// of iteration order. Players appearing in no match get the no-play
    /// deviation growth. A match naming an ID absent from `players` fails
    /// the whole period; no partial output is returned.
    pub fn calculate(
        &self,
        players: &HashMap<i64, Glicko2Rating>,
        matches: &[Match],
    ) -> Result<HashMap<i64, Glicko2Rating>, Error> {
        // Faster than scanning the full match list once per player.
        let mut match_lists: HashMap<i64, Vec<PlayerMatch>> = HashMap::new();

        for game in matches {
            let player1 = *players
                .get(&game.player1)
                .ok_or(Error::UnknownPlayer(game.player1))?;
            let player2 = *players
                .get(&game.player2)
                .ok_or(Error::UnknownPlayer(game.player2))?;

            match_lists
                .entry(game.player1)
                .or_default()
                .push(PlayerMatch { opponent: player2, result: game.result });

            // The same game seen from the other side: player 1 winning
            // against player 2 is player 2 losing against player 1.
            match_lists
                .entry(game.player2)
                .or_default()
                .push(PlayerMatch { opponent: player1, result: 1.0 - game.result });
        }

        let mut updated_players = HashMap::with_capacity(players.len());
        for (&id, player) in players {
            let played = match_lists.get(&id).map(Vec::as_slice).unwrap_or(&[]);
            updated_players.insert(id, update_rating(player, played, &self.settings)?);
        }

        Ok(updated_players)
    }
}

impl Default for PeriodCalculator {
    fn default() -> Self {
        PeriodCalculator::with_default_settings()
    }
}
