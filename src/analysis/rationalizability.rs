//! Iterated elimination.
//!
//! Two procedures share one loop. [`rationalizability`] removes strategies
//! that are never a best response to any remaining opponent strategy;
//! [`iterated_strict_dominance`] removes strategies strictly dominated by
//! another remaining pure strategy. Each round works on the game left by the
//! previous one and removes every flagged strategy of both players at once.
//! The loop stops at a fixed point, when nothing is left, or after
//! [`AnalysisConfig::max_elimination_rounds`].

use serde::{Deserialize, Serialize};

use super::best_response::best_responses_in_view;
use super::config::AnalysisConfig;
use super::dominance::pure_dominance;
use super::view::BimatrixView;
use crate::error::Result;
use crate::extensive::NormalFormGame;

/// Strategies removed in one round, per player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EliminationRound {
    /// 1-based round number.
    pub round: usize,
    /// Removed strategy labels, indexed like the players.
    pub removed: [Vec<String>; 2],
}

/// Outcome of an iterated elimination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Elimination {
    /// Player names.
    pub players: [String; 2],
    /// Surviving strategies per player, first-seen order.
    pub surviving: [Vec<String>; 2],
    /// What each round removed.
    pub rounds: Vec<EliminationRound>,
    /// The game restricted to surviving profiles.
    pub reduced: NormalFormGame,
}

impl Elimination {
    /// Surviving strategies of `player` (0 or 1).
    pub fn survivors(&self, player: usize) -> &[String] {
        &self.surviving[player]
    }

    /// True if no profile survived.
    pub fn is_empty(&self) -> bool {
        self.reduced.is_empty()
    }
}

/// Iterated elimination of never-best-response strategies.
///
/// Also serves as `rationalizability_2x2`: a 2x2 game with one information
/// set per player is just the smallest shape this accepts.
///
/// An empty result is a valid outcome meaning no profile survives.
#[doc(alias = "rationalizability_2x2")]
pub fn rationalizability(
    game: &NormalFormGame,
    players: &[String],
    config: &AnalysisConfig,
) -> Result<Elimination> {
    eliminate(game, players, config, |view| {
        let best = best_responses_in_view(view)?;
        let mut removed = [Vec::new(), Vec::new()];
        for player in 0..2 {
            let ever = best[player].ever_best();
            removed[player] = view
                .strategies(player)
                .iter()
                .filter(|s| !ever.contains(&s.as_str()))
                .cloned()
                .collect();
        }
        Ok(removed)
    })
}

/// Iterated elimination of strictly dominated strategies (IESDS).
pub fn iterated_strict_dominance(
    game: &NormalFormGame,
    players: &[String],
    config: &AnalysisConfig,
) -> Result<Elimination> {
    eliminate(game, players, config, |view| {
        Ok(pure_dominance(view, |a, b| a > b)?.dominated)
    })
}

fn eliminate<F>(
    game: &NormalFormGame,
    players: &[String],
    config: &AnalysisConfig,
    mut flag: F,
) -> Result<Elimination>
where
    F: FnMut(&BimatrixView) -> Result<[Vec<String>; 2]>,
{
    let mut current = game.clone();
    let mut rounds: Vec<EliminationRound> = Vec::new();

    let names = loop {
        let view = BimatrixView::new(&current, players)?;
        if current.is_empty() {
            break view.players().clone();
        }
        if let Some(max) = config.max_elimination_rounds {
            if rounds.len() >= max {
                break view.players().clone();
            }
        }

        let removed = flag(&view)?;
        if removed.iter().all(Vec::is_empty) {
            break view.players().clone();
        }

        let round = rounds.len() + 1;
        log::trace!(
            "round {}: {} removes {:?}, {} removes {:?}",
            round,
            view.player(0),
            removed[0],
            view.player(1),
            removed[1]
        );

        current = current.retain(|profile| {
            let labels = profile.labels();
            !removed[0].contains(&labels[0]) && !removed[1].contains(&labels[1])
        });
        rounds.push(EliminationRound { round, removed });
    };

    log::debug!(
        "elimination finished after {} round(s), {} profile(s) left",
        rounds.len(),
        current.len()
    );

    Ok(Elimination {
        players: names,
        surviving: [current.strategy_labels(0), current.strategy_labels(1)],
        rounds,
        reduced: current,
    })
}
