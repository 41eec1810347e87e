//! Strict, weak and mixed-strategy dominance.
//!
//! Pure dominance compares every ordered pair of a player's strategies
//! against every opponent strategy. It is a single pass: nothing is removed
//! between comparisons.
//!
//! Weak dominance uses `>=` everywhere without asking for a strict gain
//! anywhere, so two payoff-identical strategies weakly dominate each other.
//!
//! Mixed dominance is a grid scan, not an exact solver. It only covers a
//! player with exactly three strategies: each one in turn is tested against
//! mixtures `p` / `1 - p` of the other two, with `p` ascending over the grid,
//! and the first mixture that beats it by more than epsilon against every
//! opponent strategy is reported.

use serde::{Deserialize, Serialize};

use super::config::AnalysisConfig;
use super::payoff::{expected_payoff_vs_pure, pure_distribution};
use super::view::BimatrixView;
use crate::error::Result;
use crate::extensive::NormalFormGame;

/// Dominated strategies per player, each list in the player's strategy order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DominatedStrategies {
    /// Player names.
    pub players: [String; 2],
    /// Dominated strategy labels, indexed like `players`.
    pub dominated: [Vec<String>; 2],
}

impl DominatedStrategies {
    fn none(view: &BimatrixView) -> Self {
        Self {
            players: view.players().clone(),
            dominated: [Vec::new(), Vec::new()],
        }
    }

    fn from_flags(view: &BimatrixView, flags: &[Vec<bool>; 2]) -> Self {
        let mut out = Self::none(view);
        for player in 0..2 {
            out.dominated[player] = view
                .strategies(player)
                .iter()
                .zip(&flags[player])
                .filter(|(_, &flagged)| flagged)
                .map(|(label, _)| label.clone())
                .collect();
        }
        out
    }

    /// Dominated strategies of player `player` (0 or 1).
    pub fn for_player(&self, player: usize) -> &[String] {
        &self.dominated[player]
    }

    /// Dominated strategies of the player with this name.
    pub fn by_name(&self, name: &str) -> Option<&[String]> {
        self.players
            .iter()
            .position(|p| p == name)
            .map(|i| self.dominated[i].as_slice())
    }

    /// True if `label` is dominated for `player`.
    pub fn contains(&self, player: usize, label: &str) -> bool {
        self.dominated[player].iter().any(|s| s == label)
    }

    /// True if no strategy of either player is dominated.
    pub fn is_empty(&self) -> bool {
        self.dominated.iter().all(Vec::is_empty)
    }
}

/// A mixture found to dominate a pure strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixedWitness {
    /// The player owning both strategies.
    pub player: String,
    /// The dominated pure strategy.
    pub dominated: String,
    /// The dominating mixture over the player's strategies.
    pub mixture: Vec<f64>,
    /// The grid probability at which the scan succeeded.
    pub probability: f64,
}

/// Result of a mixed dominance search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixedDominance {
    /// One witness per dominated strategy, in scan order.
    pub witnesses: Vec<MixedWitness>,
    /// The same findings as per-player sets.
    pub dominated: DominatedStrategies,
}

/// Strategies beaten strictly against every opponent strategy by another pure strategy.
pub fn strict_dominance(game: &NormalFormGame, players: &[String]) -> Result<DominatedStrategies> {
    let view = BimatrixView::new(game, players)?;
    pure_dominance(&view, |a, b| a > b)
}

/// Strategies matched or beaten against every opponent strategy by another pure strategy.
pub fn weak_dominance(game: &NormalFormGame, players: &[String]) -> Result<DominatedStrategies> {
    let view = BimatrixView::new(game, players)?;
    pure_dominance(&view, |a, b| a >= b)
}

pub(crate) fn pure_dominance<F>(view: &BimatrixView, beats: F) -> Result<DominatedStrategies>
where
    F: Fn(f64, f64) -> bool,
{
    let mut flags = [
        vec![false; view.strategies(0).len()],
        vec![false; view.strategies(1).len()],
    ];

    for player in 0..2 {
        let own = view.strategies(player).len();
        let opponent = view.strategies(1 - player).len();

        for i in 0..own {
            for j in 0..own {
                if i == j || flags[player][j] {
                    continue;
                }
                let mut dominates = true;
                for k in 0..opponent {
                    if !beats(view.utility(player, i, k)?, view.utility(player, j, k)?) {
                        dominates = false;
                        break;
                    }
                }
                if dominates {
                    flags[player][j] = true;
                }
            }
        }
    }

    Ok(DominatedStrategies::from_flags(view, &flags))
}

/// Mixed dominance for 3 x 3 games.
///
/// Both players are searched. Any other shape yields empty results.
pub fn mixed_strategy_dominance_3x3(
    game: &NormalFormGame,
    players: &[String],
    config: &AnalysisConfig,
) -> Result<MixedDominance> {
    let view = BimatrixView::new(game, players)?;
    let searched: &[usize] = match view.shape() {
        (3, 3) => &[0, 1],
        _ => &[],
    };
    mixed_search(&view, searched, config)
}

/// Mixed dominance for 3 x 2 and 2 x 3 games.
///
/// Only the player with three strategies is searched; a two-strategy player
/// has no mixture of "the other two". Any other shape yields empty results.
pub fn mixed_strategy_dominance_3x2(
    game: &NormalFormGame,
    players: &[String],
    config: &AnalysisConfig,
) -> Result<MixedDominance> {
    let view = BimatrixView::new(game, players)?;
    let searched: &[usize] = match view.shape() {
        (3, 2) => &[0],
        (2, 3) => &[1],
        _ => &[],
    };
    mixed_search(&view, searched, config)
}

/// Pick the mixed dominance variant that fits the game's shape.
pub fn mixed_strategy_dominance(
    game: &NormalFormGame,
    players: &[String],
    config: &AnalysisConfig,
) -> Result<MixedDominance> {
    let view = BimatrixView::new(game, players)?;
    match view.shape() {
        (3, 3) => mixed_search(&view, &[0, 1], config),
        (3, 2) => mixed_search(&view, &[0], config),
        (2, 3) => mixed_search(&view, &[1], config),
        (rows, columns) => {
            log::debug!("mixed dominance skipped for {}x{} game", rows, columns);
            mixed_search(&view, &[], config)
        }
    }
}

fn mixed_search(
    view: &BimatrixView,
    searched: &[usize],
    config: &AnalysisConfig,
) -> Result<MixedDominance> {
    let mut result = MixedDominance {
        witnesses: Vec::new(),
        dominated: DominatedStrategies::none(view),
    };
    if searched.is_empty() {
        return Ok(result);
    }

    let matrix = view.row_major()?;

    for &player in searched {
        let opponent_count = view.strategies(1 - player).len();
        let value = |own: &[f64], k: usize| {
            expected_payoff_vs_pure(&matrix, player, own, k, opponent_count)
        };

        // Targets C, B, A; the mixture splits p / 1 - p over the other two.
        for target in (0..3).rev() {
            let (a, b) = match target {
                0 => (1, 2),
                1 => (0, 2),
                _ => (0, 1),
            };

            let target_values = (0..opponent_count)
                .map(|k| value(&pure_distribution(target, 3), k))
                .collect::<Result<Vec<f64>>>()?;

            for p in config.grid() {
                let mut mixture = vec![0.0; 3];
                mixture[a] = p;
                mixture[b] = 1.0 - p;

                let mut dominates = true;
                for (k, &target_value) in target_values.iter().enumerate() {
                    if value(&mixture, k)? <= target_value + config.epsilon {
                        dominates = false;
                        break;
                    }
                }

                if dominates {
                    let label = view.strategies(player)[target].clone();
                    log::info!(
                        "{} is dominated by the mixed strategy: {:?} (p={:.4})",
                        label,
                        mixture,
                        p
                    );
                    result.dominated.dominated[player].push(label.clone());
                    result.witnesses.push(MixedWitness {
                        player: view.player(player).to_string(),
                        dominated: label,
                        mixture,
                        probability: p,
                    });
                    break;
                }
            }
        }
    }

    // Report the per-player sets in strategy order, like the pure variants.
    for player in 0..2 {
        let order = view.strategies(player);
        result.dominated.dominated[player]
            .sort_by_key(|label| order.iter().position(|s| s == label));
    }

    Ok(result)
}
