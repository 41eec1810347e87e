//! Best responses and pure Nash equilibria.

use serde::{Deserialize, Serialize};

use super::view::BimatrixView;
use crate::error::Result;
use crate::extensive::{NormalFormGame, Payoffs, StrategyProfile};

/// One player's best responses, keyed by opponent strategy.
///
/// Opponent strategies appear in first-seen order; each best-response list
/// keeps every strategy tied at the maximum, in the player's own strategy
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestResponses {
    /// The responding player.
    pub player: String,
    /// `(opponent strategy, best own strategies)` pairs.
    pub responses: Vec<(String, Vec<String>)>,
}

impl BestResponses {
    /// Best responses to `opponent`, if that strategy occurs in the game.
    pub fn get(&self, opponent: &str) -> Option<&[String]> {
        self.responses
            .iter()
            .find(|(o, _)| o == opponent)
            .map(|(_, best)| best.as_slice())
    }

    /// True if `own` is a best response to `opponent`.
    pub fn is_best(&self, opponent: &str, own: &str) -> bool {
        self.get(opponent)
            .map_or(false, |best| best.iter().any(|s| s == own))
    }

    /// Own strategies that are a best response to at least one opponent strategy.
    pub fn ever_best(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for (_, best) in &self.responses {
            for s in best {
                if !out.contains(&s.as_str()) {
                    out.push(s);
                }
            }
        }
        out
    }

    /// Iterate `(opponent, best responses)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.responses
            .iter()
            .map(|(o, best)| (o.as_str(), best.as_slice()))
    }
}

/// A profile in which both strategies are mutual best responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NashEquilibrium {
    /// Position of the profile in the normal form.
    pub profile_index: usize,
    /// The profile itself.
    pub profile: StrategyProfile,
    /// Strategy labels `(player 1, player 2)`.
    pub strategies: [String; 2],
    /// Payoffs at the profile.
    pub payoffs: Payoffs,
}

/// Best responses of both players, indexed like `players`.
///
/// For each opponent strategy the player's payoffs are compared across own
/// strategies and every strategy reaching the maximum is kept. Ties are never
/// broken, so no list is empty.
pub fn compute_best_responses(
    game: &NormalFormGame,
    players: &[String],
) -> Result<[BestResponses; 2]> {
    let view = BimatrixView::new(game, players)?;
    best_responses_in_view(&view)
}

pub(crate) fn best_responses_in_view(view: &BimatrixView) -> Result<[BestResponses; 2]> {
    Ok([
        best_responses_for(view, 0)?,
        best_responses_for(view, 1)?,
    ])
}

fn best_responses_for(view: &BimatrixView, player: usize) -> Result<BestResponses> {
    let own = view.strategies(player);
    let opponent = view.strategies(1 - player);
    let mut responses = Vec::with_capacity(opponent.len());

    for (k, opponent_label) in opponent.iter().enumerate() {
        let values = (0..own.len())
            .map(|i| view.utility(player, i, k))
            .collect::<Result<Vec<f64>>>()?;
        let best = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let tied = own
            .iter()
            .zip(&values)
            .filter(|(_, &v)| v == best)
            .map(|(label, _)| label.clone())
            .collect();
        responses.push((opponent_label.clone(), tied));
    }

    Ok(BestResponses {
        player: view.player(player).to_string(),
        responses,
    })
}

/// All pure Nash equilibria, in profile order.
pub fn pure_nash(game: &NormalFormGame, players: &[String]) -> Result<Vec<NashEquilibrium>> {
    let view = BimatrixView::new(game, players)?;
    let [br1, br2] = best_responses_in_view(&view)?;

    let mut equilibria = Vec::new();
    for (index, (profile, payoffs)) in game.iter().enumerate() {
        let labels = profile.labels();
        let (a1, a2) = (&labels[0], &labels[1]);
        if br1.is_best(a2, a1) && br2.is_best(a1, a2) {
            log::info!("pure Nash equilibrium ({}, {}) -> {:?}", a1, a2, payoffs);
            equilibria.push(NashEquilibrium {
                profile_index: index,
                profile: profile.clone(),
                strategies: [a1.clone(), a2.clone()],
                payoffs: payoffs.to_vec(),
            });
        }
    }
    Ok(equilibria)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::random_bimatrix;

    fn players() -> Vec<String> {
        vec!["Player 1".into(), "Player 2".into()]
    }

    fn game(p1: &[&str], p2: &[&str], grid: &[Vec<(f64, f64)>]) -> NormalFormGame {
        NormalFormGame::from_bimatrix(p1, p2, grid).unwrap()
    }

    fn pd() -> NormalFormGame {
        game(
            &["Cooperate", "Defect"],
            &["Cooperate", "Defect"],
            &[vec![(3.0, 3.0), (0.0, 5.0)], vec![(5.0, 0.0), (1.0, 1.0)]],
        )
    }

    #[test]
    fn test_pd_best_responses() {
        let [br1, br2] = compute_best_responses(&pd(), &players()).unwrap();
        assert_eq!(br1.player, "Player 1");
        assert_eq!(br1.get("Cooperate"), Some(&["Defect".to_string()][..]));
        assert_eq!(br1.get("Defect"), Some(&["Defect".to_string()][..]));
        assert_eq!(br2.get("Cooperate"), Some(&["Defect".to_string()][..]));
        assert_eq!(br1.ever_best(), vec!["Defect"]);
    }

    #[test]
    fn test_ties_are_kept() {
        let g = game(
            &["A", "B", "C"],
            &["X"],
            &[vec![(2.0, 0.0)], vec![(1.0, 0.0)], vec![(2.0, 0.0)]],
        );
        let [br1, br2] = compute_best_responses(&g, &players()).unwrap();
        assert_eq!(br1.get("X"), Some(&["A".to_string(), "C".to_string()][..]));
        // Player 2 has one strategy; it is the best response to everything.
        assert_eq!(br2.get("B"), Some(&["X".to_string()][..]));
    }

    #[test]
    fn test_pd_single_equilibrium() {
        let eq = pure_nash(&pd(), &players()).unwrap();
        assert_eq!(eq.len(), 1);
        assert_eq!(eq[0].strategies, ["Defect".to_string(), "Defect".to_string()]);
        assert_eq!(eq[0].payoffs, vec![1.0, 1.0]);
        assert_eq!(eq[0].profile_index, 3);
    }

    #[test]
    fn test_battle_of_the_sexes_two_equilibria() {
        let g = game(
            &["Opera", "Football"],
            &["Opera", "Football"],
            &[vec![(2.0, 1.0), (0.0, 0.0)], vec![(0.0, 0.0), (1.0, 2.0)]],
        );
        let eq = pure_nash(&g, &players()).unwrap();
        assert_eq!(eq.len(), 2);
        assert_eq!(eq[0].strategies[0], "Opera");
        assert_eq!(eq[0].payoffs, vec![2.0, 1.0]);
        assert_eq!(eq[1].strategies[1], "Football");
        assert_eq!(eq[1].payoffs, vec![1.0, 2.0]);
    }

    #[test]
    fn test_matching_pennies_has_none() {
        let g = game(
            &["Heads", "Tails"],
            &["Heads", "Tails"],
            &[vec![(1.0, -1.0), (-1.0, 1.0)], vec![(-1.0, 1.0), (1.0, -1.0)]],
        );
        assert!(pure_nash(&g, &players()).unwrap().is_empty());
    }

    #[test]
    fn test_random_games_cross_check() {
        for seed in 0..200u64 {
            let rows = 2 + (seed % 2) as usize;
            let cols = 2 + ((seed / 2) % 2) as usize;
            let g = random_bimatrix(rows, cols, -3..=3, seed).unwrap();
            let [br1, br2] = compute_best_responses(&g, &players()).unwrap();

            for (_, best) in br1.iter().chain(br2.iter()) {
                assert!(!best.is_empty(), "seed {}: empty best-response set", seed);
            }

            let eq = pure_nash(&g, &players()).unwrap();
            for (index, (profile, _)) in g.iter().enumerate() {
                let labels = profile.labels();
                let mutual = br1.is_best(&labels[1], &labels[0]) && br2.is_best(&labels[0], &labels[1]);
                let listed = eq.iter().any(|e| e.profile_index == index);
                assert_eq!(mutual, listed, "seed {}: profile {} disagrees", seed, index);
            }
        }
    }
}
