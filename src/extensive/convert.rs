//! Extensive form to normal form conversion.
//!
//! Every pure strategy profile is played out against the tree once, so the
//! cost is the product of the players' strategy counts. The games this crate
//! targets are small enough for that to be instant.

use serde::{Deserialize, Serialize};

use super::info_set::PlayerInfoSets;
use super::node::{GameTreeNode, Payoffs};
use super::strategy::{enumerate_player_strategies, PureStrategy, StrategyProfile};
use super::tree::GameTree;
use crate::error::{GameError, Result};

/// A game in normal form: strategy profiles and the parallel payoff list.
///
/// Index `i` of [`profiles`](Self::profiles) and [`payoffs`](Self::payoffs)
/// always refer to the same profile. For two players the profiles are in
/// row-major order: player 1's strategy varies slowest.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalFormGame {
    profiles: Vec<StrategyProfile>,
    payoffs: Vec<Payoffs>,
}

impl NormalFormGame {
    /// Pair up profiles and payoffs.
    pub fn new(profiles: Vec<StrategyProfile>, payoffs: Vec<Payoffs>) -> Result<Self> {
        if profiles.len() != payoffs.len() {
            return Err(GameError::ShapeMismatch {
                what: "payoffs per profile",
                expected: profiles.len(),
                found: payoffs.len(),
            });
        }
        Ok(Self { profiles, payoffs })
    }

    /// Build a two-player game directly from a payoff grid.
    ///
    /// `grid[i][j]` holds the payoffs when player 1 plays `p1_actions[i]` and
    /// player 2 plays `p2_actions[j]`. Each player gets a single information
    /// set, named `P1_main` and `P2_main`.
    pub fn from_bimatrix(
        p1_actions: &[&str],
        p2_actions: &[&str],
        grid: &[Vec<(f64, f64)>],
    ) -> Result<Self> {
        if grid.len() != p1_actions.len() {
            return Err(GameError::ShapeMismatch {
                what: "payoff grid rows",
                expected: p1_actions.len(),
                found: grid.len(),
            });
        }

        let cells = p1_actions.len() * p2_actions.len();
        let mut profiles = Vec::with_capacity(cells);
        let mut payoffs = Vec::with_capacity(cells);
        for (a1, row) in p1_actions.iter().zip(grid) {
            if row.len() != p2_actions.len() {
                return Err(GameError::ShapeMismatch {
                    what: "payoff grid columns",
                    expected: p2_actions.len(),
                    found: row.len(),
                });
            }
            for (a2, &(u1, u2)) in p2_actions.iter().zip(row) {
                profiles.push(StrategyProfile::new(vec![
                    PureStrategy::new([("P1_main", *a1)]),
                    PureStrategy::new([("P2_main", *a2)]),
                ]));
                payoffs.push(vec![u1, u2]);
            }
        }
        Ok(Self { profiles, payoffs })
    }

    /// Strategy profiles.
    pub fn profiles(&self) -> &[StrategyProfile] {
        &self.profiles
    }

    /// Payoff vectors, parallel to [`profiles`](Self::profiles).
    pub fn payoffs(&self) -> &[Payoffs] {
        &self.payoffs
    }

    /// Number of profiles.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// True if there are no profiles.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// `(profile, payoffs)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&StrategyProfile, &[f64])> {
        self.profiles
            .iter()
            .zip(self.payoffs.iter().map(Vec::as_slice))
    }

    /// Distinct strategy labels of one player, in first-seen order.
    pub fn strategy_labels(&self, player: usize) -> Vec<String> {
        let mut labels: Vec<String> = Vec::new();
        for profile in &self.profiles {
            if let Some(s) = profile.get(player) {
                let label = s.label();
                if !labels.contains(&label) {
                    labels.push(label);
                }
            }
        }
        labels
    }

    /// Payoffs of the first profile whose labels match, one label per player.
    pub fn payoff_for(&self, labels: &[&str]) -> Option<&[f64]> {
        self.iter()
            .find(|(profile, _)| {
                profile.len() == labels.len()
                    && profile
                        .strategies()
                        .iter()
                        .zip(labels)
                        .all(|(s, l)| s.label() == *l)
            })
            .map(|(_, p)| p)
    }

    /// Keep only the profiles accepted by `keep`, preserving order.
    pub fn retain<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&StrategyProfile) -> bool,
    {
        let (profiles, payoffs) = self
            .profiles
            .iter()
            .zip(&self.payoffs)
            .filter(|(profile, _)| keep(profile))
            .map(|(profile, payoff)| (profile.clone(), payoff.clone()))
            .unzip();
        Self { profiles, payoffs }
    }
}

/// Play `profile` out from `root` and return the payoffs of the leaf reached.
///
/// `players` gives the position of each player's strategy in the profile.
///
/// # Errors
/// - [`GameError::UnknownPlayer`] if a node's player is not in `players`.
/// - [`GameError::UnassignedInfoSet`] if the walk reaches a node without an
///   information set (the tree was not built through [`GameTree`]).
/// - [`GameError::MissingInfoSetChoice`] if the profile has no action for an
///   information set on the path.
/// - [`GameError::InvalidAction`] if the chosen action has no child.
pub fn evaluate_profile(
    root: &GameTreeNode,
    players: &[String],
    profile: &StrategyProfile,
) -> Result<Payoffs> {
    let mut node = root;
    loop {
        let d = match node {
            GameTreeNode::Terminal(payoffs) => return Ok(payoffs.clone()),
            GameTreeNode::Decision(d) => d,
        };

        let player = d.player();
        let index = players
            .iter()
            .position(|p| p == player)
            .ok_or_else(|| GameError::UnknownPlayer(player.to_string()))?;
        let info_set = d.info_set().ok_or_else(|| GameError::UnassignedInfoSet {
            player: player.to_string(),
        })?;

        let action = profile
            .get(index)
            .and_then(|s| s.action_at(info_set))
            .ok_or_else(|| GameError::MissingInfoSetChoice {
                player: player.to_string(),
                info_set: info_set.to_string(),
            })?;

        node = d.child(action).ok_or_else(|| GameError::InvalidAction {
            action: action.to_string(),
            info_set: info_set.to_string(),
        })?;
    }
}

/// Convert an extensive-form game to its normal form.
///
/// Strategies are enumerated per player, profiles are the Cartesian product
/// with the first player as the outermost loop, and each profile is evaluated
/// against the tree.
///
/// # Errors
/// - [`GameError::UnknownPlayer`] if the tree has a mover not in `players`.
/// - [`GameError::PayoffArity`] if payoff vectors do not have one entry per
///   player.
pub fn extensive_to_normal_form(tree: &GameTree, players: &[String]) -> Result<NormalFormGame> {
    if let Some(unknown) = tree
        .info_sets()
        .players()
        .iter()
        .find(|p| !players.contains(p))
    {
        return Err(GameError::UnknownPlayer(unknown.clone()));
    }
    if tree.payoff_arity() != players.len() {
        return Err(GameError::PayoffArity {
            expected: players.len(),
            found: tree.payoff_arity(),
        });
    }

    let empty = PlayerInfoSets::default();
    let per_player: Vec<Vec<PureStrategy>> = players
        .iter()
        .map(|p| {
            let sets = tree.info_sets().player(p).unwrap_or(&empty);
            let (strategies, _) = enumerate_player_strategies(sets);
            log::debug!("{} has {} pure strategies", p, strategies.len());
            strategies
        })
        .collect();

    let total: usize = per_player.iter().map(Vec::len).product();
    let mut profiles = Vec::with_capacity(total);
    let mut cursor = vec![0usize; per_player.len()];
    for _ in 0..total {
        profiles.push(StrategyProfile::new(
            per_player
                .iter()
                .zip(&cursor)
                .map(|(strategies, &i)| strategies[i].clone())
                .collect(),
        ));
        for pos in (0..cursor.len()).rev() {
            cursor[pos] += 1;
            if cursor[pos] < per_player[pos].len() {
                break;
            }
            cursor[pos] = 0;
        }
    }

    let payoffs = profiles
        .iter()
        .map(|profile| evaluate_profile(tree.root(), players, profile))
        .collect::<Result<Vec<_>>>()?;

    log::info!("normal form built: {} strategy profiles", profiles.len());
    NormalFormGame::new(profiles, payoffs)
}
