//! Pure strategies and strategy profiles.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::info_set::PlayerInfoSets;

/// Separator between per-information-set choices in a strategy label.
pub const LABEL_SEPARATOR: &str = "/";

/// A complete plan: one action for each of a player's information sets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PureStrategy {
    choices: Vec<(String, String)>,
}

impl PureStrategy {
    /// Build a strategy from `(info_set, action)` pairs.
    pub fn new<I, S, A>(choices: I) -> Self
    where
        I: IntoIterator<Item = (S, A)>,
        S: Into<String>,
        A: Into<String>,
    {
        Self {
            choices: choices
                .into_iter()
                .map(|(s, a)| (s.into(), a.into()))
                .collect(),
        }
    }

    /// Action chosen at `info_set`.
    pub fn action_at(&self, info_set: &str) -> Option<&str> {
        self.choices
            .iter()
            .find(|(id, _)| id == info_set)
            .map(|(_, a)| a.as_str())
    }

    /// `(info_set, action)` pairs in information set order.
    pub fn choices(&self) -> impl Iterator<Item = (&str, &str)> {
        self.choices.iter().map(|(s, a)| (s.as_str(), a.as_str()))
    }

    /// Number of information sets covered.
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// True for the single strategy of a player who never moves.
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Chosen actions joined with `/`, e.g. `Fight/Accommodate`.
    ///
    /// A player with one information set is labelled by the action itself.
    pub fn label(&self) -> String {
        let actions: Vec<&str> = self.choices.iter().map(|(_, a)| a.as_str()).collect();
        actions.join(LABEL_SEPARATOR)
    }
}

impl fmt::Display for PureStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (id, action)) in self.choices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", id, action)?;
        }
        write!(f, "}}")
    }
}

/// One pure strategy per player, in player-list order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct StrategyProfile {
    strategies: Vec<PureStrategy>,
}

impl StrategyProfile {
    /// Build a profile from per-player strategies.
    pub fn new(strategies: Vec<PureStrategy>) -> Self {
        Self { strategies }
    }

    /// Strategy of the player at `index`.
    pub fn get(&self, index: usize) -> Option<&PureStrategy> {
        self.strategies.get(index)
    }

    /// All strategies in player order.
    pub fn strategies(&self) -> &[PureStrategy] {
        &self.strategies
    }

    /// Number of players covered.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// True if the profile covers no players.
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Strategy labels in player order.
    pub fn labels(&self) -> Vec<String> {
        self.strategies.iter().map(PureStrategy::label).collect()
    }
}

impl fmt::Display for StrategyProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, s) in self.strategies.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", s)?;
        }
        write!(f, ")")
    }
}

/// Enumerate every pure strategy of one player.
///
/// The result is the Cartesian product of the action lists, taken over the
/// information sets in first-seen order with the last information set
/// varying fastest. The ordered information set ids are returned alongside.
/// A player without information sets has exactly one, empty, strategy.
pub fn enumerate_player_strategies(info_sets: &PlayerInfoSets) -> (Vec<PureStrategy>, Vec<String>) {
    let ids: Vec<String> = info_sets.ids().to_vec();
    let action_lists: Vec<&[String]> = info_sets.iter().map(|(_, actions)| actions).collect();

    if action_lists.iter().any(|a| a.is_empty()) {
        return (Vec::new(), ids);
    }

    let total: usize = action_lists.iter().map(|a| a.len()).product();
    let mut strategies = Vec::with_capacity(total);
    let mut cursor = vec![0usize; action_lists.len()];

    for _ in 0..total {
        strategies.push(PureStrategy {
            choices: ids
                .iter()
                .zip(&cursor)
                .zip(&action_lists)
                .map(|((id, &i), actions)| (id.clone(), actions[i].clone()))
                .collect(),
        });

        // Odometer step: the rightmost position turns over first.
        for pos in (0..cursor.len()).rev() {
            cursor[pos] += 1;
            if cursor[pos] < action_lists[pos].len() {
                break;
            }
            cursor[pos] = 0;
        }
    }

    (strategies, ids)
}
