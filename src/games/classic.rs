//! The textbook 2x2 games and a builder for custom simultaneous games.
//!
//! Every game here is a simultaneous-move game written as a tree: player 1
//! moves at the root, player 2 moves below without seeing that choice. The
//! missing information is expressed by putting all of player 2's nodes in
//! one information set.
//!
//! ```text
//! Player 1 [P1_main]
//! ├── a1 ── Player 2 [P2_main] ── b1 → (u1, u2)
//! │                            └─ b2 → (u1, u2)
//! └── a2 ── Player 2 [P2_main] ── b1 → (u1, u2)
//!                              └─ b2 → (u1, u2)
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::error::{GameError, Result};
use crate::extensive::{GameTree, GameTreeNode};

/// Player names used by every game in the library.
pub const PLAYERS: [&str; 2] = ["Player 1", "Player 2"];

/// [`PLAYERS`] as owned strings, the form the conversion routines take.
pub fn players() -> Vec<String> {
    PLAYERS.iter().map(|p| p.to_string()).collect()
}

/// Build a simultaneous game. `payoff(i, j)` gives the payoffs when player 1
/// picks `p1_actions[i]` and player 2 picks `p2_actions[j]`.
fn simultaneous<F>(
    p1_actions: &[&str],
    p2_actions: &[&str],
    info_sets: [&str; 2],
    payoff: F,
) -> Result<GameTree>
where
    F: Fn(usize, usize) -> (f64, f64),
{
    let mut root = GameTreeNode::decision_in(PLAYERS[0], p1_actions.iter().copied(), info_sets[0]);
    for (i, a1) in p1_actions.iter().enumerate() {
        let mut p2 = GameTreeNode::decision_in(PLAYERS[1], p2_actions.iter().copied(), info_sets[1]);
        for (j, a2) in p2_actions.iter().enumerate() {
            let (u1, u2) = payoff(i, j);
            p2.add_child(a2, GameTreeNode::terminal(vec![u1, u2]))?;
        }
        root.add_child(a1, p2)?;
    }
    GameTree::new(root)
}

fn two_by_two(actions: [&str; 2], grid: [[(f64, f64); 2]; 2]) -> Result<GameTree> {
    simultaneous(&actions, &actions, ["P1_main", "P2_main"], |i, j| grid[i][j])
}

/// Prisoner's Dilemma. Defecting is dominant, mutual cooperation pays more.
pub fn prisoners_dilemma() -> Result<GameTree> {
    two_by_two(
        ["Cooperate", "Defect"],
        [[(3.0, 3.0), (0.0, 5.0)], [(5.0, 0.0), (1.0, 1.0)]],
    )
}

/// Battle of the Sexes: two pure equilibria, each favouring one player.
pub fn battle_of_the_sexes() -> Result<GameTree> {
    two_by_two(
        ["Opera", "Football"],
        [[(2.0, 1.0), (0.0, 0.0)], [(0.0, 0.0), (1.0, 2.0)]],
    )
}

/// Matching Pennies: zero-sum, no pure equilibrium.
pub fn matching_pennies() -> Result<GameTree> {
    two_by_two(
        ["Heads", "Tails"],
        [[(1.0, -1.0), (-1.0, 1.0)], [(-1.0, 1.0), (1.0, -1.0)]],
    )
}

/// Hawk-Dove (Chicken): the pure equilibria are the asymmetric profiles.
pub fn hawk_dove() -> Result<GameTree> {
    two_by_two(
        ["Hawk", "Dove"],
        [[(-1.0, -1.0), (3.0, 0.0)], [(0.0, 3.0), (2.0, 2.0)]],
    )
}

/// A simultaneous game from user-supplied actions and payoffs.
///
/// `payoffs[i][j]` is the outcome of `(p1_actions[i], p2_actions[j])`. The
/// information sets are `P1_custom` and `P2_custom`.
///
/// # Errors
/// [`GameError::ShapeMismatch`] if the grid does not match the action lists,
/// plus anything [`GameTree::new`] rejects (empty or repeated actions).
pub fn custom_game(
    p1_actions: &[&str],
    p2_actions: &[&str],
    payoffs: &[Vec<(f64, f64)>],
) -> Result<GameTree> {
    if payoffs.len() != p1_actions.len() {
        return Err(GameError::ShapeMismatch {
            what: "payoff rows",
            expected: p1_actions.len(),
            found: payoffs.len(),
        });
    }
    if let Some(row) = payoffs.iter().find(|row| row.len() != p2_actions.len()) {
        return Err(GameError::ShapeMismatch {
            what: "payoff columns",
            expected: p2_actions.len(),
            found: row.len(),
        });
    }
    simultaneous(p1_actions, p2_actions, ["P1_custom", "P2_custom"], |i, j| payoffs[i][j])
}

/// The built-in games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassicGame {
    /// See [`prisoners_dilemma`].
    PrisonersDilemma,
    /// See [`battle_of_the_sexes`].
    BattleOfTheSexes,
    /// See [`matching_pennies`].
    MatchingPennies,
    /// See [`hawk_dove`].
    HawkDove,
}

impl ClassicGame {
    /// Every built-in game, in menu order.
    pub const ALL: [ClassicGame; 4] = [
        ClassicGame::PrisonersDilemma,
        ClassicGame::BattleOfTheSexes,
        ClassicGame::MatchingPennies,
        ClassicGame::HawkDove,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            ClassicGame::PrisonersDilemma => "Prisoner's Dilemma",
            ClassicGame::BattleOfTheSexes => "Battle of the Sexes",
            ClassicGame::MatchingPennies => "Matching Pennies",
            ClassicGame::HawkDove => "Hawk-Dove Game",
        }
    }

    /// Short name accepted on the command line.
    pub fn alias(&self) -> &'static str {
        match self {
            ClassicGame::PrisonersDilemma => "pd",
            ClassicGame::BattleOfTheSexes => "bos",
            ClassicGame::MatchingPennies => "mp",
            ClassicGame::HawkDove => "hd",
        }
    }

    /// Build the game tree.
    pub fn build(&self) -> Result<GameTree> {
        match self {
            ClassicGame::PrisonersDilemma => prisoners_dilemma(),
            ClassicGame::BattleOfTheSexes => battle_of_the_sexes(),
            ClassicGame::MatchingPennies => matching_pennies(),
            ClassicGame::HawkDove => hawk_dove(),
        }
    }
}

impl fmt::Display for ClassicGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A game name that matches nothing in [`ClassicGame::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown game: {0}")]
pub struct UnknownGame(pub String);

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for ClassicGame {
    type Err = UnknownGame;

    /// Accepts the display name or the alias, ignoring case and punctuation.
    /// The trailing "Game" of "Hawk-Dove Game" is optional.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = normalize(s);
        ClassicGame::ALL
            .into_iter()
            .find(|game| {
                let name = normalize(game.name());
                wanted == name
                    || wanted == game.alias()
                    || name.strip_suffix("game") == Some(wanted.as_str())
            })
            .ok_or_else(|| UnknownGame(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{
        compute_expected_payoff, pure_nash, strict_dominance, weak_dominance,
    };
    use crate::extensive::extensive_to_normal_form;

    #[test]
    fn test_pd_scenario() {
        let tree = prisoners_dilemma().unwrap();
        let game = extensive_to_normal_form(&tree, &players()).unwrap();
        assert_eq!(game.len(), 4);

        let strict = strict_dominance(&game, &players()).unwrap();
        assert_eq!(strict.for_player(0), &["Cooperate".to_string()]);
        assert_eq!(strict.for_player(1), &["Cooperate".to_string()]);

        let eq = pure_nash(&game, &players()).unwrap();
        assert_eq!(eq.len(), 1);
        assert_eq!(eq[0].strategies, ["Defect".to_string(), "Defect".to_string()]);
        assert_eq!(eq[0].payoffs, vec![1.0, 1.0]);
    }

    #[test]
    fn test_matching_pennies_scenario() {
        let tree = matching_pennies().unwrap();
        let game = extensive_to_normal_form(&tree, &players()).unwrap();
        assert!(pure_nash(&game, &players()).unwrap().is_empty());

        let value = compute_expected_payoff(game.payoffs(), &[0.5, 0.5], &[0.5, 0.5]).unwrap();
        assert_eq!(value, (0.0, 0.0));
    }

    #[test]
    fn test_battle_of_the_sexes_scenario() {
        let tree = battle_of_the_sexes().unwrap();
        let game = extensive_to_normal_form(&tree, &players()).unwrap();
        let eq = pure_nash(&game, &players()).unwrap();

        let found: Vec<(String, String, Vec<f64>)> = eq
            .into_iter()
            .map(|e| {
                let [a, b] = e.strategies;
                (a, b, e.payoffs)
            })
            .collect();
        assert_eq!(
            found,
            vec![
                ("Opera".to_string(), "Opera".to_string(), vec![2.0, 1.0]),
                ("Football".to_string(), "Football".to_string(), vec![1.0, 2.0]),
            ]
        );
    }

    #[test]
    fn test_hawk_dove_equilibria() {
        let tree = hawk_dove().unwrap();
        let game = extensive_to_normal_form(&tree, &players()).unwrap();
        let eq = pure_nash(&game, &players()).unwrap();
        assert_eq!(eq.len(), 2);
        assert_eq!(eq[0].strategies, ["Hawk".to_string(), "Dove".to_string()]);
        assert_eq!(eq[1].strategies, ["Dove".to_string(), "Hawk".to_string()]);
    }

    #[test]
    fn test_strict_subset_of_weak_for_classics() {
        for classic in ClassicGame::ALL {
            let game = extensive_to_normal_form(&classic.build().unwrap(), &players()).unwrap();
            let strict = strict_dominance(&game, &players()).unwrap();
            let weak = weak_dominance(&game, &players()).unwrap();
            for player in 0..2 {
                for s in strict.for_player(player) {
                    assert!(weak.contains(player, s), "{}: {} not weakly dominated", classic, s);
                }
            }
        }
    }

    #[test]
    fn test_custom_game() {
        let tree = custom_game(
            &["Up", "Middle", "Down"],
            &["Left", "Right"],
            &[
                vec![(1.0, 0.0), (0.0, 1.0)],
                vec![(0.0, 1.0), (1.0, 0.0)],
                vec![(0.0, 0.0), (0.0, 0.0)],
            ],
        )
        .unwrap();
        assert_eq!(tree.root().info_set(), Some("P1_custom"));

        let game = extensive_to_normal_form(&tree, &players()).unwrap();
        assert_eq!(game.len(), 6);
        assert_eq!(game.payoff_for(&["Middle", "Right"]), Some(&[1.0, 0.0][..]));
    }

    #[test]
    fn test_custom_game_shape_errors() {
        let err = custom_game(&["A", "B"], &["X"], &[vec![(0.0, 0.0)]]).unwrap_err();
        assert!(matches!(err, GameError::ShapeMismatch { expected: 2, found: 1, .. }));

        let err = custom_game(&["A"], &["X", "Y"], &[vec![(0.0, 0.0)]]).unwrap_err();
        assert!(matches!(err, GameError::ShapeMismatch { what: "payoff columns", .. }));

        let err = custom_game(&["A", "A"], &["X"], &[vec![(0.0, 0.0)], vec![(0.0, 0.0)]]).unwrap_err();
        assert!(matches!(err, GameError::DuplicateAction { .. }));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("pd".parse::<ClassicGame>(), Ok(ClassicGame::PrisonersDilemma));
        assert_eq!("Prisoner's Dilemma".parse::<ClassicGame>(), Ok(ClassicGame::PrisonersDilemma));
        assert_eq!("battle-of-the-sexes".parse::<ClassicGame>(), Ok(ClassicGame::BattleOfTheSexes));
        assert_eq!("Hawk-Dove".parse::<ClassicGame>(), Ok(ClassicGame::HawkDove));
        assert_eq!("MATCHING PENNIES".parse::<ClassicGame>(), Ok(ClassicGame::MatchingPennies));
        assert_eq!(
            "chess".parse::<ClassicGame>(),
            Err(UnknownGame("chess".to_string()))
        );
        for game in ClassicGame::ALL {
            assert_eq!(game.name().parse::<ClassicGame>(), Ok(game));
        }
    }
}
