//! Extensive-form games and their conversion to normal form.
//!
//! # Overview
//!
//! Building a game is a two-phase affair:
//!
//! 1. Assemble [`GameTreeNode`]s. Decision nodes name their player, their
//!    actions and optionally an information set shared with other nodes.
//! 2. Freeze the root into a [`GameTree`], which validates the shape, gives
//!    every unlabelled decision node its own information set and collects the
//!    [`InformationSetMap`].
//!
//! [`extensive_to_normal_form`] then enumerates each player's pure strategies
//! (one action per information set), takes the Cartesian product over
//! players and plays every profile out against the tree.
//!
//! # Example
//!
//! ```
//! use game_analyzer::extensive::{extensive_to_normal_form, GameTree, GameTreeNode};
//!
//! let mut root = GameTreeNode::decision_in("Player 1", ["Heads", "Tails"], "P1_main");
//! for a1 in ["Heads", "Tails"] {
//!     let mut p2 = GameTreeNode::decision_in("Player 2", ["Heads", "Tails"], "P2_main");
//!     for a2 in ["Heads", "Tails"] {
//!         let u = if a1 == a2 { 1.0 } else { -1.0 };
//!         p2.add_child(a2, GameTreeNode::terminal(vec![u, -u])).unwrap();
//!     }
//!     root.add_child(a1, p2).unwrap();
//! }
//!
//! let tree = GameTree::new(root).unwrap();
//! let players = vec!["Player 1".to_string(), "Player 2".to_string()];
//! let game = extensive_to_normal_form(&tree, &players).unwrap();
//! assert_eq!(game.len(), 4);
//! ```

pub mod convert;
pub mod info_set;
pub mod node;
pub mod strategy;
pub mod tree;

pub use convert::{evaluate_profile, extensive_to_normal_form, NormalFormGame};
pub use info_set::{assign_info_sets, collect_info_sets, InformationSetMap, PlayerInfoSets};
pub use node::{DecisionNode, GameTreeNode, Payoffs};
pub use strategy::{enumerate_player_strategies, PureStrategy, StrategyProfile};
pub use tree::GameTree;
