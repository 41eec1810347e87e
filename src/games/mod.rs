//! Game library.
//!
//! Ready-made trees for the classic two-player games, a builder for custom
//! simultaneous games, and seeded random games.
//!
//! ## Available Games
//!
//! | Game | Strategies | Pure equilibria |
//! |------|------------|-----------------|
//! | [`prisoners_dilemma`] | Cooperate, Defect | (Defect, Defect) |
//! | [`battle_of_the_sexes`] | Opera, Football | (Opera, Opera), (Football, Football) |
//! | [`matching_pennies`] | Heads, Tails | none |
//! | [`hawk_dove`] | Hawk, Dove | (Hawk, Dove), (Dove, Hawk) |
//!
//! ## Adding New Games
//!
//! Build the tree with [`GameTreeNode`](crate::extensive::GameTreeNode)
//! and hand the root to [`GameTree::new`](crate::extensive::GameTree::new).
//! For a plain matrix game, [`custom_game`] does both.

pub mod classic;
pub mod random;

pub use classic::{
    battle_of_the_sexes, custom_game, hawk_dove, matching_pennies, players, prisoners_dilemma,
    ClassicGame, UnknownGame, PLAYERS,
};
pub use random::{random_bimatrix, random_game_tree};
