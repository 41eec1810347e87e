//! # Game Analyzer
//!
//! Finite two-player games: build them as extensive-form trees with
//! information sets, convert them to normal form by enumerating pure
//! strategies, and analyse the resulting matrix with the classical solution
//! concepts.
//!
//! ## Features
//!
//! - **Extensive form**: decision and terminal nodes, shared information
//!   sets, a two-phase build that assigns ids and checks consistency up front
//! - **Normal form**: full strategy enumeration and profile evaluation
//! - **Dominance**: strict, weak, and mixed-strategy (grid search)
//! - **Equilibria**: best responses with ties kept, pure Nash equilibria
//! - **Elimination**: rationalizability and iterated strict dominance
//!
//! ## Quick Start
//!
//! ```
//! use game_analyzer::analysis::{pure_nash, strict_dominance};
//! use game_analyzer::extensive::extensive_to_normal_form;
//! use game_analyzer::games::{players, prisoners_dilemma};
//!
//! let tree = prisoners_dilemma().unwrap();
//! let game = extensive_to_normal_form(&tree, &players()).unwrap();
//!
//! let dominated = strict_dominance(&game, &players()).unwrap();
//! assert_eq!(dominated.for_player(0), &["Cooperate".to_string()]);
//!
//! let equilibria = pure_nash(&game, &players()).unwrap();
//! assert_eq!(equilibria[0].payoffs, vec![1.0, 1.0]);
//! ```
//!
//! ## Modules
//!
//! - [`extensive`]: game trees, information sets, normal-form conversion
//! - [`analysis`]: solution concepts on the normal form
//! - [`games`]: classic, custom and random games
//! - [`error`]: structural errors
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────┐     ┌──────────────────────┐
//! │  games (library)     │────▶│  extensive           │
//! │  classic / random    │     │  GameTree, InfoSets  │
//! └──────────────────────┘     └──────────┬───────────┘
//!                                         │ extensive_to_normal_form
//!                                         ▼
//!                              ┌──────────────────────┐
//!                              │  NormalFormGame      │
//!                              └──────────┬───────────┘
//!                                         │
//!          ┌──────────────┬───────────────┼───────────────┐
//!          ▼              ▼               ▼               ▼
//!     ┌─────────┐   ┌───────────┐   ┌───────────┐   ┌───────────────┐
//!     │ payoff  │   │ dominance │   │ best resp │   │ elimination   │
//!     │         │   │           │   │ pure Nash │   │ (rationaliz.) │
//!     └─────────┘   └───────────┘   └───────────┘   └───────────────┘
//! ```

#![warn(missing_docs)]

/// Solution concepts on two-player normal-form games.
pub mod analysis;

/// Structural errors.
pub mod error;

/// Extensive-form games and their conversion to normal form.
pub mod extensive;

/// Classic, custom and random games.
pub mod games;

// Re-export commonly used types at crate root for convenience
pub use analysis::{AnalysisConfig, AnalysisReport};
pub use error::{GameError, Result};
pub use extensive::{extensive_to_normal_form, GameTree, GameTreeNode, NormalFormGame};
pub use games::ClassicGame;
