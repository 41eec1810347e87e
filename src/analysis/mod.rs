//! Solution concepts on two-player normal-form games.
//!
//! Every routine takes a [`NormalFormGame`](crate::extensive::NormalFormGame)
//! and the player list and returns plain data. Strategies are identified by
//! their label (see [`PureStrategy::label`](crate::extensive::PureStrategy::label))
//! and listed in first-seen order, which is also the index order of mixed
//! strategy vectors.
//!
//! - [`compute_expected_payoff`]: expected payoffs of a mixed profile.
//! - [`strict_dominance`], [`weak_dominance`], [`mixed_strategy_dominance`]:
//!   single-pass dominance checks.
//! - [`compute_best_responses`], [`pure_nash`]: best responses with ties kept,
//!   and the profiles where they meet.
//! - [`rationalizability`], [`iterated_strict_dominance`]: iterated
//!   elimination with a per-round trace.
//! - [`AnalysisReport`]: all of the above at once.

pub mod best_response;
pub mod config;
pub mod dominance;
pub mod payoff;
pub mod rationalizability;
pub mod report;
pub mod view;

pub use best_response::{compute_best_responses, pure_nash, BestResponses, NashEquilibrium};
pub use config::{AnalysisConfig, ConfigError};
pub use dominance::{
    mixed_strategy_dominance, mixed_strategy_dominance_3x2, mixed_strategy_dominance_3x3,
    strict_dominance, weak_dominance, DominatedStrategies, MixedDominance, MixedWitness,
};
pub use payoff::{
    compute_expected_payoff, expected_payoff_vs_pure, pure_distribution, validate_distribution,
    ValidationError,
};
pub use rationalizability::{
    iterated_strict_dominance, rationalizability, Elimination, EliminationRound,
};
pub use report::AnalysisReport;
pub use view::BimatrixView;
