//! Configuration for the solution-concept routines.
//!
//! The defaults reproduce the fixed constants the analysis has always used;
//! they are gathered here so each one has a name.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default player names, in player order.
pub const DEFAULT_PLAYERS: [&str; 2] = ["Player 1", "Player 2"];

/// Step of the mixing-probability grid in the mixed dominance search.
pub const DEFAULT_GRID_STEP: f64 = 0.01;

/// Margin a mixture must clear to count as strictly better.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Allowed distance from 1.0 when validating a probability vector.
pub const DEFAULT_PROBABILITY_TOLERANCE: f64 = 1e-3;

/// Configuration for game analysis.
///
/// # Example
/// ```
/// use game_analyzer::analysis::AnalysisConfig;
///
/// let config = AnalysisConfig::default();
/// assert_eq!(config.grid_step, 0.01);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Player names, in the order their strategies appear in profiles.
    pub players: Vec<String>,

    /// Granularity of the mixing-probability scan.
    ///
    /// The scan tries `step, 2*step, ...` up to but excluding 1.0, so the
    /// default visits 0.01 through 0.99.
    pub grid_step: f64,

    /// A mixture dominates a pure strategy only if it beats it by more than
    /// this against every opponent strategy.
    pub epsilon: f64,

    /// Tolerance on the sum of a probability vector.
    pub probability_tolerance: f64,

    /// Stop iterated elimination after this many rounds.
    ///
    /// `None` runs to the fixed point, which is always reached because every
    /// round removes at least one strategy or ends the loop.
    pub max_elimination_rounds: Option<usize>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            players: DEFAULT_PLAYERS.iter().map(|p| p.to_string()).collect(),
            grid_step: DEFAULT_GRID_STEP,
            epsilon: DEFAULT_EPSILON,
            probability_tolerance: DEFAULT_PROBABILITY_TOLERANCE,
            max_elimination_rounds: None,
        }
    }
}

impl AnalysisConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set player names.
    pub fn with_players<I, S>(mut self, players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.players = players.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method: set the grid step.
    pub fn with_grid_step(mut self, step: f64) -> Self {
        self.grid_step = step;
        self
    }

    /// Builder method: set the dominance margin.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Builder method: cap the number of elimination rounds.
    pub fn with_max_elimination_rounds(mut self, rounds: usize) -> Self {
        self.max_elimination_rounds = Some(rounds);
        self
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Mixing probabilities visited by the dominance scan, ascending.
    pub fn grid(&self) -> impl Iterator<Item = f64> {
        let step = self.grid_step;
        let points = (1.0 / step).round() as usize;
        (1..points).map(move |k| k as f64 * step)
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.len() != 2 {
            return Err(ConfigError::PlayerCount(self.players.len()));
        }
        if self.players[0] == self.players[1] {
            return Err(ConfigError::DuplicatePlayer(self.players[0].clone()));
        }
        if !(self.grid_step > 0.0 && self.grid_step < 1.0) {
            return Err(ConfigError::InvalidGridStep(self.grid_step));
        }
        if !(self.epsilon >= 0.0) {
            return Err(ConfigError::InvalidEpsilon(self.epsilon));
        }
        if !(self.probability_tolerance >= 0.0 && self.probability_tolerance < 1.0) {
            return Err(ConfigError::InvalidTolerance(self.probability_tolerance));
        }
        Ok(())
    }
}

/// Errors that can occur when validating an analysis configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The analysis handles exactly two players.
    #[error("Expected 2 player names, got {0}")]
    PlayerCount(usize),
    /// Both players have the same name.
    #[error("Player name {0} is used twice")]
    DuplicatePlayer(String),
    /// Grid step outside (0, 1).
    #[error("Grid step {0} is out of range (0, 1)")]
    InvalidGridStep(f64),
    /// Negative or NaN epsilon.
    #[error("Epsilon {0} must be non-negative")]
    InvalidEpsilon(f64),
    /// Tolerance outside [0, 1).
    #[error("Probability tolerance {0} is out of range [0, 1)")]
    InvalidTolerance(f64),
    /// The JSON could not be parsed.
    #[error("Invalid configuration JSON: {0}")]
    Parse(String),
}
