//! Structural errors raised while building, converting and analyzing games.

use thiserror::Error;

/// Errors that can occur when a game tree or normal form is malformed.
///
/// These always surface immediately; nothing in the crate logs one of these
/// and carries on with a default.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    /// Two nodes share an information set but offer different actions.
    #[error("Inconsistent actions in info set {info_set} for {player}: expected {expected:?}, found {found:?}")]
    InconsistentInfoSet {
        /// The shared information set id.
        info_set: String,
        /// The player owning the information set.
        player: String,
        /// Actions recorded the first time the id was seen.
        expected: Vec<String>,
        /// Actions of the conflicting node.
        found: Vec<String>,
    },

    /// A decision node was reached that has no information set id.
    #[error("Decision node for {player} has no information set; build the tree through GameTree")]
    UnassignedInfoSet {
        /// The player owning the node.
        player: String,
    },

    /// A strategy profile has no choice for an information set on the play path.
    #[error("Profile has no choice for {player} at info set {info_set}")]
    MissingInfoSetChoice {
        /// The acting player.
        player: String,
        /// The information set the walk reached.
        info_set: String,
    },

    /// A strategy profile picked an action with no matching child.
    #[error("Action {action} is not available at info set {info_set}")]
    InvalidAction {
        /// The chosen action.
        action: String,
        /// The information set where it was chosen.
        info_set: String,
    },

    /// A child was attached under an action the node does not offer.
    #[error("Node for {player} has no action {action}")]
    UnknownAction {
        /// The node's player.
        player: String,
        /// The offending action label.
        action: String,
    },

    /// An action label appears twice at one decision node.
    #[error("Action {action} is listed twice for {player}")]
    DuplicateAction {
        /// The node's player.
        player: String,
        /// The repeated action label.
        action: String,
    },

    /// An action label contains the strategy label separator.
    #[error("Action {action} for {player} contains the reserved separator {separator:?}")]
    ReservedSeparator {
        /// The node's player.
        player: String,
        /// The offending action label.
        action: String,
        /// The separator used to join strategy labels.
        separator: &'static str,
    },

    /// A decision node is missing the child for one of its actions.
    #[error("Node for {player} has no child for action {action}")]
    MissingChild {
        /// The node's player.
        player: String,
        /// The action without a child.
        action: String,
    },

    /// Children can only be attached to decision nodes.
    #[error("Cannot attach child {action} to a terminal node")]
    NotADecisionNode {
        /// The action that was being attached.
        action: String,
    },

    /// A decision node offers no actions.
    #[error("Decision node for {player} has no actions")]
    EmptyActions {
        /// The node's player.
        player: String,
    },

    /// The tree references a player that is not in the player list.
    #[error("Player {0} is not part of the game")]
    UnknownPlayer(String),

    /// A payoff vector does not have one entry per player.
    #[error("Payoff vector has {found} entries, expected {expected}")]
    PayoffArity {
        /// Number of players.
        expected: usize,
        /// Length of the offending payoff vector.
        found: usize,
    },

    /// The analysis routines only handle two-player games.
    #[error("Expected exactly 2 players, got {0}")]
    UnsupportedPlayerCount(usize),

    /// The normal form lacks a payoff for a pair of strategies.
    #[error("No payoff recorded for profile ({row}, {column})")]
    MissingProfile {
        /// Player 1's strategy label.
        row: String,
        /// Player 2's strategy label.
        column: String,
    },

    /// Two profiles of the normal form carry the same pair of strategy labels.
    #[error("Profile ({row}, {column}) appears more than once")]
    DuplicateProfile {
        /// Player 1's strategy label.
        row: String,
        /// Player 2's strategy label.
        column: String,
    },

    /// Two inputs that must line up have different sizes.
    #[error("{what}: expected {expected}, found {found}")]
    ShapeMismatch {
        /// What was being compared.
        what: &'static str,
        /// Expected size.
        expected: usize,
        /// Actual size.
        found: usize,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GameError>;
