//! Game tree nodes.
//!
//! A node is either a decision point owned by one player or a terminal leaf
//! carrying one payoff per player. Trees are assembled bottom-up or top-down
//! with [`GameTreeNode::add_child`] and then frozen by wrapping the root in a
//! [`GameTree`](super::GameTree).

use std::fmt;

use rustc_hash::FxHashMap;

use super::strategy::LABEL_SEPARATOR;
use crate::error::{GameError, Result};

/// One payoff per player, in player-list order.
pub type Payoffs = Vec<f64>;

/// A decision point in an extensive-form game.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionNode {
    player: String,
    actions: Vec<String>,
    children: FxHashMap<String, GameTreeNode>,
    info_set: Option<String>,
}

impl DecisionNode {
    /// The player who moves here.
    pub fn player(&self) -> &str {
        &self.player
    }

    /// Available actions, in their declared order.
    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    /// Information set id, if one has been given or assigned.
    pub fn info_set(&self) -> Option<&str> {
        self.info_set.as_deref()
    }

    /// The child reached by playing `action`.
    pub fn child(&self, action: &str) -> Option<&GameTreeNode> {
        self.children.get(action)
    }

    /// Children in action order. Actions without a child are skipped.
    pub fn children(&self) -> impl Iterator<Item = (&str, &GameTreeNode)> {
        self.actions
            .iter()
            .filter_map(|a| self.children.get(a).map(|c| (a.as_str(), c)))
    }

    pub(crate) fn child_mut(&mut self, action: &str) -> Option<&mut GameTreeNode> {
        self.children.get_mut(action)
    }

    pub(crate) fn set_info_set(&mut self, id: String) {
        self.info_set = Some(id);
    }

    /// Check that the node's children are exactly its actions.
    pub(crate) fn check_shape(&self) -> Result<()> {
        if self.actions.is_empty() {
            return Err(GameError::EmptyActions {
                player: self.player.clone(),
            });
        }
        for (i, action) in self.actions.iter().enumerate() {
            // Strategy labels join actions with the separator; it must stay unambiguous.
            if action.contains(LABEL_SEPARATOR) {
                return Err(GameError::ReservedSeparator {
                    player: self.player.clone(),
                    action: action.clone(),
                    separator: LABEL_SEPARATOR,
                });
            }
            if self.actions[..i].contains(action) {
                return Err(GameError::DuplicateAction {
                    player: self.player.clone(),
                    action: action.clone(),
                });
            }
            if !self.children.contains_key(action) {
                return Err(GameError::MissingChild {
                    player: self.player.clone(),
                    action: action.clone(),
                });
            }
        }
        Ok(())
    }
}

/// A node of an extensive-form game tree.
#[derive(Debug, Clone, PartialEq)]
pub enum GameTreeNode {
    /// A player chooses among actions.
    Decision(DecisionNode),
    /// The game is over; one payoff per player.
    Terminal(Payoffs),
}

impl GameTreeNode {
    /// Create a decision node with no children and no information set.
    ///
    /// Nodes without an explicit information set become singleton
    /// information sets when the tree is frozen.
    pub fn decision<P, I, A>(player: P, actions: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        GameTreeNode::Decision(DecisionNode {
            player: player.into(),
            actions: actions.into_iter().map(Into::into).collect(),
            children: FxHashMap::default(),
            info_set: None,
        })
    }

    /// Create a decision node belonging to the named information set.
    ///
    /// Every node sharing `info_set` must offer the same actions.
    pub fn decision_in<P, I, A, S>(player: P, actions: I, info_set: S) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
        S: Into<String>,
    {
        let mut node = Self::decision(player, actions);
        if let GameTreeNode::Decision(d) = &mut node {
            d.info_set = Some(info_set.into());
        }
        node
    }

    /// Create a terminal node.
    pub fn terminal(payoffs: impl Into<Payoffs>) -> Self {
        GameTreeNode::Terminal(payoffs.into())
    }

    /// True iff the node carries a payoff vector.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameTreeNode::Terminal(_))
    }

    /// Decision data, if this is a decision node.
    pub fn as_decision(&self) -> Option<&DecisionNode> {
        match self {
            GameTreeNode::Decision(d) => Some(d),
            GameTreeNode::Terminal(_) => None,
        }
    }

    /// The payoff vector, if this is a terminal node.
    pub fn payoffs(&self) -> Option<&[f64]> {
        match self {
            GameTreeNode::Terminal(p) => Some(p),
            GameTreeNode::Decision(_) => None,
        }
    }

    /// Owning player of a decision node.
    pub fn player(&self) -> Option<&str> {
        self.as_decision().map(DecisionNode::player)
    }

    /// Actions of a decision node; empty for terminals.
    pub fn actions(&self) -> &[String] {
        match self {
            GameTreeNode::Decision(d) => d.actions(),
            GameTreeNode::Terminal(_) => &[],
        }
    }

    /// Information set id of a decision node.
    pub fn info_set(&self) -> Option<&str> {
        self.as_decision().and_then(DecisionNode::info_set)
    }

    /// The child reached by `action`.
    pub fn child(&self, action: &str) -> Option<&GameTreeNode> {
        self.as_decision().and_then(|d| d.child(action))
    }

    /// Attach `child` under `action`, replacing any previous child there.
    pub fn add_child(&mut self, action: &str, child: GameTreeNode) -> Result<&mut Self> {
        match self {
            GameTreeNode::Decision(d) => {
                if !d.actions.iter().any(|a| a == action) {
                    return Err(GameError::UnknownAction {
                        player: d.player.clone(),
                        action: action.to_string(),
                    });
                }
                d.children.insert(action.to_string(), child);
            }
            GameTreeNode::Terminal(_) => {
                return Err(GameError::NotADecisionNode {
                    action: action.to_string(),
                })
            }
        }
        Ok(self)
    }

    /// Builder form of [`add_child`](Self::add_child).
    pub fn with_child(mut self, action: &str, child: GameTreeNode) -> Result<Self> {
        self.add_child(action, child)?;
        Ok(self)
    }

    /// Number of terminal nodes below (and including) this node.
    pub fn num_leaves(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                GameTreeNode::Terminal(_) => count += 1,
                GameTreeNode::Decision(d) => stack.extend(d.children.values()),
            }
        }
        count
    }

    /// Length of the longest path from this node to a leaf.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            if let GameTreeNode::Decision(d) = node {
                stack.extend(d.children.values().map(|c| (c, depth + 1)));
            }
        }
        deepest
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        match self {
            GameTreeNode::Terminal(p) => writeln!(f, "{:indent$}Terminal: Payoffs {:?}", "", p),
            GameTreeNode::Decision(d) => {
                writeln!(f, "{:indent$}{}'s turn | Actions: {:?}", "", d.player, d.actions)?;
                for (action, child) in d.children() {
                    writeln!(f, "{:width$}Action: {}", "", action, width = indent + 2)?;
                    child.write_indented(f, indent + 4)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for GameTreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
