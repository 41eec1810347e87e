//! Frozen, annotated game trees.

use super::info_set::{assign_info_sets, collect_info_sets, InformationSetMap};
use super::node::GameTreeNode;
use crate::error::{GameError, Result};

/// A well-formed game tree whose decision nodes all carry information sets.
///
/// Construction is the second phase of building a game: the caller assembles
/// nodes, then hands the root over here. The tree is validated, unlabelled
/// nodes get singleton information sets, and the information set map is
/// collected once. After that the tree is read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct GameTree {
    root: GameTreeNode,
    info_sets: InformationSetMap,
    payoff_arity: usize,
}

impl GameTree {
    /// Validate and annotate a tree.
    ///
    /// # Errors
    /// - [`GameError::MissingChild`], [`GameError::DuplicateAction`] or
    ///   [`GameError::EmptyActions`] if a decision node's children do not
    ///   match its actions.
    /// - [`GameError::ReservedSeparator`] if an action label contains the
    ///   strategy label separator.
    /// - [`GameError::PayoffArity`] if leaves disagree on the payoff length.
    /// - [`GameError::InconsistentInfoSet`] if a shared information set is
    ///   offered with different actions.
    pub fn new(mut root: GameTreeNode) -> Result<Self> {
        let payoff_arity = check_well_formed(&root)?;
        assign_info_sets(&mut root);
        let info_sets = collect_info_sets(&root)?;

        log::debug!(
            "game tree ready: {} leaves, depth {}, {} information sets",
            root.num_leaves(),
            root.depth(),
            info_sets.total()
        );

        Ok(Self {
            root,
            info_sets,
            payoff_arity,
        })
    }

    /// The root node.
    pub fn root(&self) -> &GameTreeNode {
        &self.root
    }

    /// Information sets collected at construction.
    pub fn info_sets(&self) -> &InformationSetMap {
        &self.info_sets
    }

    /// Length of every payoff vector in the tree.
    pub fn payoff_arity(&self) -> usize {
        self.payoff_arity
    }

    /// Give back the annotated root.
    pub fn into_root(self) -> GameTreeNode {
        self.root
    }
}

fn check_well_formed(root: &GameTreeNode) -> Result<usize> {
    let mut arity: Option<usize> = None;
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        match node {
            GameTreeNode::Terminal(payoffs) => match arity {
                None => arity = Some(payoffs.len()),
                Some(n) if n != payoffs.len() => {
                    return Err(GameError::PayoffArity {
                        expected: n,
                        found: payoffs.len(),
                    })
                }
                Some(_) => {}
            },
            GameTreeNode::Decision(d) => {
                d.check_shape()?;
                stack.extend(d.children().map(|(_, c)| c));
            }
        }
    }

    // Every decision node has at least one child, so a leaf was seen.
    Ok(arity.unwrap_or(0))
}
