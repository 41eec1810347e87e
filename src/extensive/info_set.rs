//! Information set discovery.
//!
//! Collection is split in two passes. [`assign_info_sets`] gives every
//! decision node that was built without an id its own singleton information
//! set, using a counter scoped to the tree. [`collect_info_sets`] then walks
//! the annotated tree read-only and groups action lists by player and id.

use rustc_hash::{FxHashMap, FxHashSet};

use super::node::GameTreeNode;
use crate::error::{GameError, Result};

/// Information sets of one player, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerInfoSets {
    order: Vec<String>,
    actions: FxHashMap<String, Vec<String>>,
}

impl PlayerInfoSets {
    /// Information set ids in the order the traversal first met them.
    pub fn ids(&self) -> &[String] {
        &self.order
    }

    /// Actions available at the given information set.
    pub fn actions(&self, info_set: &str) -> Option<&[String]> {
        self.actions.get(info_set).map(Vec::as_slice)
    }

    /// `(id, actions)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.order
            .iter()
            .map(move |id| (id.as_str(), self.actions[id].as_slice()))
    }

    /// Number of information sets.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if the player never moves.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Size of the player's pure strategy space.
    pub fn strategy_count(&self) -> usize {
        self.actions.values().map(Vec::len).product()
    }

    fn record(&mut self, player: &str, info_set: &str, actions: &[String]) -> Result<()> {
        match self.actions.get(info_set) {
            Some(known) if known.as_slice() != actions => Err(GameError::InconsistentInfoSet {
                info_set: info_set.to_string(),
                player: player.to_string(),
                expected: known.clone(),
                found: actions.to_vec(),
            }),
            Some(_) => Ok(()),
            None => {
                self.order.push(info_set.to_string());
                self.actions.insert(info_set.to_string(), actions.to_vec());
                Ok(())
            }
        }
    }
}

/// Player -> information set id -> available actions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InformationSetMap {
    players: Vec<String>,
    sets: FxHashMap<String, PlayerInfoSets>,
}

impl InformationSetMap {
    /// Information sets of `player`, if the player moves anywhere in the tree.
    pub fn player(&self, player: &str) -> Option<&PlayerInfoSets> {
        self.sets.get(player)
    }

    /// Players that own at least one decision node, in first-seen order.
    pub fn players(&self) -> &[String] {
        &self.players
    }

    /// Total number of information sets over all players.
    pub fn total(&self) -> usize {
        self.sets.values().map(PlayerInfoSets::len).sum()
    }
}

/// Give every decision node without an information set a fresh singleton id.
///
/// Ids have the form `auto:<player>:<n>` with `n` counting up in pre-order;
/// ids already chosen by the builder are skipped. Returns the number of nodes
/// that received an id, so a second call on the same tree returns 0.
pub fn assign_info_sets(root: &mut GameTreeNode) -> usize {
    let mut taken = FxHashSet::default();
    let mut stack = vec![&*root];
    while let Some(node) = stack.pop() {
        if let GameTreeNode::Decision(d) = node {
            if let Some(id) = d.info_set() {
                taken.insert(id.to_string());
            }
            stack.extend(d.children().map(|(_, c)| c));
        }
    }

    let mut counter = 0usize;
    let assigned = assign_from(root, &taken, &mut counter);
    if assigned > 0 {
        log::debug!("assigned {} singleton information sets", assigned);
    }
    assigned
}

fn assign_from(node: &mut GameTreeNode, taken: &FxHashSet<String>, counter: &mut usize) -> usize {
    let GameTreeNode::Decision(d) = node else {
        return 0;
    };

    let mut assigned = 0;
    if d.info_set().is_none() {
        let id = loop {
            let candidate = format!("auto:{}:{}", d.player(), counter);
            *counter += 1;
            if !taken.contains(&candidate) {
                break candidate;
            }
        };
        d.set_info_set(id);
        assigned += 1;
    }

    for action in d.actions().to_vec() {
        if let Some(child) = d.child_mut(&action) {
            assigned += assign_from(child, taken, counter);
        }
    }
    assigned
}

/// Group the action lists of every decision node by player and information set.
///
/// The walk is depth-first and visits children in action order. Fails with
/// [`GameError::InconsistentInfoSet`] if one id is seen with two different
/// action lists, and with [`GameError::UnassignedInfoSet`] if a decision node
/// has not been annotated by [`assign_info_sets`].
pub fn collect_info_sets(root: &GameTreeNode) -> Result<InformationSetMap> {
    let mut map = InformationSetMap::default();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        let GameTreeNode::Decision(d) = node else {
            continue;
        };

        let player = d.player();
        let info_set = d.info_set().ok_or_else(|| GameError::UnassignedInfoSet {
            player: player.to_string(),
        })?;

        if !map.sets.contains_key(player) {
            map.players.push(player.to_string());
        }
        map.sets
            .entry(player.to_string())
            .or_default()
            .record(player, info_set, d.actions())?;

        let children: Vec<&GameTreeNode> = d.children().map(|(_, c)| c).collect();
        stack.extend(children.into_iter().rev());
    }

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(a: f64, b: f64) -> GameTreeNode {
        GameTreeNode::terminal(vec![a, b])
    }

    fn simultaneous() -> GameTreeNode {
        let mut root = GameTreeNode::decision_in("Player 1", ["U", "D"], "P1_main");
        for a1 in ["U", "D"] {
            let p2 = GameTreeNode::decision_in("Player 2", ["L", "R"], "P2_main")
                .with_child("L", leaf(1.0, 0.0))
                .and_then(|n| n.with_child("R", leaf(0.0, 1.0)))
                .unwrap();
            root.add_child(a1, p2).unwrap();
        }
        root
    }

    #[test]
    fn test_collect_shared_info_set() {
        let root = simultaneous();
        let map = collect_info_sets(&root).unwrap();

        assert_eq!(map.players(), &["Player 1".to_string(), "Player 2".to_string()]);
        let p2 = map.player("Player 2").unwrap();
        assert_eq!(p2.len(), 1);
        assert_eq!(p2.ids(), &["P2_main".to_string()]);
        assert_eq!(p2.actions("P2_main").unwrap(), &["L".to_string(), "R".to_string()]);
        assert_eq!(map.total(), 2);
    }

    #[test]
    fn test_inconsistent_info_set_fails() {
        let mut root = GameTreeNode::decision_in("Player 1", ["U", "D"], "P1_main");
        let left = GameTreeNode::decision_in("Player 2", ["L", "R"], "P2_main")
            .with_child("L", leaf(1.0, 0.0))
            .and_then(|n| n.with_child("R", leaf(0.0, 1.0)))
            .unwrap();
        let right = GameTreeNode::decision_in("Player 2", ["X", "Y"], "P2_main")
            .with_child("X", leaf(1.0, 0.0))
            .and_then(|n| n.with_child("Y", leaf(0.0, 1.0)))
            .unwrap();
        root.add_child("U", left).unwrap();
        root.add_child("D", right).unwrap();

        let err = collect_info_sets(&root).unwrap_err();
        match err {
            GameError::InconsistentInfoSet { info_set, player, .. } => {
                assert_eq!(info_set, "P2_main");
                assert_eq!(player, "Player 2");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_unassigned_node_is_reported() {
        let root = GameTreeNode::decision("Player 1", ["A"])
            .with_child("A", leaf(0.0, 0.0))
            .unwrap();
        let err = collect_info_sets(&root).unwrap_err();
        assert!(matches!(err, GameError::UnassignedInfoSet { .. }));
    }

    #[test]
    fn test_assign_is_idempotent_and_unique() {
        let mut root = GameTreeNode::decision("Player 1", ["U", "D"]);
        for a1 in ["U", "D"] {
            let p2 = GameTreeNode::decision("Player 2", ["L", "R"])
                .with_child("L", leaf(1.0, 0.0))
                .and_then(|n| n.with_child("R", leaf(0.0, 1.0)))
                .unwrap();
            root.add_child(a1, p2).unwrap();
        }

        assert_eq!(assign_info_sets(&mut root), 3);
        assert_eq!(assign_info_sets(&mut root), 0);

        let map = collect_info_sets(&root).unwrap();
        // Without shared ids, player 2 can tell the two nodes apart.
        let p2 = map.player("Player 2").unwrap();
        assert_eq!(p2.len(), 2);
        assert_eq!(p2.ids(), &["auto:Player 2:1".to_string(), "auto:Player 2:2".to_string()]);
        assert_eq!(p2.strategy_count(), 4);
        assert_eq!(root.info_set(), Some("auto:Player 1:0"));
    }

    #[test]
    fn test_assign_skips_taken_ids() {
        let mut root = GameTreeNode::decision_in("Player 1", ["A", "B"], "auto:Player 2:0")
            .with_child("A", leaf(0.0, 0.0))
            .unwrap();
        let p2 = GameTreeNode::decision("Player 2", ["L"])
            .with_child("L", leaf(1.0, 1.0))
            .unwrap();
        root.add_child("B", p2).unwrap();

        assert_eq!(assign_info_sets(&mut root), 1);
        let child = root.child("B").unwrap();
        assert_eq!(child.info_set(), Some("auto:Player 2:1"));
    }
}
