//! Iterative search strategy: an explicit stack over an explicit node arena.
//!
//! Functionally identical to the recursive strategy, restructured as
//! post-order tree evaluation so call-stack depth no longer tracks match
//! length. An unexpanded node pushes itself back followed by its children;
//! by LIFO order the children resolve before the node is revisited, at which
//! point their scores fold upward.

use std::time::Instant;

use smallvec::SmallVec;

use super::node::{NodeId, SearchNode, SearchTree};
use super::stats::SearchStats;
use super::{branch, resign, Score};
use crate::core::ActionKind;
use crate::queue::TurnOrder;

/// Iterative minimax evaluator.
///
/// The tree and work stack live only for the duration of one `score` call;
/// the stats describe the most recent call.
#[derive(Clone, Debug, Default)]
pub struct IterativeSearch {
    stats: SearchStats,
}

impl IterativeSearch {
    /// A fresh evaluator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stats: SearchStats::new(),
        }
    }

    /// Statistics from the most recent `score` call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Best score the queue's front combatant can guarantee.
    ///
    /// Agrees with [`state_score`](super::state_score) on every snapshot.
    pub fn score<Q: TurnOrder + Clone>(&mut self, queue: &Q) -> Score {
        let start = Instant::now();
        self.stats.reset();

        let mut tree = SearchTree::new();
        let root = tree.alloc(SearchNode::new(queue.clone()));
        self.stats.nodes_allocated += 1;
        let mut stack = vec![root];

        while let Some(current) = stack.pop() {
            self.stats.visits += 1;

            if self.resolve_terminal(&mut tree, current) {
                continue;
            }
            if tree.get(current).children.is_none() {
                self.expand(&mut tree, current, &mut stack);
            } else {
                self.fold_children(&mut tree, current);
            }

            let height = stack.len() as u32;
            if height > self.stats.peak_stack {
                self.stats.peak_stack = height;
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        tree.get(root)
            .score
            .expect("work stack drained with the root unresolved")
    }

    /// Action the front combatant should take, by full-depth search.
    ///
    /// Prefers the ordinary action on ties and whenever it is the sole
    /// option; `None` when no action is legal.
    pub fn select_action<Q: TurnOrder + Clone>(&mut self, queue: &Q) -> Option<ActionKind> {
        let mut snapshot = queue.clone();
        let actor = snapshot.peek()?;
        let actions = snapshot.roster()[actor].available_actions();

        match actions.len() {
            0 => None,
            1 => Some(ActionKind::Ordinary),
            _ => {
                let (ordinary, same_ordinary) = branch(&snapshot, ActionKind::Ordinary);
                let (special, same_special) = branch(&snapshot, ActionKind::Special);
                let ordinary_score = resign(self.score(&ordinary), same_ordinary);
                let special_score = resign(self.score(&special), same_special);
                Some(if special_score > ordinary_score {
                    ActionKind::Special
                } else {
                    ActionKind::Ordinary
                })
            }
        }
    }

    /// Try the terminal base cases, identical to the recursive strategy's.
    /// Returns true if the node's score was set.
    fn resolve_terminal<Q: TurnOrder + Clone>(
        &mut self,
        tree: &mut SearchTree<Q>,
        id: NodeId,
    ) -> bool {
        let node = tree.get_mut(id);
        let Some(actor) = node.queue.peek() else {
            node.score = Some(0);
            self.stats.terminals += 1;
            return true;
        };
        let can_act = node.queue.roster()[actor].can_act();
        let winner = node.queue.winner();

        let score = if !can_act && winner.is_none() {
            Some(0)
        } else if winner == Some(actor) {
            Some(node.queue.roster()[actor].hit_points())
        } else if winner == Some(actor.opponent()) {
            Some(-node.queue.roster()[actor.opponent()].hit_points())
        } else {
            None
        };

        match score {
            Some(score) => {
                node.score = Some(score);
                self.stats.terminals += 1;
                true
            }
            None => false,
        }
    }

    /// Grow children for the node's available actions, then schedule the
    /// node for a revisit once they resolve.
    fn expand<Q: TurnOrder + Clone>(
        &mut self,
        tree: &mut SearchTree<Q>,
        id: NodeId,
        stack: &mut Vec<NodeId>,
    ) {
        let (action_count, snapshot) = {
            let node = tree.get_mut(id);
            let actor = node
                .queue
                .peek()
                .expect("expansion only runs on non-terminal nodes");
            let count = node.queue.roster()[actor].available_actions().len();
            (count, node.queue.clone())
        };

        let mut children: SmallVec<[NodeId; 2]> = SmallVec::new();
        let (ordinary, _) = branch(&snapshot, ActionKind::Ordinary);
        children.push(tree.alloc(SearchNode::new(ordinary)));
        if action_count == 2 {
            let (special, _) = branch(&snapshot, ActionKind::Special);
            children.push(tree.alloc(SearchNode::new(special)));
        }
        self.stats.nodes_allocated += children.len() as u32;
        self.stats.expansions += 1;

        // Parent first, children second: LIFO pops the children before the
        // parent comes back around.
        stack.push(id);
        for &child in &children {
            stack.push(child);
        }
        tree.get_mut(id).children = Some(children);
    }

    /// All children resolved: re-derive each branch's perspective and fold
    /// the re-signed scores with max.
    fn fold_children<Q: TurnOrder + Clone>(&self, tree: &mut SearchTree<Q>, id: NodeId) {
        // The child snapshot alone cannot tell whose perspective its score
        // is in, so each action is re-simulated once against the parent.
        let snapshot = tree.get(id).queue.clone();
        let children = tree
            .get(id)
            .children
            .clone()
            .expect("fold only runs on expanded nodes");

        let actions = [ActionKind::Ordinary, ActionKind::Special];
        let mut best: Option<Score> = None;
        for (index, &child) in children.iter().enumerate() {
            let (_, same_actor) = branch(&snapshot, actions[index]);
            let child_score = tree
                .get(child)
                .score
                .expect("children resolve before the parent revisit");
            let signed = resign(child_score, same_actor);
            best = Some(best.map_or(signed, |current| current.max(signed)));
        }
        tree.get_mut(id).score = best;
    }
}
