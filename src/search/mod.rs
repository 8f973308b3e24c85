//! Exhaustive game-tree search over combat snapshots.
//!
//! Scores are always expressed from the perspective of the side acting next,
//! so the usual min layer collapses into a sign flip whenever a branch hands
//! the turn to the opponent. Branch isolation comes from cloning the queue
//! (roster included) before every mutation; the state space is finite because
//! resource points only ever fall, so every search runs to completion.

pub mod iterative;
pub mod node;
pub mod recursive;
pub mod stats;

pub use iterative::IterativeSearch;
pub use node::{NodeId, SearchNode, SearchTree};
pub use recursive::{select_action, state_score};
pub use stats::SearchStats;

use crate::core::ActionKind;
use crate::queue::{take_turn, TurnOrder};

/// Best score the front combatant can force, from its own perspective.
pub type Score = i32;

/// Re-sign a child score to the parent actor's perspective: scores are
/// relative to whoever acts next, so a turn handover flips the sign.
fn resign(child_score: Score, same_actor: bool) -> Score {
    if same_actor {
        child_score
    } else {
        -child_score
    }
}

/// Clone `queue`, let its front combatant perform `action`, and report the
/// resulting snapshot plus whether the front afterwards is still the same
/// combatant.
fn branch<Q: TurnOrder + Clone>(queue: &Q, action: ActionKind) -> (Q, bool) {
    let mut next = queue.clone();
    let actor = take_turn(&mut next, action);
    let same = actor.is_some() && next.peek() == actor;
    (next, same)
}
