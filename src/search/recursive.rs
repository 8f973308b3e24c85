//! Recursive search strategy.
//!
//! The direct rendition of the minimax fold: terminal snapshots score
//! immediately, otherwise every available action is tried on a fresh clone
//! and the re-signed child scores fold with max. Stack depth tracks the
//! remaining match length, which is bounded because resource points only
//! fall; the iterative strategy is the drop-in alternative where call-stack
//! headroom is a concern.

use super::{branch, resign, Score};
use crate::core::ActionKind;
use crate::queue::TurnOrder;

/// Best score the queue's front combatant can guarantee.
///
/// Terminal cases: a front combatant with no action and no decided winner is
/// a tie worth 0; a winning front combatant is worth its own hit points; a
/// losing one is worth the winner's hit points, negated.
pub fn state_score<Q: TurnOrder + Clone>(queue: &Q) -> Score {
    let mut snapshot = queue.clone();
    let Some(actor) = snapshot.peek() else {
        return 0;
    };
    let actions = snapshot.roster()[actor].available_actions();
    let winner = snapshot.winner();

    if actions.is_empty() && winner.is_none() {
        return 0;
    }
    if winner == Some(actor) {
        return snapshot.roster()[actor].hit_points();
    }
    if winner == Some(actor.opponent()) {
        return -snapshot.roster()[actor.opponent()].hit_points();
    }

    if actions.len() == 2 {
        let (ordinary, same_ordinary) = branch(&snapshot, ActionKind::Ordinary);
        let (special, same_special) = branch(&snapshot, ActionKind::Special);
        resign(state_score(&ordinary), same_ordinary)
            .max(resign(state_score(&special), same_special))
    } else {
        let (ordinary, same_ordinary) = branch(&snapshot, ActionKind::Ordinary);
        resign(state_score(&ordinary), same_ordinary)
    }
}

/// Action the front combatant should take, by full-depth search.
///
/// Prefers the ordinary action on ties and whenever it is the sole option;
/// `None` when no action is legal.
pub fn select_action<Q: TurnOrder + Clone>(queue: &Q) -> Option<ActionKind> {
    let mut snapshot = queue.clone();
    let actor = snapshot.peek()?;
    let actions = snapshot.roster()[actor].available_actions();

    match actions.len() {
        0 => None,
        1 => Some(ActionKind::Ordinary),
        _ => {
            let (ordinary, same_ordinary) = branch(&snapshot, ActionKind::Ordinary);
            let (special, same_special) = branch(&snapshot, ActionKind::Special);
            let ordinary_score = resign(state_score(&ordinary), same_ordinary);
            let special_score = resign(state_score(&special), same_special);
            Some(if special_score > ordinary_score {
                ActionKind::Special
            } else {
                ActionKind::Ordinary
            })
        }
    }
}
