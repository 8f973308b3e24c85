//! Turn-order queues: who acts next, and when a match is over.
//!
//! Both variants own their roster, so a clone of a queue is a complete,
//! isolated snapshot of the match. The only implicit removal policy is
//! cleaning: a front entry whose combatant can no longer pay for any action
//! is dropped permanently, never re-examined.

pub mod restricted;
pub mod turn;

pub use restricted::{Eligibility, RestrictedTurnQueue};
pub use turn::TurnQueue;

use thiserror::Error;

use crate::core::{ActionKind, CombatantId, Roster};

/// Errors surfaced by queue operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum QueueError {
    /// `dequeue` was called with no usable entries left; callers are
    /// expected to check `is_empty` first.
    #[error("dequeue from an empty turn queue")]
    Empty,
}

/// Common contract of the two turn-order queue variants.
///
/// `peek`, `is_empty`, and `dequeue` all clean first. The read-shaped
/// methods take `&mut self` because cleaning mutates in place; repeated
/// calls without intervening mutation return the same answer.
pub trait TurnOrder {
    /// The per-match combatant arena this queue owns.
    fn roster(&self) -> &Roster;

    /// Mutable access to the arena.
    fn roster_mut(&mut self) -> &mut Roster;

    /// The two fixed sides, set by the first enqueue and never changed, even
    /// once the queue has drained.
    fn sides(&self) -> Option<(CombatantId, CombatantId)>;

    /// Append a combatant's future turn.
    fn enqueue(&mut self, combatant: CombatantId);

    /// Clean, then remove and return the front combatant.
    fn dequeue(&mut self) -> Result<CombatantId, QueueError>;

    /// Clean, then return the front combatant without removing it.
    ///
    /// An empty queue falls back to side A so callers can always tell whose
    /// turn would resume; `None` only before any entry has fixed the sides.
    fn peek(&mut self) -> Option<CombatantId>;

    /// Clean, then report whether any turns remain.
    fn is_empty(&mut self) -> bool;

    /// The match is over when the queue is empty or either side is at zero
    /// hit points.
    fn is_over(&mut self) -> bool {
        if self.is_empty() {
            return true;
        }
        match self.sides() {
            Some((a, b)) => {
                self.roster()[a].hit_points() == 0 || self.roster()[b].hit_points() == 0
            }
            None => true,
        }
    }

    /// The surviving side, if the match is over and exactly one side still
    /// has hit points. A both-zero finish or an exhausted queue is a tie.
    fn winner(&mut self) -> Option<CombatantId> {
        if !self.is_over() {
            return None;
        }
        let (a, b) = self.sides()?;
        let a_hp = self.roster()[a].hit_points();
        let b_hp = self.roster()[b].hit_points();
        if a_hp == 0 && b_hp > 0 {
            Some(b)
        } else if b_hp == 0 && a_hp > 0 {
            Some(a)
        } else {
            None
        }
    }
}

/// Apply the front combatant's skill for `action`, then advance the turn if
/// that combatant can still act. An exhausted actor stays at the front for
/// cleaning to drop.
///
/// Returns the acting combatant, or `None` on a queue that never had sides.
pub fn take_turn<Q: TurnOrder + ?Sized>(queue: &mut Q, action: ActionKind) -> Option<CombatantId> {
    let actor = queue.peek()?;
    let skill = queue.roster()[actor].archetype().skill(action);
    skill.apply(queue, actor);
    if queue.roster()[actor].can_act() {
        let _ = queue.dequeue();
    }
    Some(actor)
}
