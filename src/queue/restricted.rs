//! The restricted turn queue: per-entry re-insertion eligibility.
//!
//! Each queued entry carries a marker saying whether that entry, once at the
//! front, may successfully enqueue combatants. The marker sequence is index
//! aligned with the entries and mutated in lockstep with them.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::{QueueError, TurnOrder};
use crate::core::{CombatantId, Roster};

/// Whether a queued entry may enqueue combatants while it holds the front.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Eligibility {
    /// The entry may add turns when it acts.
    Eligible,
    /// The entry's insertions are swallowed.
    Barred,
}

/// Turn queue that restricts who may queue future turns.
///
/// Insertion rules, applied in order:
///
/// 1. the very first entry is eligible and fixes the sides;
/// 2. the second side's first entry, queued next to a lone first side, is
///    eligible;
/// 3. an eligible front queueing its enemy succeeds with the new entry
///    barred, since the enemy did not choose to be added; any other
///    insertion under an eligible front falls through to the duplicate cap
///    rather than being rejected;
/// 4. the duplicate cap: the new entry is eligible only while fewer than two
///    eligible copies of the same combatant are already queued;
/// 5. a barred front swallows the insertion entirely, unless the queue has
///    fully drained, which restarts it with an eligible entry.
///
/// Rule 3's fallthrough is long-standing behavior that downstream consumers
/// key off; it is preserved as-is.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RestrictedTurnQueue {
    roster: Roster,
    entries: Vector<CombatantId>,
    markers: Vector<Eligibility>,
    sides: Option<(CombatantId, CombatantId)>,
}

impl RestrictedTurnQueue {
    /// An empty restricted queue over the given roster.
    #[must_use]
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            entries: Vector::new(),
            markers: Vector::new(),
            sides: None,
        }
    }

    /// Entries front to back, without cleaning.
    pub fn entries(&self) -> impl Iterator<Item = CombatantId> + '_ {
        self.entries.iter().copied()
    }

    /// Entries paired with their markers, front to back, without cleaning.
    pub fn marks(&self) -> impl Iterator<Item = (CombatantId, Eligibility)> + '_ {
        self.entries
            .iter()
            .copied()
            .zip(self.markers.iter().copied())
    }

    fn push(&mut self, combatant: CombatantId, marker: Eligibility) {
        self.entries.push_back(combatant);
        self.markers.push_back(marker);
    }

    /// Rule 4: cap simultaneously eligible copies of one combatant at two.
    fn push_capped(&mut self, combatant: CombatantId) {
        let live = self
            .marks()
            .filter(|&(entry, marker)| entry == combatant && marker == Eligibility::Eligible)
            .count();
        let marker = if live < 2 {
            Eligibility::Eligible
        } else {
            Eligibility::Barred
        };
        self.push(combatant, marker);
    }

    /// Drop leading entries whose combatant has no available action, marker
    /// and entry together.
    fn discard_exhausted(&mut self) {
        while let Some(&front) = self.entries.front() {
            if self.roster[front].can_act() {
                break;
            }
            self.entries.pop_front();
            self.markers.pop_front();
        }
    }
}

impl TurnOrder for RestrictedTurnQueue {
    fn roster(&self) -> &Roster {
        &self.roster
    }

    fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    fn sides(&self) -> Option<(CombatantId, CombatantId)> {
        self.sides
    }

    fn enqueue(&mut self, combatant: CombatantId) {
        let Some((side_a, side_b)) = self.sides else {
            // Rule 1: the very first entry fixes the sides.
            self.push(combatant, Eligibility::Eligible);
            self.sides = Some((combatant, combatant.opponent()));
            return;
        };

        // Rule 2: the second side joining a lone first side.
        let second_bootstrap = self.entries.len() == 1
            && ((self.entries[0] == side_a && combatant == side_b)
                || (self.entries[0] == side_b && combatant == side_a));
        if second_bootstrap {
            self.push(combatant, Eligibility::Eligible);
        } else if let Some(&front_marker) = self.markers.front() {
            if front_marker == Eligibility::Eligible {
                if self.entries[0] == combatant.opponent() {
                    // Rule 3: the front queues its enemy's turn.
                    self.push(combatant, Eligibility::Barred);
                } else {
                    self.push_capped(combatant);
                }
            }
            // Rule 5, first half: a barred front swallows the insertion.
        } else {
            // Rule 5, second half: a fully drained queue restarts.
            self.push(combatant, Eligibility::Eligible);
        }
    }

    fn dequeue(&mut self) -> Result<CombatantId, QueueError> {
        self.discard_exhausted();
        let front = self.entries.pop_front().ok_or(QueueError::Empty)?;
        self.markers.pop_front();
        Ok(front)
    }

    fn peek(&mut self) -> Option<CombatantId> {
        self.discard_exhausted();
        self.entries
            .front()
            .copied()
            .or_else(|| self.sides.map(|(a, _)| a))
    }

    fn is_empty(&mut self) -> bool {
        self.discard_exhausted();
        self.entries.is_empty()
    }
}

impl std::fmt::Display for RestrictedTurnQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for id in &self.entries {
            if !first {
                write!(f, " -> ")?;
            }
            write!(f, "{}", self.roster[*id])?;
            first = false;
        }
        Ok(())
    }
}
