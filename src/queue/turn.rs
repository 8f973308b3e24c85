//! The baseline turn queue.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::{QueueError, TurnOrder};
use crate::core::{CombatantId, Roster};

/// Ordered future turns for a two-sided match.
///
/// Entries are combatant handles; duplicates are normal, since skills queue
/// extra turns. The first enqueue fixes the two sides for the lifetime of
/// the queue. Cloning snapshots the roster together with the entries, so a
/// clone shares nothing with its source.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TurnQueue {
    roster: Roster,
    entries: Vector<CombatantId>,
    sides: Option<(CombatantId, CombatantId)>,
}

impl TurnQueue {
    /// An empty queue over the given roster.
    #[must_use]
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            entries: Vector::new(),
            sides: None,
        }
    }

    /// Entries front to back, without cleaning.
    pub fn entries(&self) -> impl Iterator<Item = CombatantId> + '_ {
        self.entries.iter().copied()
    }

    /// Drop leading entries whose combatant has no available action.
    fn discard_exhausted(&mut self) {
        while let Some(&front) = self.entries.front() {
            if self.roster[front].can_act() {
                break;
            }
            self.entries.pop_front();
        }
    }
}

impl TurnOrder for TurnQueue {
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
        self.entries.push_back(combatant);
        if self.sides.is_none() {
            self.sides = Some((combatant, combatant.opponent()));
        }
    }

    fn dequeue(&mut self) -> Result<CombatantId, QueueError> {
        self.discard_exhausted();
        self.entries.pop_front().ok_or(QueueError::Empty)
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

impl std::fmt::Display for TurnQueue {
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
