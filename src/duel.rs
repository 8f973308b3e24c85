//! Ready-made two-combatant matches.
//!
//! `DuelBuilder` assembles a roster and a primed queue for either queue
//! variant, with the shipped archetypes and adjustable starting totals.

use crate::core::{Archetype, Combatant, CombatantId, Roster};
use crate::queue::{RestrictedTurnQueue, TurnOrder, TurnQueue};

/// Builder for a standard duel.
#[derive(Clone, Debug)]
pub struct DuelBuilder {
    name_a: String,
    archetype_a: Archetype,
    name_b: String,
    archetype_b: Archetype,
    hit_points: i32,
    resource: i32,
}

impl Default for DuelBuilder {
    fn default() -> Self {
        Self {
            name_a: "A".to_string(),
            archetype_a: Archetype::Rogue,
            name_b: "B".to_string(),
            archetype_b: Archetype::Mage,
            hit_points: Combatant::DEFAULT_HIT_POINTS,
            resource: Combatant::DEFAULT_RESOURCE,
        }
    }
}

impl DuelBuilder {
    /// A rogue-versus-mage duel at standard totals.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Name and archetype for the first side.
    #[must_use]
    pub fn combatant_a(mut self, name: impl Into<String>, archetype: Archetype) -> Self {
        self.name_a = name.into();
        self.archetype_a = archetype;
        self
    }

    /// Name and archetype for the second side.
    #[must_use]
    pub fn combatant_b(mut self, name: impl Into<String>, archetype: Archetype) -> Self {
        self.name_b = name.into();
        self.archetype_b = archetype;
        self
    }

    /// Starting (and maximum) hit points for both sides.
    #[must_use]
    pub fn hit_points(mut self, hit_points: i32) -> Self {
        self.hit_points = hit_points;
        self
    }

    /// Starting resource points for both sides.
    #[must_use]
    pub fn resource(mut self, resource: i32) -> Self {
        self.resource = resource;
        self
    }

    fn roster(&self) -> Roster {
        Roster::new(
            Combatant::with_totals(
                self.name_a.clone(),
                self.archetype_a,
                self.hit_points,
                self.resource,
            ),
            Combatant::with_totals(
                self.name_b.clone(),
                self.archetype_b,
                self.hit_points,
                self.resource,
            ),
        )
    }

    /// Build a primed standard queue: both sides enqueued, side A first.
    #[must_use]
    pub fn build(self) -> TurnQueue {
        let mut queue = TurnQueue::new(self.roster());
        queue.enqueue(CombatantId::new(0));
        queue.enqueue(CombatantId::new(1));
        queue
    }

    /// Build a primed restricted queue.
    #[must_use]
    pub fn build_restricted(self) -> RestrictedTurnQueue {
        let mut queue = RestrictedTurnQueue::new(self.roster());
        queue.enqueue(CombatantId::new(0));
        queue.enqueue(CombatantId::new(1));
        queue
    }
}
