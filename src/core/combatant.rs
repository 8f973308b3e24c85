//! Combatant identity and the per-match roster arena.
//!
//! A match always has exactly two combatants. `CombatantId` is a handle into
//! the `Roster`, and the mutual enemy back-reference of a pointer-based
//! design reduces to `opponent()` on the id. Queues own their roster, so
//! cloning a queue snapshots the combatants along with the turn order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use super::action::ActionKind;
use super::skill::Archetype;

/// Handle identifying one of the two combatants in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombatantId(pub u8);

impl CombatantId {
    /// Create a combatant handle. Only 0 and 1 exist in a match.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id < 2, "a match has exactly two combatants");
        Self(id)
    }

    /// The other side of the match.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Raw slot index into the roster.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CombatantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Combatant {}", self.0)
    }
}

/// A combatant's mutable battle state plus its fixed archetype.
///
/// Hit points and resource points never go below zero; healing never exceeds
/// the maximum hit points. Incoming damage is reduced by the archetype's
/// defense before it lands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    name: String,
    archetype: Archetype,
    hit_points: i32,
    max_hit_points: i32,
    resource: i32,
}

impl Combatant {
    /// Standard starting hit points.
    pub const DEFAULT_HIT_POINTS: i32 = 100;
    /// Standard starting resource points.
    pub const DEFAULT_RESOURCE: i32 = 100;

    /// A combatant with the standard starting totals.
    #[must_use]
    pub fn new(name: impl Into<String>, archetype: Archetype) -> Self {
        Self::with_totals(
            name,
            archetype,
            Self::DEFAULT_HIT_POINTS,
            Self::DEFAULT_RESOURCE,
        )
    }

    /// A combatant with custom starting totals; `hit_points` is also the cap
    /// healing clamps to.
    #[must_use]
    pub fn with_totals(
        name: impl Into<String>,
        archetype: Archetype,
        hit_points: i32,
        resource: i32,
    ) -> Self {
        let hit_points = hit_points.max(0);
        Self {
            name: name.into(),
            archetype,
            hit_points,
            max_hit_points: hit_points,
            resource: resource.max(0),
        }
    }

    /// The combatant's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The combatant's archetype.
    #[must_use]
    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    /// Current hit points.
    #[must_use]
    pub fn hit_points(&self) -> i32 {
        self.hit_points
    }

    /// The cap healing clamps to.
    #[must_use]
    pub fn max_hit_points(&self) -> i32 {
        self.max_hit_points
    }

    /// Current resource points.
    #[must_use]
    pub fn resource(&self) -> i32 {
        self.resource
    }

    /// Set hit points, clamped to `[0, max_hit_points]`.
    pub fn set_hit_points(&mut self, hit_points: i32) {
        self.hit_points = hit_points.clamp(0, self.max_hit_points);
    }

    /// Set resource points, clamped at zero.
    pub fn set_resource(&mut self, resource: i32) {
        self.resource = resource.max(0);
    }

    /// Actions the combatant can currently pay for, ordinary first.
    #[must_use]
    pub fn available_actions(&self) -> SmallVec<[ActionKind; 2]> {
        let mut actions = SmallVec::new();
        if self.resource >= self.archetype.ordinary().cost {
            actions.push(ActionKind::Ordinary);
        }
        if self.resource >= self.archetype.special().cost {
            actions.push(ActionKind::Special);
        }
        actions
    }

    /// Whether at least one action can be paid for.
    #[must_use]
    pub fn can_act(&self) -> bool {
        !self.available_actions().is_empty()
    }

    /// Spend resource points; saturates at zero.
    pub(crate) fn spend(&mut self, cost: i32) {
        self.resource = (self.resource - cost).max(0);
    }

    /// Take a hit, reduced by defense. Returns the damage actually dealt.
    pub(crate) fn take_damage(&mut self, power: i32) -> i32 {
        let dealt = (power - self.archetype.defense()).max(0);
        self.hit_points = (self.hit_points - dealt).max(0);
        dealt
    }

    /// Restore hit points, clamped to the maximum.
    pub(crate) fn heal(&mut self, amount: i32) {
        self.hit_points = (self.hit_points + amount).min(self.max_hit_points);
    }
}

impl std::fmt::Display for Combatant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}): {}/{}",
            self.name, self.archetype, self.hit_points, self.resource
        )
    }
}

/// The per-match arena: exactly two combatant slots indexed by `CombatantId`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    slots: [Combatant; 2],
}

impl Roster {
    /// Build the arena from the two sides, slot 0 first.
    #[must_use]
    pub fn new(first: Combatant, second: Combatant) -> Self {
        Self {
            slots: [first, second],
        }
    }

    /// Get a combatant by handle.
    #[inline]
    #[must_use]
    pub fn get(&self, id: CombatantId) -> &Combatant {
        &self.slots[id.index()]
    }

    /// Get a mutable combatant by handle.
    #[inline]
    pub fn get_mut(&mut self, id: CombatantId) -> &mut Combatant {
        &mut self.slots[id.index()]
    }

    /// Iterate over (id, combatant) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (CombatantId, &Combatant)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, c)| (CombatantId(i as u8), c))
    }
}

impl Index<CombatantId> for Roster {
    type Output = Combatant;

    fn index(&self, id: CombatantId) -> &Self::Output {
        self.get(id)
    }
}

impl IndexMut<CombatantId> for Roster {
    fn index_mut(&mut self, id: CombatantId) -> &mut Self::Output {
        self.get_mut(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combatant_id_opponent() {
        assert_eq!(CombatantId::new(0).opponent(), CombatantId::new(1));
        assert_eq!(CombatantId::new(1).opponent(), CombatantId::new(0));
        assert_eq!(format!("{}", CombatantId::new(0)), "Combatant 0");
    }

    #[test]
    fn test_combatant_new_defaults() {
        let c = Combatant::new("Sophia", Archetype::Rogue);

        assert_eq!(c.name(), "Sophia");
        assert_eq!(c.hit_points(), 100);
        assert_eq!(c.resource(), 100);
        assert_eq!(c.max_hit_points(), 100);
    }

    #[test]
    fn test_available_actions_by_resource() {
        // Rogue: ordinary costs 3, special costs 10.
        let mut c = Combatant::new("r", Archetype::Rogue);

        assert_eq!(
            c.available_actions().as_slice(),
            &[ActionKind::Ordinary, ActionKind::Special]
        );

        c.set_resource(5);
        assert_eq!(c.available_actions().as_slice(), &[ActionKind::Ordinary]);

        c.set_resource(2);
        assert!(c.available_actions().is_empty());
        assert!(!c.can_act());
    }

    #[test]
    fn test_take_damage_applies_defense() {
        // Mage defense is 8.
        let mut m = Combatant::new("m", Archetype::Mage);

        let dealt = m.take_damage(20);
        assert_eq!(dealt, 12);
        assert_eq!(m.hit_points(), 88);

        // Hits below the defense threshold deal nothing.
        let dealt = m.take_damage(5);
        assert_eq!(dealt, 0);
        assert_eq!(m.hit_points(), 88);
    }

    #[test]
    fn test_hit_points_clamp_at_zero() {
        let mut m = Combatant::with_totals("m", Archetype::Mage, 5, 100);

        m.take_damage(50);
        assert_eq!(m.hit_points(), 0);
    }

    #[test]
    fn test_heal_clamps_at_max() {
        let mut v = Combatant::new("v", Archetype::Vampire);
        v.set_hit_points(95);

        v.heal(20);
        assert_eq!(v.hit_points(), 100);
    }

    #[test]
    fn test_spend_saturates() {
        let mut c = Combatant::with_totals("c", Archetype::Rogue, 100, 2);

        c.spend(5);
        assert_eq!(c.resource(), 0);
    }

    #[test]
    fn test_display() {
        let mut c = Combatant::new("r", Archetype::Rogue);
        c.set_hit_points(40);

        assert_eq!(format!("{}", c), "r (Rogue): 40/100");
    }

    #[test]
    fn test_roster_indexing() {
        let mut roster = Roster::new(
            Combatant::new("a", Archetype::Rogue),
            Combatant::new("b", Archetype::Mage),
        );

        assert_eq!(roster[CombatantId::new(0)].name(), "a");
        assert_eq!(roster[CombatantId::new(1)].name(), "b");

        roster[CombatantId::new(1)].set_hit_points(3);
        assert_eq!(roster[CombatantId::new(1)].hit_points(), 3);
    }

    #[test]
    fn test_roster_iter() {
        let roster = Roster::new(
            Combatant::new("a", Archetype::Rogue),
            Combatant::new("b", Archetype::Mage),
        );

        let names: Vec<_> = roster.iter().map(|(_, c)| c.name().to_string()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_combatant_serialization() {
        let c = Combatant::with_totals("v", Archetype::Vampire, 80, 60);

        let json = serde_json::to_string(&c).unwrap();
        let deserialized: Combatant = serde_json::from_str(&json).unwrap();

        assert_eq!(c, deserialized);
    }
}
