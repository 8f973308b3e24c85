//! Skills: the effects behind ordinary and special actions.
//!
//! A skill spends the caster's resource points, deals defense-reduced damage
//! to the opponent, optionally drains, and then re-enqueues combatants into
//! the caster's queue. Re-insertion goes through the `TurnOrder` trait, so a
//! restricted queue's eligibility rules decide which followups stick.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::ActionKind;
use super::combatant::{Combatant, CombatantId};
use crate::queue::TurnOrder;

/// Who a skill re-enqueues after it resolves, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Followup {
    /// The combatant who cast the skill.
    Caster,
    /// The caster's opponent.
    Opponent,
}

/// A single skill: cost, power, and the turns it queues up afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Resource points spent when cast.
    pub cost: i32,
    /// Raw power before the target's defense applies.
    pub power: i32,
    /// Heal the caster by the damage actually dealt.
    pub drain: bool,
    /// Combatants appended to the queue after the skill resolves.
    pub followups: SmallVec<[Followup; 3]>,
}

impl Skill {
    /// Create a skill with the given cost, power, and followup pattern.
    #[must_use]
    pub fn new(cost: i32, power: i32, followups: &[Followup]) -> Self {
        Self {
            cost,
            power,
            drain: false,
            followups: SmallVec::from_slice(followups),
        }
    }

    /// Mark the skill as draining: the caster heals by the damage dealt.
    #[must_use]
    pub fn with_drain(mut self) -> Self {
        self.drain = true;
        self
    }

    /// Cast by `caster` against its opponent inside `queue`.
    pub fn apply<Q: TurnOrder + ?Sized>(&self, queue: &mut Q, caster: CombatantId) {
        let target = caster.opponent();

        queue.roster_mut()[caster].spend(self.cost);
        let dealt = queue.roster_mut()[target].take_damage(self.power);
        if self.drain {
            queue.roster_mut()[caster].heal(dealt);
        }

        for followup in &self.followups {
            queue.enqueue(match followup {
                Followup::Caster => caster,
                Followup::Opponent => target,
            });
        }
    }
}

/// The shipped combatant archetypes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    /// Slow, hard-hitting caster; queues the opponent ahead of itself on a
    /// special.
    Mage,
    /// Cheap, fast attacker; a special chains two of its own turns.
    Rogue,
    /// Drains hit points with its special, queueing two of its own turns and
    /// one of the opponent's.
    Vampire,
}

impl Archetype {
    /// Flat damage reduction applied to every incoming hit.
    #[must_use]
    pub const fn defense(self) -> i32 {
        match self {
            Archetype::Mage => 8,
            Archetype::Rogue => 10,
            Archetype::Vampire => 3,
        }
    }

    /// The cheap skill behind the ordinary action.
    #[must_use]
    pub fn ordinary(self) -> Skill {
        match self {
            Archetype::Mage => Skill::new(5, 20, &[Followup::Caster]),
            Archetype::Rogue => Skill::new(3, 15, &[Followup::Caster]),
            Archetype::Vampire => Skill::new(15, 20, &[Followup::Caster]),
        }
    }

    /// The expensive skill behind the special action.
    #[must_use]
    pub fn special(self) -> Skill {
        match self {
            Archetype::Mage => Skill::new(30, 40, &[Followup::Opponent, Followup::Caster]),
            Archetype::Rogue => Skill::new(10, 20, &[Followup::Caster, Followup::Caster]),
            Archetype::Vampire => {
                Skill::new(20, 30, &[Followup::Caster, Followup::Caster, Followup::Opponent])
                    .with_drain()
            }
        }
    }

    /// The skill behind the given action kind.
    #[must_use]
    pub fn skill(self, action: ActionKind) -> Skill {
        match action {
            ActionKind::Ordinary => self.ordinary(),
            ActionKind::Special => self.special(),
        }
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Archetype::Mage => "Mage",
            Archetype::Rogue => "Rogue",
            Archetype::Vampire => "Vampire",
        };
        write!(f, "{name}")
    }
}

/// External decision-tree seam.
///
/// Archetypes whose skill choice is delegated (rather than fixed per action)
/// consume this contract; the tree itself lives outside this crate.
pub trait SkillPicker {
    /// Choose the skill `caster` should use against `target`.
    fn pick_skill(&self, caster: &Combatant, target: &Combatant) -> Skill;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Roster;
    use crate::queue::TurnQueue;

    fn duel_queue(a: Archetype, b: Archetype) -> TurnQueue {
        let roster = Roster::new(Combatant::new("a", a), Combatant::new("b", b));
        let mut queue = TurnQueue::new(roster);
        queue.enqueue(CombatantId::new(0));
        queue.enqueue(CombatantId::new(1));
        queue
    }

    #[test]
    fn test_ordinary_attack_costs_and_damages() {
        let mut queue = duel_queue(Archetype::Rogue, Archetype::Mage);
        let caster = CombatantId::new(0);

        Archetype::Rogue.ordinary().apply(&mut queue, caster);

        // Rogue ordinary: cost 3, power 15 against Mage defense 8.
        assert_eq!(queue.roster()[caster].resource(), 97);
        assert_eq!(queue.roster()[caster.opponent()].hit_points(), 93);
    }

    #[test]
    fn test_ordinary_attack_queues_caster() {
        let mut queue = duel_queue(Archetype::Rogue, Archetype::Mage);
        let caster = CombatantId::new(0);

        Archetype::Rogue.ordinary().apply(&mut queue, caster);

        let entries: Vec<_> = queue.entries().collect();
        assert_eq!(entries, vec![caster, caster.opponent(), caster]);
    }

    #[test]
    fn test_mage_special_queues_opponent_first() {
        let mut queue = duel_queue(Archetype::Mage, Archetype::Rogue);
        let caster = CombatantId::new(0);

        Archetype::Mage.special().apply(&mut queue, caster);

        // Mage special: cost 30, power 40 against Rogue defense 10.
        assert_eq!(queue.roster()[caster].resource(), 70);
        assert_eq!(queue.roster()[caster.opponent()].hit_points(), 70);

        let entries: Vec<_> = queue.entries().collect();
        assert_eq!(
            entries,
            vec![caster, caster.opponent(), caster.opponent(), caster]
        );
    }

    #[test]
    fn test_vampire_special_drains() {
        let mut queue = duel_queue(Archetype::Vampire, Archetype::Mage);
        let caster = CombatantId::new(0);
        queue.roster_mut()[caster].set_hit_points(50);

        Archetype::Vampire.special().apply(&mut queue, caster);

        // Power 30 against Mage defense 8 deals 22, drained back to the caster.
        assert_eq!(queue.roster()[caster.opponent()].hit_points(), 78);
        assert_eq!(queue.roster()[caster].hit_points(), 72);
        assert_eq!(queue.roster()[caster].resource(), 80);
    }

    #[test]
    fn test_skill_by_action_kind() {
        assert_eq!(
            Archetype::Rogue.skill(ActionKind::Ordinary),
            Archetype::Rogue.ordinary()
        );
        assert_eq!(
            Archetype::Rogue.skill(ActionKind::Special),
            Archetype::Rogue.special()
        );
    }

    #[test]
    fn test_skill_serialization() {
        let skill = Archetype::Vampire.special();

        let json = serde_json::to_string(&skill).unwrap();
        let deserialized: Skill = serde_json::from_str(&json).unwrap();

        assert_eq!(skill, deserialized);
    }
}
