//! Core combat state: identities, the roster arena, skills, actions, RNG.

pub mod action;
pub mod combatant;
pub mod rng;
pub mod skill;

pub use action::ActionKind;
pub use combatant::{Combatant, CombatantId, Roster};
pub use rng::BattleRng;
pub use skill::{Archetype, Followup, Skill, SkillPicker};
