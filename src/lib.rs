//! # duel-engine
//!
//! A two-sided turn-based combat engine with queue-driven turn order and
//! exhaustive minimax search.
//!
//! ## Design Principles
//!
//! 1. **Handles Over Back-References**: combatants live in a two-slot roster
//!    owned by their queue and point at each other by id, so a snapshot is a
//!    plain clone with no graph surgery.
//!
//! 2. **Clone-Before-Mutate**: every search branch clones the queue (roster
//!    included) before acting on it. No state is shared between branches, so
//!    no isolation mechanism beyond `Clone` is needed.
//!
//! 3. **Acting-Side Scores**: search values are always expressed from the
//!    perspective of whoever acts next, which turns minimax's min layer into
//!    a sign flip on turn handover.
//!
//! ## Modules
//!
//! - `core`: combatant identities, the roster arena, skills, actions, RNG
//! - `queue`: the two turn-order queue variants and the `TurnOrder` contract
//! - `search`: recursive and iterative minimax over queue snapshots
//! - `playstyle`: decision strategies (manual, random, minimax)
//! - `duel`: ready-made two-combatant matches

pub mod core;
pub mod duel;
pub mod playstyle;
pub mod queue;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    ActionKind, Archetype, BattleRng, Combatant, CombatantId, Followup, Roster, Skill,
    SkillPicker,
};

pub use crate::duel::DuelBuilder;

pub use crate::playstyle::Playstyle;

pub use crate::queue::{
    take_turn, Eligibility, QueueError, RestrictedTurnQueue, TurnOrder, TurnQueue,
};

pub use crate::search::{
    select_action, state_score, IterativeSearch, NodeId, Score, SearchNode, SearchStats,
    SearchTree,
};
