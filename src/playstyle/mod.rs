//! Decision strategies for choosing a combatant's next action.
//!
//! A closed set of variants rather than an open hierarchy: the manual token
//! mapping, a uniform random picker, and the two minimax strategies. All of
//! them answer `None` when no legal action exists, and callers must check
//! before acting.

use crate::core::{ActionKind, BattleRng};
use crate::queue::TurnOrder;
use crate::search::{self, IterativeSearch};

/// How a combatant picks its next action.
#[derive(Clone, Debug)]
pub enum Playstyle {
    /// Maps a raw input token to an action; never simulates.
    Manual,
    /// Uniform choice among the currently available actions.
    Random(BattleRng),
    /// Full-depth search, recursive strategy.
    RecursiveMinimax,
    /// Full-depth search, explicit-stack strategy.
    IterativeMinimax(IterativeSearch),
}

impl Playstyle {
    /// Random playstyle seeded for reproducible matches.
    #[must_use]
    pub fn random(seed: u64) -> Self {
        Playstyle::Random(BattleRng::new(seed))
    }

    /// Iterative minimax with fresh stats.
    #[must_use]
    pub fn iterative() -> Self {
        Playstyle::IterativeMinimax(IterativeSearch::new())
    }

    /// Whether this playstyle waits for human input.
    #[must_use]
    pub fn is_manual(&self) -> bool {
        matches!(self, Playstyle::Manual)
    }

    /// Choose the next action for the queue's front combatant.
    ///
    /// `input` is consulted only by the manual variant.
    pub fn select_action<Q: TurnOrder + Clone>(
        &mut self,
        queue: &Q,
        input: Option<char>,
    ) -> Option<ActionKind> {
        match self {
            Playstyle::Manual => input.and_then(ActionKind::from_token),
            Playstyle::Random(rng) => {
                let mut snapshot = queue.clone();
                let actor = snapshot.peek()?;
                let actions = snapshot.roster()[actor].available_actions();
                rng.choose(actions.as_slice()).copied()
            }
            Playstyle::RecursiveMinimax => search::select_action(queue),
            Playstyle::IterativeMinimax(engine) => engine.select_action(queue),
        }
    }

    /// A strategy for a cloned match. The random variant forks its RNG so
    /// the copy draws an independent deterministic sequence; the iterative
    /// variant starts with fresh stats.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        match self {
            Playstyle::Manual => Playstyle::Manual,
            Playstyle::Random(rng) => Playstyle::Random(rng.fork()),
            Playstyle::RecursiveMinimax => Playstyle::RecursiveMinimax,
            Playstyle::IterativeMinimax(_) => Playstyle::iterative(),
        }
    }
}
