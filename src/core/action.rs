//! The two move kinds a combatant may take on its turn.

use serde::{Deserialize, Serialize};

/// One of the two move kinds available to a combatant.
///
/// Every archetype exposes exactly one ordinary and one special skill; which
/// of the two can currently be used depends on the combatant's resource
/// points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// The cheap bread-and-butter skill.
    Ordinary,
    /// The expensive high-impact skill.
    Special,
}

impl ActionKind {
    /// The raw input token for this action, as typed by a human player.
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            ActionKind::Ordinary => 'A',
            ActionKind::Special => 'S',
        }
    }

    /// Parse a raw input token. Anything other than `'A'` / `'S'` is invalid.
    #[must_use]
    pub fn from_token(token: char) -> Option<Self> {
        match token {
            'A' => Some(ActionKind::Ordinary),
            'S' => Some(ActionKind::Special),
            _ => None,
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}
