//! Lifelines: the three one-shot aids a player can spend per game.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of lifeline kinds.
///
/// Serialized (and parsed) as the wire names `fifty-fifty`, `hint`,
/// `swap` — the same strings a routing layer receives as the
/// `/lifeline/:type` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LifelineKind {
    /// Hide two wrong options of the current question.
    FiftyFifty,
    /// Reveal the current question's hint text.
    Hint,
    /// Replace the current question without changing the level.
    Swap,
}

impl std::fmt::Display for LifelineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FiftyFifty => write!(f, "fifty-fifty"),
            Self::Hint => write!(f, "hint"),
            Self::Swap => write!(f, "swap"),
        }
    }
}

/// Parses the wire names, e.g. from a route parameter. Anything else is
/// rejected before it reaches the engine.
impl FromStr for LifelineKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fifty-fifty" | "5050" | "50-50" => Ok(Self::FiftyFifty),
            "hint" => Ok(Self::Hint),
            "swap" => Ok(Self::Swap),
            other => Err(format!("unknown lifeline kind: {other}")),
        }
    }
}

/// Which lifelines this session has already spent.
///
/// The set of kinds is closed and known, so this is a fixed-shape record
/// of three booleans rather than a map keyed by name. Each flag moves
/// `false → true` exactly once and never back; a new game starts with a
/// fresh `Lifelines::default()`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct Lifelines {
    fifty_fifty: bool,
    hint: bool,
    swap: bool,
}

impl Lifelines {
    /// Returns `true` if the given kind has already been spent.
    pub fn is_used(&self, kind: LifelineKind) -> bool {
        match kind {
            LifelineKind::FiftyFifty => self.fifty_fifty,
            LifelineKind::Hint => self.hint,
            LifelineKind::Swap => self.swap,
        }
    }

    /// Marks the given kind as spent. Idempotent — the flag only ever
    /// moves in one direction.
    pub fn mark_used(&mut self, kind: LifelineKind) {
        match kind {
            LifelineKind::FiftyFifty => self.fifty_fifty = true,
            LifelineKind::Hint => self.hint = true,
            LifelineKind::Swap => self.swap = true,
        }
    }

    /// The kinds still available, in display order.
    pub fn available(&self) -> Vec<LifelineKind> {
        [LifelineKind::FiftyFifty, LifelineKind::Hint, LifelineKind::Swap]
            .into_iter()
            .filter(|&kind| !self.is_used(kind))
            .collect()
    }
}
