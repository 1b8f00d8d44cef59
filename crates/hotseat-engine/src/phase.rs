//! The game phase state machine.

use serde::{Deserialize, Serialize};

/// The lifecycle of one game session.
///
/// ```text
/// NotStarted ──→ InProgress ──→ Won
///                     │
///                     └────────→ Lost
/// ```
///
/// - **NotStarted**: state exists but no question has been drawn.
/// - **InProgress**: a question is on screen; answers and lifelines
///   are accepted.
/// - **Won**: the player either cleared the top rung or walked away.
///   Terminal — the next `start` wipes the state.
/// - **Lost**: a wrong answer. Terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl GamePhase {
    /// Returns `true` while answers and lifelines are accepted.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::InProgress)
    }

    /// Returns `true` once the game has ended, either way.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// Returns `true` if moving to `target` is a legal transition.
    ///
    /// `InProgress` is the only branching state — it can end in either
    /// terminal phase. Terminal phases only leave via a full reset.
    pub fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::NotStarted, Self::InProgress)
                | (Self::InProgress, Self::Won)
                | (Self::InProgress, Self::Lost)
        )
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotStarted => write!(f, "NotStarted"),
            Self::InProgress => write!(f, "InProgress"),
            Self::Won => write!(f, "Won"),
            Self::Lost => write!(f, "Lost"),
        }
    }
}
