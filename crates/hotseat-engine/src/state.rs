//! The per-player game state: the opaque blob a session store persists.

use rand::Rng;
use serde::{Deserialize, Serialize};

use hotseat_bank::{PrizeLadder, QuestionBank, QuestionId};

use crate::{GamePhase, Lifelines};

/// One player's complete game state.
///
/// Fields are private — the only way to move a game forward is through
/// the transition methods in this crate, which uphold the invariants:
///
/// - `current_level` never decreases; it equals the ladder length only
///   after a top-rung win.
/// - `remaining` shrinks by exactly one per draw and never grows, so no
///   question repeats within a session.
/// - `removed_options` holds at most two indices and never the correct
///   one; it is cleared whenever the question changes.
/// - each lifeline flag flips `false → true` at most once.
///
/// Derives serde both ways so an external store can persist it as an
/// opaque blob between requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) phase: GamePhase,
    pub(crate) current_level: usize,
    pub(crate) remaining: Vec<QuestionId>,
    pub(crate) current_question: Option<QuestionId>,
    pub(crate) lifelines: Lifelines,
    pub(crate) removed_options: Vec<usize>,
    pub(crate) hint_question: Option<QuestionId>,
    pub(crate) safe_index: usize,
}

impl GameState {
    /// A fresh, not-yet-started state: level 0, the full catalog as the
    /// draw pool, every lifeline unspent.
    pub fn new(bank: &QuestionBank, ladder: &PrizeLadder) -> Self {
        Self {
            phase: GamePhase::NotStarted,
            current_level: 0,
            remaining: bank.ids(),
            current_question: None,
            lifelines: Lifelines::default(),
            removed_options: Vec::new(),
            hint_question: None,
            safe_index: ladder.safe_index(),
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The rung the player is currently playing for (equals the ladder
    /// length after a top-rung win).
    pub fn current_level(&self) -> usize {
        self.current_level
    }

    /// The question on screen, if any.
    pub fn current_question(&self) -> Option<QuestionId> {
        self.current_question
    }

    /// How many questions are left in the draw pool.
    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    /// Which lifelines have been spent.
    pub fn lifelines(&self) -> Lifelines {
        self.lifelines
    }

    /// Option indices hidden by fifty-fifty for the current question.
    pub fn removed_options(&self) -> &[usize] {
        &self.removed_options
    }

    /// The question the hint was revealed for, if any.
    pub fn hint_question(&self) -> Option<QuestionId> {
        self.hint_question
    }

    /// The configured safe rung, copied from the ladder at start.
    pub fn safe_index(&self) -> usize {
        self.safe_index
    }

    /// Draws the next question uniformly at random from the pool and
    /// makes it current, resetting all per-question state (hidden
    /// options, hint marker). Returns `None` when the pool is empty —
    /// the deck-exhaustion condition the caller must handle.
    ///
    /// `swap_remove` keeps the removal O(1); the pool is unordered, so
    /// swapping the last element into the hole doesn't bias later draws.
    pub(crate) fn advance_question<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Option<QuestionId> {
        self.removed_options.clear();
        self.hint_question = None;

        if self.remaining.is_empty() {
            self.current_question = None;
            return None;
        }
        let slot = rng.random_range(0..self.remaining.len());
        let drawn = self.remaining.swap_remove(slot);
        self.current_question = Some(drawn);
        tracing::debug!(
            question = %drawn,
            pool = self.remaining.len(),
            "question drawn"
        );
        Some(drawn)
    }

    /// Drops per-question state on the way into a terminal phase.
    pub(crate) fn clear_question(&mut self) {
        self.current_question = None;
        self.removed_options.clear();
        self.hint_question = None;
    }
}
