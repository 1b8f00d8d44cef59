//! Presentation-facing value types: what a transition produced, and what
//! the player should currently see.

use serde::{Deserialize, Serialize};

use hotseat_bank::QuestionId;

use crate::Lifelines;

/// What resolving a player action produced.
///
/// `#[serde(tag = "type")]` gives the internally-tagged JSON shape
/// (`{ "type": "Won", "payout": 1000000 }`) that presentation layers
/// can switch on directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Outcome {
    /// Correct answer below the top rung: the climb continues at the
    /// given level, with a fresh question drawn.
    Continue { level: usize },

    /// The game ended in the player's favor — top rung cleared, or a
    /// voluntary walk-away with the banked prize.
    Won { payout: u64 },

    /// Wrong answer. Payout is the safe-rung prize if the player had
    /// reached it, zero otherwise.
    Lost { payout: u64 },
}

/// One still-visible answer option.
///
/// Carries the original 0–3 index so the player's choice submits the
/// real position even after fifty-fifty has hidden two options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub index: usize,
    pub text: String,
}

/// A snapshot of the current question as the player should see it:
/// hidden options omitted, hint only while revealed for this question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionView {
    /// Which question is on screen.
    pub id: QuestionId,

    /// The prompt text.
    pub text: String,

    /// Surviving options — all four, or two after fifty-fifty.
    pub options: Vec<AnswerOption>,

    /// Hint text, present only if the hint lifeline was spent on this
    /// very question (it vanishes when the question changes).
    pub hint: Option<String>,

    /// The rung this question is playing for.
    pub level: usize,

    /// The prize at stake at this rung.
    pub prize: u64,

    /// The guaranteed payout once the safe rung has been cleared.
    pub safe_prize: u64,

    /// Which lifelines are still unspent.
    pub lifelines: Lifelines,
}
