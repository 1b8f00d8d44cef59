//! The question record: the unit of content the whole game runs on.
//!
//! Questions are immutable once loaded. The engine never mutates them —
//! it only references them by id and compares submitted option indices
//! against `correct_index`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every question has exactly this many answer options (A–D).
///
/// The fifty-fifty lifeline relies on this: with four options there are
/// always three wrong ones, so hiding two still leaves the correct answer
/// plus one decoy on screen.
pub const OPTION_COUNT: usize = 4;

/// A unique, stable identifier for a question.
///
/// This is a newtype wrapper over `u32`. Wrapping the primitive means a
/// `QuestionId` can't be confused with a prize level or an option index,
/// even though all three are small integers underneath.
///
/// `#[serde(transparent)]` serializes it as the bare number, so a
/// catalog entry reads `"id": 7`, not `"id": { "0": 7 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub u32);

/// Display as `Q-7` — compact and unambiguous in logs.
impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q-{}", self.0)
    }
}

/// One multiple-choice question.
///
/// The field names in JSON are camelCase (`correctIndex`), matching the
/// catalog format this engine inherits:
///
/// ```json
/// {
///   "id": 1,
///   "text": "Which keyword declares an immutable binding in Rust?",
///   "options": ["mut", "let", "static", "const"],
///   "correctIndex": 1,
///   "hint": "It is the most common way to introduce a variable."
/// }
/// ```
///
/// `options` is a fixed-size array, so a catalog entry with three or five
/// options fails to deserialize — the "exactly 4" rule is enforced by the
/// type, not by a runtime check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Unique, stable identifier.
    pub id: QuestionId,

    /// The prompt shown to the player.
    pub text: String,

    /// The four answer options, in display order.
    pub options: [String; OPTION_COUNT],

    /// Index (0–3) of the correct option. Validated by
    /// [`QuestionBank::new`](crate::QuestionBank::new).
    pub correct_index: usize,

    /// Optional hint revealed by the hint lifeline.
    /// `#[serde(default)]` lets catalog entries omit the field entirely.
    #[serde(default)]
    pub hint: Option<String>,
}

impl Question {
    /// Returns the indices of the three wrong options.
    pub fn wrong_indices(&self) -> Vec<usize> {
        (0..OPTION_COUNT).filter(|&i| i != self.correct_index).collect()
    }
}
