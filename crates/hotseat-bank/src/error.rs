//! Error types for catalog and ladder validation.
//!
//! Every variant here describes malformed configuration data. These are
//! fatal at startup: a server refuses to boot on a bad catalog rather
//! than failing mid-session.

use crate::QuestionId;

/// Errors raised while loading or validating the question bank and
/// prize ladder.
#[derive(Debug, thiserror::Error)]
pub enum BankError {
    /// The catalog contains no questions.
    #[error("question catalog is empty")]
    Empty,

    /// Two catalog entries share the same id.
    #[error("duplicate question id {0}")]
    DuplicateId(QuestionId),

    /// A question's `correct_index` does not point at one of its four
    /// options.
    #[error("question {id}: correct index {index} outside 0-3")]
    CorrectIndexOutOfRange { id: QuestionId, index: usize },

    /// The prize ladder has no rungs.
    #[error("prize ladder is empty")]
    EmptyLadder,

    /// The prize values are not strictly increasing from rung to rung.
    #[error("prize ladder values must be strictly ascending")]
    LadderNotAscending,

    /// The configured safe rung is past the top of the ladder.
    #[error("safe index {safe} outside ladder of {len} rungs")]
    SafeIndexOutOfRange { safe: usize, len: usize },

    /// The catalog is smaller than the ladder — a full climb would
    /// exhaust the deck mid-session.
    #[error("catalog has {have} questions but the ladder has {need} rungs")]
    TooFewQuestions { have: usize, need: usize },

    /// The catalog JSON failed to parse.
    #[error("catalog parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}
