//! Error types for game transitions.

use hotseat_bank::QuestionId;

use crate::LifelineKind;

/// Errors raised by game-state transitions.
///
/// The first three are rejections: the state is left untouched and the
/// caller surfaces a notice. The last two are unrecoverable for the
/// session — the only way forward is a fresh start.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// There is no active question to act on — the game is over, or was
    /// never started. Callers should redirect to start.
    #[error("no game in progress")]
    NotInProgress,

    /// The submitted option index is outside 0–3. Rejected without
    /// touching the state.
    #[error("option index {0} outside 0-3")]
    InvalidOptionIndex(usize),

    /// The lifeline was already spent this session. A no-op notice,
    /// never a fault.
    #[error("lifeline {0} already used")]
    LifelineAlreadyUsed(LifelineKind),

    /// The draw pool ran dry mid-session. Prevented by the startup
    /// coverage check under normal play; a swap on an exactly-sized
    /// catalog can still get here.
    #[error("question bank exhausted")]
    BankExhausted,

    /// The state references a question the bank doesn't know — the
    /// session blob is malformed or from a different catalog.
    #[error("question {0} missing from bank")]
    UnknownQuestion(QuestionId),
}
