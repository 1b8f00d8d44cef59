//! Unified error type for the Hotseat engine.

use hotseat_bank::BankError;
use hotseat_engine::GameError;
use hotseat_session::SessionError;

/// Top-level error that wraps all crate-specific errors.
///
/// Callers of the `hotseat` meta-crate deal with this single type; the
/// `#[from]` attribute on each variant auto-generates `From` impls, so
/// the `?` operator converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum HotseatError {
    /// Malformed catalog or ladder configuration. Fatal at startup —
    /// a running service never produces these.
    #[error(transparent)]
    Bank(#[from] BankError),

    /// No usable session for the presented token.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// A game transition was rejected or hit an unrecoverable state.
    #[error(transparent)]
    Game(#[from] GameError),
}

impl HotseatError {
    /// Returns `true` for rejections that left the game untouched: the
    /// caller surfaces a notice and re-renders the same question.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Game(
                GameError::LifelineAlreadyUsed(_)
                    | GameError::InvalidOptionIndex(_)
            )
        )
    }

    /// Returns `true` when the only way forward is a fresh start:
    /// missing or expired session, finished game, or an exhausted /
    /// malformed one.
    pub fn needs_restart(&self) -> bool {
        matches!(
            self,
            Self::Session(_)
                | Self::Game(
                    GameError::NotInProgress
                        | GameError::BankExhausted
                        | GameError::UnknownQuestion(_)
                )
        )
    }
}
