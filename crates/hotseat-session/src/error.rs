//! Error types for the session layer.

use crate::SessionToken;

/// Errors raised while resolving a visitor's session.
///
/// Both variants mean the same thing to a caller — there is no active
/// session, redirect to start — but they are kept apart so logs can tell
/// a cold visitor from one whose session timed out.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// No session exists for this token. The visitor never started a
    /// game, or the session was already removed.
    #[error("no session for token {0}")]
    NotFound(SessionToken),

    /// The session sat idle past its TTL and has been evicted.
    #[error("session {0} expired")]
    Expired(SessionToken),
}
