//! Session types: the record that ties a visitor token to a game.

use std::fmt;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use hotseat_engine::GameState;

/// The opaque identifier correlating a visitor with their session.
///
/// A 32-character hex string (128 bits of entropy) minted by the store.
/// The transport layer round-trips it in a cookie; guessing a live token
/// is computationally infeasible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(pub(crate) String);

impl SessionToken {
    /// The full token string, for handing to the transport layer.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Builds a token from the raw cookie value the transport received.
/// No validation happens here — an unknown token is simply a store miss.
impl From<String> for SessionToken {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for SessionToken {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

/// Display shows an abbreviated prefix (`S-1a2b3c4d`), never the full
/// secret — tokens appear in logs on every request.
impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = &self.0[..self.0.len().min(8)];
        write!(f, "S-{prefix}")
    }
}

/// Configuration for session behavior.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// How long (in seconds) a session may sit idle before it is
    /// evicted. Every successful access refreshes the clock.
    ///
    /// Default: 1800 (30 minutes — the usual cookie max-age for a
    /// casual game).
    pub ttl_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { ttl_secs: 1800 }
    }
}

/// One visitor's session: their token, their game, and when they were
/// last seen.
#[derive(Debug, Clone)]
pub struct Session {
    /// The token this session is keyed by.
    pub token: SessionToken,

    /// The in-flight game state.
    pub game: GameState,

    /// Last successful access — the TTL counts from here.
    pub(crate) last_seen: Instant,
}
