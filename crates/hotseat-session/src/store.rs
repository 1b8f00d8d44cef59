//! The session store: every visitor's game, keyed by token.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use rand::Rng;

use hotseat_engine::GameState;

use crate::{Session, SessionConfig, SessionError, SessionToken};

/// In-memory registry of all live sessions.
///
/// ## Lifecycle
///
/// ```text
/// create() ──→ get_mut() ... get_mut() ──→ remove()
///    │              │
///    │              └─ idle past TTL ──→ evicted (Expired)
///    │
/// replace() — same token, fresh game (the "play again" path)
/// ```
///
/// Expiry is enforced two ways: lazily on access (an expired hit is
/// evicted and reported) and in bulk via [`sweep`](Self::sweep) for
/// sessions nobody ever comes back to.
pub struct SessionStore {
    sessions: HashMap<SessionToken, Session>,
    config: SessionConfig,
}

impl SessionStore {
    /// Creates an empty store with the given config.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            sessions: HashMap::new(),
            config,
        }
    }

    /// Creates a session for a brand-new visitor: mints a token and
    /// stores the game under it.
    pub fn create(&mut self, game: GameState) -> &Session {
        let token = mint_token();
        let session = Session {
            token: token.clone(),
            game,
            last_seen: Instant::now(),
        };
        self.sessions.insert(token.clone(), session);
        tracing::info!(session = %token, "session created");

        self.sessions.get(&token).expect("just inserted")
    }

    /// Stores a fresh game under an existing token, replacing whatever
    /// was there. This is the restart path — the visitor keeps their
    /// cookie, the game starts over. Unknown tokens are accepted too
    /// (a returning visitor whose old session already expired).
    pub fn replace(&mut self, token: SessionToken, game: GameState) -> &Session {
        let session = Session {
            token: token.clone(),
            game,
            last_seen: Instant::now(),
        };
        self.sessions.insert(token.clone(), session);
        tracing::info!(session = %token, "session reset");

        self.sessions.get(&token).expect("just inserted")
    }

    /// Looks up a session's game for mutation, refreshing its idle
    /// clock. An expired session is evicted on the spot.
    ///
    /// # Errors
    /// - [`SessionError::NotFound`] — no session under this token
    /// - [`SessionError::Expired`] — the session idled past its TTL
    pub fn get_mut(
        &mut self,
        token: &SessionToken,
    ) -> Result<&mut GameState, SessionError> {
        let ttl = Duration::from_secs(self.config.ttl_secs);

        // Expiry check first, on a shared borrow — the mutable borrow
        // below must not be held while evicting.
        let expired = match self.sessions.get(token) {
            None => return Err(SessionError::NotFound(token.clone())),
            Some(session) => session.last_seen.elapsed() > ttl,
        };
        if expired {
            self.sessions.remove(token);
            tracing::info!(session = %token, "session expired on access");
            return Err(SessionError::Expired(token.clone()));
        }

        let session = self
            .sessions
            .get_mut(token)
            .expect("presence checked above");
        session.last_seen = Instant::now();
        Ok(&mut session.game)
    }

    /// Removes a session outright. Returns it if it existed.
    pub fn remove(&mut self, token: &SessionToken) -> Option<Session> {
        let removed = self.sessions.remove(token);
        if removed.is_some() {
            tracing::info!(session = %token, "session removed");
        }
        removed
    }

    /// Evicts every session that has idled past the TTL and returns
    /// their tokens. Call periodically to reclaim memory from visitors
    /// who never came back.
    pub fn sweep(&mut self) -> Vec<SessionToken> {
        let ttl = Duration::from_secs(self.config.ttl_secs);
        let mut evicted = Vec::new();

        self.sessions.retain(|token, session| {
            if session.last_seen.elapsed() > ttl {
                evicted.push(token.clone());
                false
            } else {
                true
            }
        });

        for token in &evicted {
            tracing::info!(session = %token, "session expired (swept)");
        }
        evicted
    }

    /// Number of live sessions (including any not yet swept).
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns `true` if no sessions are stored.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// Mints a random 32-character hex token (128 bits of entropy).
fn mint_token() -> SessionToken {
    let mut rng = rand::rng();
    let bytes: [u8; 16] = rng.random();
    SessionToken(bytes.iter().map(|b| format!("{b:02x}")).collect())
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    //! Unit tests for `SessionStore`.
    //!
    //! Expiry depends on elapsed time. Instead of sleeping, the tests
    //! pick TTLs at the extremes:
    //!   - `ttl_secs: 0` → sessions expire immediately
    //!   - `ttl_secs: 3600` → sessions never expire during a test
    //! This keeps them fast and deterministic.

    use super::*;
    use hotseat_bank::{PrizeLadder, Question, QuestionBank, QuestionId};
    use hotseat_engine::GameState;

    // -- Helpers ----------------------------------------------------------

    fn store_with_instant_expiry() -> SessionStore {
        SessionStore::new(SessionConfig { ttl_secs: 0 })
    }

    fn store_with_long_ttl() -> SessionStore {
        SessionStore::new(SessionConfig { ttl_secs: 3600 })
    }

    fn fresh_game() -> GameState {
        let questions = (1..=3)
            .map(|id| Question {
                id: QuestionId(id),
                text: format!("question {id}"),
                options: ["a".into(), "b".into(), "c".into(), "d".into()],
                correct_index: 0,
                hint: None,
            })
            .collect();
        let bank = QuestionBank::new(questions).unwrap();
        let ladder = PrizeLadder::new(vec![50, 100, 250], 0).unwrap();
        GameState::new(&bank, &ladder)
    }

    // =====================================================================
    // create() / replace()
    // =====================================================================

    #[test]
    fn test_create_mints_32_char_hex_token() {
        let mut store = store_with_long_ttl();

        let session = store.create(fresh_game());

        assert_eq!(session.token.as_str().len(), 32);
        assert!(session
            .token
            .as_str()
            .chars()
            .all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_create_each_visitor_gets_unique_token() {
        let mut store = store_with_long_ttl();

        let t1 = store.create(fresh_game()).token.clone();
        let t2 = store.create(fresh_game()).token.clone();

        assert_ne!(t1, t2, "tokens must be unique per session");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_replace_resets_game_under_same_token() {
        let mut store = store_with_long_ttl();
        let token = store.create(fresh_game()).token.clone();

        store.replace(token.clone(), fresh_game());

        assert_eq!(store.len(), 1, "replace must not add a second session");
        assert!(store.get_mut(&token).is_ok());
    }

    #[test]
    fn test_replace_accepts_unknown_token() {
        // A returning visitor whose old session was already evicted
        // still gets to restart under their existing cookie.
        let mut store = store_with_long_ttl();
        let token = SessionToken("deadbeefdeadbeefdeadbeefdeadbeef".into());

        store.replace(token.clone(), fresh_game());

        assert!(store.get_mut(&token).is_ok());
    }

    // =====================================================================
    // get_mut()
    // =====================================================================

    #[test]
    fn test_get_mut_unknown_token_returns_not_found() {
        let mut store = store_with_long_ttl();
        let token = SessionToken("0000000000000000".into());

        let result = store.get_mut(&token);

        assert!(matches!(result, Err(SessionError::NotFound(_))));
    }

    #[test]
    fn test_get_mut_live_session_returns_game() {
        let mut store = store_with_long_ttl();
        let token = store.create(fresh_game()).token.clone();

        assert!(store.get_mut(&token).is_ok());
    }

    #[test]
    fn test_get_mut_expired_session_is_evicted() {
        let mut store = store_with_instant_expiry();
        let token = store.create(fresh_game()).token.clone();

        let result = store.get_mut(&token);

        assert!(matches!(result, Err(SessionError::Expired(_))));
        // The eviction is immediate — a second access is a plain miss.
        assert!(matches!(
            store.get_mut(&token),
            Err(SessionError::NotFound(_))
        ));
        assert!(store.is_empty());
    }

    // =====================================================================
    // remove()
    // =====================================================================

    #[test]
    fn test_remove_deletes_session() {
        let mut store = store_with_long_ttl();
        let token = store.create(fresh_game()).token.clone();

        assert!(store.remove(&token).is_some());
        assert!(store.is_empty());
        assert!(store.remove(&token).is_none());
    }

    // =====================================================================
    // sweep()
    // =====================================================================

    #[test]
    fn test_sweep_evicts_only_stale_sessions() {
        let mut store = store_with_instant_expiry();
        let stale = store.create(fresh_game()).token.clone();

        let evicted = store.sweep();

        assert_eq!(evicted, vec![stale]);
        assert!(store.is_empty());
    }

    #[test]
    fn test_sweep_keeps_fresh_sessions() {
        let mut store = store_with_long_ttl();
        store.create(fresh_game());
        store.create(fresh_game());

        let evicted = store.sweep();

        assert!(evicted.is_empty());
        assert_eq!(store.len(), 2);
    }

    // =====================================================================
    // Token display
    // =====================================================================

    #[test]
    fn test_token_display_abbreviates_secret() {
        let token = SessionToken("aabbccddeeff00112233445566778899".into());

        let shown = token.to_string();

        assert_eq!(shown, "S-aabbccdd");
        assert!(!shown.contains("99"), "full secret must not be displayed");
    }
}
