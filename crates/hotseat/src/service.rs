//! The game service: the facade a routing/presentation layer calls.
//!
//! One value of [`GameService`] serves every visitor. The catalog and
//! ladder are immutable and shared freely; the session store and the
//! RNG live behind a single async `Mutex`, so each player action runs
//! its whole load→mutate→store cycle as a critical section — two racing
//! submissions for the same session can never both advance the level.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::Mutex;

use hotseat_bank::{BankError, PrizeLadder, QuestionBank};
use hotseat_engine::{
    GameError, GameState, LifelineKind, Outcome, QuestionView,
};
use hotseat_session::{SessionConfig, SessionStore, SessionToken};

use crate::HotseatError;

/// What `start` hands back: the token to set as a cookie, plus the
/// first question.
#[derive(Debug, Clone)]
pub struct StartedGame {
    pub token: SessionToken,
    pub question: QuestionView,
}

/// What an answer produced: the outcome, and — only while the climb
/// continues — the next question to render.
#[derive(Debug, Clone)]
pub struct AnswerResult {
    pub outcome: Outcome,
    pub question: Option<QuestionView>,
}

/// The mutable half of the service, guarded by one lock.
struct Inner<R> {
    store: SessionStore,
    rng: R,
}

/// The engine facade: question bank + prize ladder + session store,
/// exposed as the five player actions.
///
/// Generic over the RNG so tests can inject a seeded `StdRng`;
/// production uses [`GameService::new`], which seeds from the OS.
pub struct GameService<R: Rng = StdRng> {
    bank: Arc<QuestionBank>,
    ladder: Arc<PrizeLadder>,
    inner: Mutex<Inner<R>>,
}

impl GameService<StdRng> {
    /// Builds a service with an OS-seeded RNG.
    ///
    /// # Errors
    /// [`BankError::TooFewQuestions`] (wrapped) if the catalog cannot
    /// cover a full climb of the ladder — refused at startup rather
    /// than discovered mid-session.
    pub fn new(
        bank: QuestionBank,
        ladder: PrizeLadder,
        config: SessionConfig,
    ) -> Result<Self, BankError> {
        Self::with_rng(bank, ladder, config, StdRng::from_os_rng())
    }
}

impl<R: Rng> GameService<R> {
    /// Builds a service with an injected RNG (deterministic tests).
    pub fn with_rng(
        bank: QuestionBank,
        ladder: PrizeLadder,
        config: SessionConfig,
        rng: R,
    ) -> Result<Self, BankError> {
        bank.check_covers(&ladder)?;
        tracing::info!(
            questions = bank.len(),
            rungs = ladder.len(),
            safe_index = ladder.safe_index(),
            "game service ready"
        );
        Ok(Self {
            bank: Arc::new(bank),
            ladder: Arc::new(ladder),
            inner: Mutex::new(Inner {
                store: SessionStore::new(config),
                rng,
            }),
        })
    }

    /// The prize ladder, for rendering the tower.
    pub fn ladder(&self) -> &PrizeLadder {
        &self.ladder
    }

    /// Starts (or restarts) a game. With a token, the visitor's existing
    /// session is wiped and replaced — the "play again" path; without
    /// one, a fresh token is minted.
    pub async fn start(
        &self,
        token: Option<SessionToken>,
    ) -> Result<StartedGame, HotseatError> {
        let mut inner = self.inner.lock().await;
        let Inner { store, rng } = &mut *inner;

        let mut game = GameState::new(&self.bank, &self.ladder);
        game.start(&self.bank, &self.ladder, rng)?;
        let question = game.current_view(&self.bank, &self.ladder)?;

        let session = match token {
            Some(token) => store.replace(token, game),
            None => store.create(game),
        };

        Ok(StartedGame {
            token: session.token.clone(),
            question,
        })
    }

    /// The current question as the visitor should see it.
    pub async fn current_question(
        &self,
        token: &SessionToken,
    ) -> Result<QuestionView, HotseatError> {
        let mut inner = self.inner.lock().await;
        let game = inner.store.get_mut(token)?;
        Ok(game.current_view(&self.bank, &self.ladder)?)
    }

    /// Resolves an answer. On `Continue` the result carries the freshly
    /// drawn question; on `Won`/`Lost` the session stays stored in its
    /// terminal phase until the visitor starts over (or the TTL evicts
    /// it). Deck exhaustion drops the session outright — a restart is
    /// the only way forward.
    pub async fn submit_answer(
        &self,
        token: &SessionToken,
        choice: usize,
    ) -> Result<AnswerResult, HotseatError> {
        let mut inner = self.inner.lock().await;
        let Inner { store, rng } = &mut *inner;

        let game = store.get_mut(token)?;
        let outcome =
            match game.submit_answer(&self.bank, &self.ladder, rng, choice) {
                Ok(outcome) => outcome,
                Err(err @ GameError::BankExhausted) => {
                    store.remove(token);
                    return Err(err.into());
                }
                Err(err) => return Err(err.into()),
            };

        let question = match outcome {
            Outcome::Continue { .. } => {
                Some(game.current_view(&self.bank, &self.ladder)?)
            }
            Outcome::Won { .. } | Outcome::Lost { .. } => None,
        };

        Ok(AnswerResult { outcome, question })
    }

    /// Spends a lifeline and returns the updated question view. An
    /// already-spent lifeline is a recoverable rejection — the state is
    /// untouched and the same view still stands.
    pub async fn use_lifeline(
        &self,
        token: &SessionToken,
        kind: LifelineKind,
    ) -> Result<QuestionView, HotseatError> {
        let mut inner = self.inner.lock().await;
        let Inner { store, rng } = &mut *inner;

        let game = store.get_mut(token)?;
        match game.use_lifeline(&self.bank, rng, kind) {
            Ok(()) => Ok(game.current_view(&self.bank, &self.ladder)?),
            Err(err @ GameError::BankExhausted) => {
                store.remove(token);
                Err(err.into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Walks away with the prize banked at the current rung.
    pub async fn give_up(
        &self,
        token: &SessionToken,
    ) -> Result<Outcome, HotseatError> {
        let mut inner = self.inner.lock().await;
        let game = inner.store.get_mut(token)?;
        Ok(game.give_up(&self.ladder)?)
    }

    /// Evicts idle sessions; returns how many were dropped. Intended to
    /// be called periodically by whatever hosts the service.
    pub async fn sweep_expired(&self) -> usize {
        self.inner.lock().await.store.sweep().len()
    }

    /// Number of sessions currently stored (terminal ones included).
    pub async fn session_count(&self) -> usize {
        self.inner.lock().await.store.len()
    }
}
