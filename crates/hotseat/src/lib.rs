//! # Hotseat
//!
//! A server-side "Who Wants to Be a Millionaire" engine: a fixed
//! question catalog, a prize ladder with a safe rung, three one-shot
//! lifelines, and a per-visitor game-state machine.
//!
//! The routing/presentation layer stays external: it holds one
//! [`GameService`], correlates visitors by session token (a cookie),
//! and calls the five player actions — start, current question, submit
//! answer, use lifeline, give up.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hotseat::prelude::*;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! # let catalog_json = "[]";
//! let bank = QuestionBank::from_json(catalog_json)?;
//! let service = GameService::new(
//!     bank,
//!     PrizeLadder::default(),
//!     SessionConfig::default(),
//! )?;
//!
//! let started = service.start(None).await?;
//! let result = service.submit_answer(&started.token, 2).await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod service;

pub use error::HotseatError;
pub use service::{AnswerResult, GameService, StartedGame};

/// The common imports a consumer needs, in one place.
pub mod prelude {
    pub use crate::{AnswerResult, GameService, HotseatError, StartedGame};
    pub use hotseat_bank::{
        BankError, PrizeLadder, Question, QuestionBank, QuestionId,
        OPTION_COUNT,
    };
    pub use hotseat_engine::{
        AnswerOption, GameError, GamePhase, GameState, LifelineKind,
        Lifelines, Outcome, QuestionView,
    };
    pub use hotseat_session::{
        SessionConfig, SessionError, SessionStore, SessionToken,
    };
}
