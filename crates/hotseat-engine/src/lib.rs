//! The Hotseat game-state machine.
//!
//! Everything that decides how a game plays out lives here: drawing
//! questions, resolving answers, applying lifelines, and computing
//! payouts. Every operation is a pure, synchronous transition on an
//! explicit [`GameState`] — no globals, no I/O, no clocks. Randomness is
//! injected as a `rand::Rng` parameter so tests can seed it.
//!
//! # Key types
//!
//! - [`GameState`] — one player's full game state (serializable blob)
//! - [`GamePhase`] — `NotStarted → InProgress → {Won, Lost}`
//! - [`LifelineKind`] / [`Lifelines`] — the three one-shot aids
//! - [`Outcome`] — what an answer or a walk-away produced
//! - [`QuestionView`] — the presentation-facing snapshot of a question
//! - [`GameError`] — rejected or unrecoverable transitions

mod error;
mod lifeline;
mod phase;
mod rules;
mod state;
mod view;

pub use error::GameError;
pub use lifeline::{LifelineKind, Lifelines};
pub use phase::GamePhase;
pub use state::GameState;
pub use view::{AnswerOption, Outcome, QuestionView};
